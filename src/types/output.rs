//! Run summary for terminal display

use std::path::PathBuf;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use crate::types::LoadOutcome;

/// What a finished synchronization run reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    /// Run timestamp
    pub timestamp: String,
    /// Mean SCI
    pub sci: f64,
    /// Σ energy-matter
    pub energy_matter_sum: f64,
    /// Codex signature written into the state
    pub codex_reference_signature: String,
    /// Number of aspects harmonized
    pub aspect_count: usize,
    /// Where the state went
    pub state_path: PathBuf,
    /// Where the log entry went
    pub log_path: PathBuf,
    /// Log length after this run
    pub log_len: usize,
    /// How the codex was read
    pub codex_status: LoadOutcome<()>,
    /// How the previous state was read
    pub state_status: LoadOutcome<()>,
}

impl SyncReport {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", "🜁 32-Aspectual Self-Clock Synchronization Report".bold()));
        out.push_str(&format!("   Timestamp: {}\n", self.timestamp.dimmed()));
        out.push_str(&format!("   Mean SCI: {}\n", self.sci.to_string().cyan()));
        out.push_str(&format!("   Σ Energy–Matter: {}\n", self.energy_matter_sum.to_string().cyan()));
        out.push_str(&format!(
            "   Reference Codex Signature: {}\n",
            self.codex_reference_signature.yellow()
        ));
        out.push_str(&format!(
            "   Validation: {}\n",
            "✅ Aspect field vectors harmonically updated.".green()
        ));
        out.push('\n');
        out.push_str("Self-Clock resonance complete.\n");
        out
    }

    /// Format the input/output breakdown shown with --verbose
    pub fn to_verbose_string(&self) -> String {
        format!(
            "   Codex: {}\n   Previous state: {}\n   State file: {}\n   Log file: {} ({} entries)\n",
            self.codex_status,
            self.state_status,
            self.state_path.display(),
            self.log_path.display(),
            self.log_len,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_report_without_colors() {
        colored::control::set_override(false);
        let report = SyncReport {
            timestamp: "2025-03-01T12:00:00Z".into(),
            sci: 28.692,
            energy_matter_sum: 39.914,
            codex_reference_signature: "N/A".into(),
            aspect_count: 32,
            state_path: PathBuf::from("data/self_clock_state.json"),
            log_path: PathBuf::from("self_clock_log.json"),
            log_len: 1,
            codex_status: LoadOutcome::Absent,
            state_status: LoadOutcome::Absent,
        };
        let text = report.to_terminal_string();
        colored::control::unset_override();

        assert!(!text.contains('\x1b'));
        assert!(text.contains("   Timestamp: 2025-03-01T12:00:00Z\n"));
        assert!(text.contains("   Mean SCI: 28.692\n"));
        assert!(text.contains("   Σ Energy–Matter: 39.914\n"));
        assert!(text.contains("   Reference Codex Signature: N/A\n"));
        assert!(text.contains("Validation: ✅ Aspect field vectors harmonically updated."));
    }
}
