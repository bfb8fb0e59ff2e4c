//! Sync: one full synchronization run
//!
//! codex + previous state → harmonize → aggregate → state file → log

use std::path::{Path, PathBuf};
use tracing::info;
use crate::{phi, CODEX_FILE_NAME, LOG_FILE_NAME, PHI_DECIMALS, STATE_DIR_NAME, STATE_FILE_NAME};
use crate::core::aggregator::aggregate;
use crate::core::harmonizer::{round_to, Harmonizer};
use crate::core::loader::{load_codex, load_log, load_state_aspects};
use crate::core::writer::{append_log, write_state};
use crate::types::{LogEntry, SelfClockState, SyncReport, SyncResult};

/// Timestamp format written to state and log (ISO-8601 UTC, seconds)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// File locations for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Upstream codex (optional input)
    pub codex_path: PathBuf,
    /// Self-clock state (input and output)
    pub state_path: PathBuf,
    /// Sync log (input and output)
    pub log_path: PathBuf,
}

impl SyncConfig {
    /// Standard layout under a repository root
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            codex_path: root.join(CODEX_FILE_NAME),
            state_path: root.join(STATE_DIR_NAME).join(STATE_FILE_NAME),
            log_path: root.join(LOG_FILE_NAME),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::from_root(".")
    }
}

/// Current UTC time in [`TIMESTAMP_FORMAT`]
pub fn timestamp_now() -> String {
    chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Run one synchronization and return its report.
///
/// Missing or malformed inputs fall back to defaults. Write failures,
/// a state without aspects, and an empty aspect list are errors.
pub fn run(config: &SyncConfig, timestamp: &str) -> SyncResult<SyncReport> {
    let (codex, codex_status) = load_codex(&config.codex_path);
    let (previous, state_status) = load_state_aspects(&config.state_path)?;

    let aspects = Harmonizer::from_codex(&codex).harmonize_all(&previous);
    let totals = aggregate(&aspects)?;

    let state = SelfClockState {
        timestamp: timestamp.to_string(),
        phi_constant: round_to(phi(), PHI_DECIMALS),
        sci: totals.sci,
        energy_matter_sum: totals.energy_matter_sum,
        codex_reference_signature: codex.sync_signature.clone(),
        aspects,
    };
    write_state(&config.state_path, &state)?;

    let (entries, _) = load_log(&config.log_path);
    let entry = LogEntry {
        timestamp: timestamp.to_string(),
        sci: totals.sci,
        energy_matter_sum: totals.energy_matter_sum,
    };
    let log_len = append_log(&config.log_path, entries, &entry)?;

    info!(
        timestamp,
        sci = totals.sci,
        energy_matter_sum = totals.energy_matter_sum,
        aspects = state.aspects.len(),
        "self-clock synchronized"
    );

    Ok(SyncReport {
        timestamp: timestamp.to_string(),
        sci: totals.sci,
        energy_matter_sum: totals.energy_matter_sum,
        codex_reference_signature: state.codex_reference_signature,
        aspect_count: state.aspects.len(),
        state_path: config.state_path.clone(),
        log_path: config.log_path.clone(),
        log_len,
        codex_status,
        state_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_root_layout() {
        let config = SyncConfig::from_root("/repo");
        assert_eq!(config.codex_path, Path::new("/repo/UPS_Codex_Δι-11∞_LivingFramework.json"));
        assert_eq!(config.state_path, Path::new("/repo/data/self_clock_state.json"));
        assert_eq!(config.log_path, Path::new("/repo/self_clock_log.json"));
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp_now();
        assert_eq!(ts.len(), 20);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[10..11], "T");
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }
}
