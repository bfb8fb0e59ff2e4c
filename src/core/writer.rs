//! Writer: state file and sync log
//!
//! Both files are fully rewritten (2-space indent, trailing newline).
//! There is no atomic rename; an interrupted write can leave a torn file.

use std::path::Path;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use crate::types::{LogEntry, SelfClockState, SyncError, SyncResult};

/// Overwrite `path` with the state, creating parent directories
pub fn write_state(path: &Path, state: &SelfClockState) -> SyncResult<()> {
    write_pretty(path, state)?;
    debug!(path = %path.display(), aspects = state.aspects.len(), "state written");
    Ok(())
}

/// Append `entry` to `entries` and rewrite the whole log.
///
/// Returns the new log length.
pub fn append_log(path: &Path, mut entries: Vec<Value>, entry: &LogEntry) -> SyncResult<usize> {
    entries.push(serde_json::to_value(entry)?);
    write_pretty(path, &entries)?;
    debug!(path = %path.display(), len = entries.len(), "log written");
    Ok(entries.len())
}

fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> SyncResult<()> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
    }

    std::fs::write(path, json).map_err(|e| SyncError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    fn entry(ts: &str, sci: f64) -> LogEntry {
        LogEntry {
            timestamp: ts.into(),
            sci,
            energy_matter_sum: 1.0,
        }
    }

    #[test]
    fn test_creates_parent_dir_and_trailing_newline() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("self_clock_state.json");
        let state = SelfClockState {
            timestamp: "2025-01-01T00:00:00Z".into(),
            phi_constant: 1.618034,
            sci: 0.0,
            energy_matter_sum: 0.0,
            codex_reference_signature: "Δι".into(),
            aspects: Vec::new(),
        };
        write_state(&path, &state).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\n  \"timestamp\""));
        assert!(text.contains("\"Δι\""), "non-ascii written unescaped");
    }

    #[test]
    fn test_append_keeps_existing_entries() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("log.json");
        let existing = vec![json!({"timestamp": "old", "SCI": 1.0, "ΣE": 2.0})];

        let len = append_log(&path, existing, &entry("new", 3.0)).unwrap();
        assert_eq!(len, 2);

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written[0]["ΣE"], json!(2.0));
        assert_eq!(written[1]["timestamp"], json!("new"));
        assert_eq!(written[1]["SCI"], json!(3.0));
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not dir").unwrap();

        let err = append_log(&blocker.join("log.json"), Vec::new(), &entry("t", 0.0)).unwrap_err();
        assert!(matches!(err, SyncError::Io { .. }));
    }
}
