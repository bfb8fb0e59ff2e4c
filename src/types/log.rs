//! Synchronization log entries

use serde::{Deserialize, Serialize};

/// One line of the sync log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Run time, same as the state timestamp
    pub timestamp: String,
    /// SCI of that run
    #[serde(rename = "SCI")]
    pub sci: f64,
    /// Energy-matter sum of that run
    #[serde(alias = "ΣE")]
    pub energy_matter_sum: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_legacy_sigma_key() {
        let entry: LogEntry = serde_json::from_value(json!({
            "timestamp": "2025-01-01T00:00:00Z",
            "SCI": 30.1,
            "ΣE": 29.5
        }))
        .unwrap();
        assert_eq!(entry.energy_matter_sum, 29.5);
        assert_eq!(entry.sci, 30.1);
    }

    #[test]
    fn test_writes_sci_key() {
        let entry = LogEntry {
            timestamp: "2025-01-01T00:00:00Z".into(),
            sci: 1.5,
            energy_matter_sum: 2.0,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["SCI"], json!(1.5));
        assert_eq!(value["energy_matter_sum"], json!(2.0));
    }
}
