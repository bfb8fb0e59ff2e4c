//! Reason codes for fallback-guarded reads

use serde::{Deserialize, Serialize};

/// Why a guarded read did or did not produce data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum LoadReason {
    // =========================================================================
    // L001: Success
    // =========================================================================
    /// File read and parsed
    L001_LOADED,

    // =========================================================================
    // L002: Absent
    // =========================================================================
    /// File does not exist
    L002_FILE_ABSENT,

    // =========================================================================
    // L003: Invalid
    // =========================================================================
    /// File exists but could not be read
    L003_READ_FAILED,
    /// File is not valid JSON
    L003_PARSE_FAILED,
    /// File is valid JSON of the wrong shape (e.g. array instead of object)
    L003_WRONG_SHAPE,
}

impl LoadReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::L001_LOADED => "L001_LOADED",
            Self::L002_FILE_ABSENT => "L002_FILE_ABSENT",
            Self::L003_READ_FAILED => "L003_READ_FAILED",
            Self::L003_PARSE_FAILED => "L003_PARSE_FAILED",
            Self::L003_WRONG_SHAPE => "L003_WRONG_SHAPE",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::L001_LOADED => "Loaded from file",
            Self::L002_FILE_ABSENT => "File absent, using defaults",
            Self::L003_READ_FAILED => "File unreadable, using defaults",
            Self::L003_PARSE_FAILED => "Malformed JSON, using defaults",
            Self::L003_WRONG_SHAPE => "Unexpected JSON shape, using defaults",
        }
    }
}

impl std::fmt::Display for LoadReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
