//! Explicit outcome of a fallback-guarded read

use serde::{Deserialize, Serialize};
use crate::types::LoadReason;

/// Result of reading an optional JSON file.
///
/// `Absent` and `Invalid` both lead to the caller's fallback, but stay
/// distinguishable for logging and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum LoadOutcome<T> {
    /// File present and parsed
    Loaded(T),
    /// File does not exist
    Absent,
    /// File present but unusable
    Invalid {
        reason: LoadReason,
        detail: String,
    },
}

impl<T> LoadOutcome<T> {
    /// Shorthand for an `Invalid` outcome
    pub fn invalid(reason: LoadReason, detail: impl Into<String>) -> Self {
        Self::Invalid {
            reason,
            detail: detail.into(),
        }
    }

    /// Reason code for this outcome
    pub fn reason(&self) -> LoadReason {
        match self {
            Self::Loaded(_) => LoadReason::L001_LOADED,
            Self::Absent => LoadReason::L002_FILE_ABSENT,
            Self::Invalid { reason, .. } => *reason,
        }
    }

    /// True if the file contributed data
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Take the loaded value or the given fallback
    pub fn or_fallback(self, fallback: T) -> T {
        match self {
            Self::Loaded(value) => value,
            _ => fallback,
        }
    }

    /// Map the loaded value, keeping absent/invalid as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadOutcome<U> {
        match self {
            Self::Loaded(value) => LoadOutcome::Loaded(f(value)),
            Self::Absent => LoadOutcome::Absent,
            Self::Invalid { reason, detail } => LoadOutcome::Invalid { reason, detail },
        }
    }

    /// Split into the value (if any) and a data-free status
    pub fn split(self) -> (Option<T>, LoadOutcome<()>) {
        match self {
            Self::Loaded(value) => (Some(value), LoadOutcome::Loaded(())),
            Self::Absent => (None, LoadOutcome::Absent),
            Self::Invalid { reason, detail } => (None, LoadOutcome::Invalid { reason, detail }),
        }
    }
}

impl<T> std::fmt::Display for LoadOutcome<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { reason, detail } => write!(f, "{} ({})", reason, detail),
            other => write!(f, "{}", other.reason()),
        }
    }
}
