//! Fatal errors of a synchronization run

use std::path::PathBuf;

/// Result type for synchronization operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that abort a run.
///
/// Missing or malformed input files are not errors; see `LoadOutcome`.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{} has no `{field}` entry", path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("aspect #{index} is invalid: {reason}")]
    InvalidAspect { index: usize, reason: String },

    #[error("no aspects to aggregate")]
    EmptyAspects,
}

impl SyncError {
    /// Wrap an i/o error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
