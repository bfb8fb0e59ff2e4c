//! Core types for the Self-Clock

mod aspect;
mod codex;
mod clock_state;
mod log;
mod reason;
mod outcome;
mod error;
mod output;

pub use aspect::{Aspect, FieldVector, DEFAULT_ASPECT_NAMES};
pub use codex::{CodexData, KEY_COHERENCE_INDEX, KEY_COMPASSION_CONSTRAINT, KEY_SYNC_SIGNATURE};
pub use clock_state::SelfClockState;
pub use log::LogEntry;
pub use reason::LoadReason;
pub use outcome::LoadOutcome;
pub use error::{SyncError, SyncResult};
pub use output::SyncReport;
