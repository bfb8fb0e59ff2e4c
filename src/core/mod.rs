//! Core modules for the Self-Clock

pub mod loader;
pub mod harmonizer;
pub mod aggregator;
pub mod writer;
pub mod sync;

pub use loader::{load, load_json, load_codex, load_state_aspects, load_log, default_aspects};
pub use harmonizer::{Harmonizer, update, normalize, round_to};
pub use aggregator::{aggregate, Aggregate};
pub use writer::{write_state, append_log};
pub use sync::{run, timestamp_now, SyncConfig, TIMESTAMP_FORMAT};
