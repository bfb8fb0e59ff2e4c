//! Self-Clock: harmonic synchronization of the 32 aspects
//!
//! Pipeline: codex + state → harmonizer → aggregator → state file + log

pub mod core;
pub mod types;

// =============================================================================
// CODEX DEFAULTS [C] - used when the codex file is absent or unreadable
// =============================================================================

/// Default coherence index (CI)
pub const DEFAULT_COHERENCE_INDEX: f64 = 0.96;

/// Default compassion constraint (CF)
pub const DEFAULT_COMPASSION_CONSTRAINT: f64 = 0.94;

/// Default codex signature
pub const DEFAULT_CODEX_SIGNATURE: &str = "N/A";

// =============================================================================
// CLOCK GEOMETRY [C]
// =============================================================================

/// Number of aspects in a freshly generated clock
pub const ASPECT_COUNT: usize = 32;

/// Aspects per ring when generating defaults
pub const ASPECTS_PER_RING: usize = 4;

/// Outermost ring
pub const RING_MAX: i64 = 8;

/// Last developmental stage
pub const STAGE_MAX: i64 = 12;

/// Ring bonus applied to resonance: (ring / 8) * 0.05
pub const RING_RESONANCE_BONUS: f64 = 0.05;

// =============================================================================
// ROUNDING [C]
// =============================================================================

/// Decimal places for aspect activation
pub const ACTIVATION_DECIMALS: usize = 2;

/// Decimal places for field vector components and aggregates
pub const FIELD_DECIMALS: usize = 3;

/// Decimal places for the persisted phi constant
pub const PHI_DECIMALS: usize = 6;

// =============================================================================
// FILE LAYOUT
// =============================================================================

/// Codex file name, relative to the repository root
pub const CODEX_FILE_NAME: &str = "UPS_Codex_Δι-11∞_LivingFramework.json";

/// State directory, relative to the repository root
pub const STATE_DIR_NAME: &str = "data";

/// State file name inside the state directory
pub const STATE_FILE_NAME: &str = "self_clock_state.json";

/// Log file name, relative to the repository root
pub const LOG_FILE_NAME: &str = "self_clock_log.json";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";

/// The golden ratio, (1 + √5) / 2
pub fn phi() -> f64 {
    (1.0 + 5f64.sqrt()) / 2.0
}
