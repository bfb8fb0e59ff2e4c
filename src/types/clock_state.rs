//! Persisted Self-Clock state

use serde::{Deserialize, Serialize};
use crate::types::Aspect;

/// Contents of the self-clock state file, rewritten on every run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfClockState {
    /// Run time, ISO-8601 UTC with second precision
    pub timestamp: String,
    /// Golden ratio rounded to 6 places
    #[serde(alias = "ϕ_constant")]
    pub phi_constant: f64,
    /// Mean activation (SCI)
    #[serde(rename = "semantic_coherence_index_SCI")]
    pub sci: f64,
    /// Σ (A + N) over all aspects
    pub energy_matter_sum: f64,
    /// Signature of the codex the run was aligned with
    pub codex_reference_signature: String,
    /// Updated aspects, in input order
    pub aspects: Vec<Aspect>,
}
