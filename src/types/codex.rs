//! Codex resonance data supplied by the upstream codex file

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::{DEFAULT_COHERENCE_INDEX, DEFAULT_COMPASSION_CONSTRAINT, DEFAULT_CODEX_SIGNATURE};

/// Codex key for CI
pub const KEY_COHERENCE_INDEX: &str = "coherence_index_CI";
/// Codex key for CF
pub const KEY_COMPASSION_CONSTRAINT: &str = "compassion_constraint_Cf";
/// Codex key for the sync signature
pub const KEY_SYNC_SIGNATURE: &str = "codex_sync_signature";

/// The inputs the harmonizer needs from the codex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodexData {
    /// Coherence index (CI)
    #[serde(rename = "coherence_index_CI")]
    pub coherence_index: f64,
    /// Compassion constraint (CF)
    #[serde(rename = "compassion_constraint_Cf")]
    pub compassion_constraint: f64,
    /// Signature copied into the state file
    #[serde(rename = "codex_sync_signature")]
    pub sync_signature: String,
}

impl Default for CodexData {
    fn default() -> Self {
        Self {
            coherence_index: DEFAULT_COHERENCE_INDEX,
            compassion_constraint: DEFAULT_COMPASSION_CONSTRAINT,
            sync_signature: DEFAULT_CODEX_SIGNATURE.to_string(),
        }
    }
}

impl CodexData {
    /// Read codex values from a JSON object, defaulting each key on its own.
    ///
    /// Numbers and numeric strings are accepted for CI and CF. Anything
    /// else for a key falls back to that key's default.
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();

        let coherence_index = match value.get(KEY_COHERENCE_INDEX) {
            None => defaults.coherence_index,
            Some(v) => as_float(v).unwrap_or_else(|| {
                tracing::warn!(key = KEY_COHERENCE_INDEX, value = %v, "non-numeric codex value, using default");
                defaults.coherence_index
            }),
        };

        let compassion_constraint = match value.get(KEY_COMPASSION_CONSTRAINT) {
            None => defaults.compassion_constraint,
            Some(v) => as_float(v).unwrap_or_else(|| {
                tracing::warn!(key = KEY_COMPASSION_CONSTRAINT, value = %v, "non-numeric codex value, using default");
                defaults.compassion_constraint
            }),
        };

        // The state stores the signature as a string; null reads as unset.
        let sync_signature = match value.get(KEY_SYNC_SIGNATURE) {
            None | Some(Value::Null) => defaults.sync_signature,
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };

        Self {
            coherence_index,
            compassion_constraint,
            sync_signature,
        }
    }
}

/// Interpret a JSON value as a finite float.
///
/// "nan" and "inf" parse as floats but would poison every aggregate,
/// so they count as non-numeric.
fn as_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}
