//! Harmonizer: recompute activation and field vector per aspect
//!
//! resonance  = CI * CF / phi * (1 + (ring / 8) * 0.05)
//! activation = round(resonance * (stage / 12) * 100, 2)
//!
//! Every value depends only on (ring, stage, CI, CF). Nothing is carried
//! over from the previous activation.

use std::f64::consts::PI;
use crate::{phi, ACTIVATION_DECIMALS, FIELD_DECIMALS, RING_MAX, RING_RESONANCE_BONUS, STAGE_MAX};
use crate::types::{Aspect, CodexData, FieldVector};

/// Applies the harmonic formula for a fixed CI / CF pair
#[derive(Debug, Clone, Copy)]
pub struct Harmonizer {
    ci: f64,
    cf: f64,
    phi: f64,
}

impl Harmonizer {
    /// Create a harmonizer for the given coherence index and compassion constraint
    pub fn new(ci: f64, cf: f64) -> Self {
        Self { ci, cf, phi: phi() }
    }

    /// Create a harmonizer from codex data
    pub fn from_codex(codex: &CodexData) -> Self {
        Self::new(codex.coherence_index, codex.compassion_constraint)
    }

    /// Return an updated copy of `aspect`
    pub fn update(&self, aspect: &Aspect) -> Aspect {
        let ring = aspect.ring as f64;
        let stage = aspect.stage as f64;
        let ring_max = RING_MAX as f64;
        let stage_max = STAGE_MAX as f64;

        let resonance = self.ci * self.cf / self.phi * (1.0 + (ring / ring_max) * RING_RESONANCE_BONUS);
        let activation = round_to(resonance * (stage / stage_max) * 100.0, ACTIVATION_DECIMALS);

        let field_vector = FieldVector {
            g: round_to(normalize(ring, 1.0, ring_max), FIELD_DECIMALS),
            r: round_to(normalize(stage, 1.0, stage_max), FIELD_DECIMALS),
            p: round_to(self.ci / self.phi, FIELD_DECIMALS),
            a: round_to(self.cf / self.phi, FIELD_DECIMALS),
            n: round_to((stage / stage_max * PI).sin(), FIELD_DECIMALS),
            t: round_to((ring / ring_max * PI / 2.0).cos(), FIELD_DECIMALS),
            cx: round_to((ring + stage) / (ring_max + stage_max), FIELD_DECIMALS),
            id: round_to(1.0 - (self.ci - self.cf).abs(), FIELD_DECIMALS),
        };

        Aspect {
            activation,
            field_vector,
            ..aspect.clone()
        }
    }

    /// Update every aspect, preserving order
    pub fn harmonize_all(&self, aspects: &[Aspect]) -> Vec<Aspect> {
        aspects.iter().map(|a| self.update(a)).collect()
    }
}

/// Free-function form of [`Harmonizer::update`]
pub fn update(aspect: &Aspect, ci: f64, cf: f64) -> Aspect {
    Harmonizer::new(ci, cf).update(aspect)
}

/// Map `value` from [lo, hi] onto [0, 1]; not clamped.
///
/// Returns 0.0 for a degenerate range (hi <= lo).
pub fn normalize(value: f64, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return 0.0;
    }
    (value - lo) / (hi - lo)
}

/// Round to `decimals` fractional digits.
///
/// Goes through the exact decimal expansion, so ties resolve on the true
/// binary value (2.675 -> 2.67) rather than on a scaled approximation.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.*}", decimals, value)
        .parse::<f64>()
        .unwrap_or(value)
}
