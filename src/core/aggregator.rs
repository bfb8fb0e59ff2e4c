//! Aggregator: SCI and energy-matter sum over the updated aspects

use tracing::warn;
use crate::{ASPECT_COUNT, FIELD_DECIMALS};
use crate::core::harmonizer::round_to;
use crate::types::{Aspect, SyncError, SyncResult};

/// Summary scalars of one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    /// round(mean(activation), 3)
    pub sci: f64,
    /// round(Σ (A + N), 3)
    pub energy_matter_sum: f64,
}

/// Compute SCI and the energy-matter sum.
///
/// An empty sequence has no mean and is rejected. Counts other than 32
/// are accepted as-is.
pub fn aggregate(aspects: &[Aspect]) -> SyncResult<Aggregate> {
    if aspects.is_empty() {
        return Err(SyncError::EmptyAspects);
    }
    if aspects.len() != ASPECT_COUNT {
        warn!(count = aspects.len(), expected = ASPECT_COUNT, "unexpected aspect count");
    }

    let activation_total: f64 = aspects.iter().map(|a| a.activation).sum();
    let sci = round_to(activation_total / aspects.len() as f64, FIELD_DECIMALS);

    let energy: f64 = aspects.iter().map(|a| a.field_vector.energy_matter()).sum();
    let energy_matter_sum = round_to(energy, FIELD_DECIMALS);

    Ok(Aggregate { sci, energy_matter_sum })
}
