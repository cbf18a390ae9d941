//! Independent classification of several keyed populations.

use tracing::{info, warn};

use crate::config::QuantileBands;
use crate::error::QuantileError;
use crate::rank::rank_population;
use crate::result::GroupedResult;

/// Ranks every group on its own population.
///
/// A group that fails (for example one with only NaN values) is reported in
/// [`GroupedResult::failures`] and does not stop the other groups.
///
/// # Errors
///
/// Returns [`QuantileError::InvalidConfig`] if `bands` is invalid; no group
/// is classified in that case.
#[tracing::instrument(skip(groups, bands), fields(n_groups = groups.len()))]
pub fn classify_groups<K: Clone>(
    groups: &[(K, Vec<f64>)],
    bands: &QuantileBands,
) -> Result<GroupedResult<K>, QuantileError> {
    bands.validate()?;

    let mut records = Vec::with_capacity(groups.len());
    let mut failures = Vec::new();
    for (i, (key, values)) in groups.iter().enumerate() {
        match rank_population(values, bands) {
            Ok(r) => records.push((key.clone(), r)),
            Err(e) => {
                warn!(group = i, error = %e, "group not classified");
                failures.push((key.clone(), e));
            }
        }
    }

    info!(
        n_ok = records.len(),
        n_failed = failures.len(),
        "grouped classification done"
    );
    Ok(GroupedResult::new(records, failures))
}
