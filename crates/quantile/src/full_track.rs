//! Full-Track policy: one value per storm.

use tempest_tracks::StormId;
use tracing::info;

use crate::config::QuantileBands;
use crate::error::QuantileError;
use crate::rank::rank_population;
use crate::result::FullTrackResult;

/// Classifies storms by one scalar value each.
///
/// `values[i]` belongs to `storms[i]`. Output order follows `storms`; a NaN
/// value leaves that storm unranked.
///
/// # Errors
///
/// - [`QuantileError::LengthMismatch`] if the slices differ in length.
/// - [`QuantileError::InvalidConfig`] if `bands` is invalid.
/// - [`QuantileError::EmptyPopulation`] if every value is NaN.
#[tracing::instrument(skip(storms, values, bands), fields(n_storms = storms.len()))]
pub fn classify_full_track(
    storms: &[StormId],
    values: &[f64],
    bands: &QuantileBands,
) -> Result<FullTrackResult, QuantileError> {
    if values.len() != storms.len() {
        return Err(QuantileError::LengthMismatch {
            field: "values",
            expected: storms.len(),
            got: values.len(),
        });
    }
    bands.validate()?;

    let records = rank_population(values, bands)?;
    info!(
        n_storms = storms.len(),
        n_valid = records.n_valid(),
        "full-track classification done"
    );
    Ok(FullTrackResult::new(storms.to_vec(), records))
}
