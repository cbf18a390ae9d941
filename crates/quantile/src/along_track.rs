//! Along-Track policy: one value per storm-timestep, pooled across storms.

use tempest_tracks::StormId;
use tracing::{debug, info};

use crate::config::QuantileBands;
use crate::error::QuantileError;
use crate::rank::rank_population;
use crate::result::AlongTrackResult;

/// Classifies per-timestep window values pooled over all storms.
///
/// Each storm's sequence is NaN-padded at the end to `window_len` slots
/// before concatenation, so block `i` of the flat population always holds
/// `storms[i]` and slot `j` of a block is window position `j`. Padding is
/// never ranked. Storm order is the order of `storms`.
///
/// # Errors
///
/// - [`QuantileError::InvalidConfig`] if `window_len` is 0 or `bands` is
///   invalid.
/// - [`QuantileError::WindowTooLong`] if a storm has more than `window_len`
///   values.
/// - [`QuantileError::EmptyPopulation`] if no storm has a non-NaN value.
#[tracing::instrument(skip(storms, bands), fields(n_storms = storms.len()))]
pub fn classify_along_track(
    storms: &[(StormId, Vec<f64>)],
    window_len: usize,
    bands: &QuantileBands,
) -> Result<AlongTrackResult, QuantileError> {
    if window_len == 0 {
        return Err(QuantileError::InvalidConfig {
            reason: "window length must be > 0".to_string(),
        });
    }
    bands.validate()?;

    let population = pad_population(storms, window_len)?;
    debug!(
        len = population.len(),
        "padded along-track population built"
    );

    let records = rank_population(&population, bands)?;
    info!(
        n_storms = storms.len(),
        window_len,
        n_valid = records.n_valid(),
        "along-track classification done"
    );
    let storm_ids = storms.iter().map(|(id, _)| *id).collect();
    Ok(AlongTrackResult::new(storm_ids, window_len, records))
}

/// Concatenates storm sequences, each padded with NaN to `window_len`.
pub(crate) fn pad_population(
    storms: &[(StormId, Vec<f64>)],
    window_len: usize,
) -> Result<Vec<f64>, QuantileError> {
    let mut flat = Vec::with_capacity(storms.len() * window_len);
    for (storm_id, values) in storms {
        if values.len() > window_len {
            return Err(QuantileError::WindowTooLong {
                storm_id: *storm_id,
                len: values.len(),
                window_len,
            });
        }
        flat.extend_from_slice(values);
        flat.resize(flat.len() + window_len - values.len(), f64::NAN);
    }
    Ok(flat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_uniform_stride() {
        let flat = pad_population(&[(1, vec![1.0, 2.0]), (2, vec![]), (3, vec![3.0; 3])], 3)
            .unwrap();
        assert_eq!(flat.len(), 9);
        assert_eq!(&flat[..2], &[1.0, 2.0]);
        assert!(flat[2..6].iter().all(|v| v.is_nan()));
        assert_eq!(&flat[6..], &[3.0, 3.0, 3.0]);
    }

    #[test]
    fn too_long() {
        assert_eq!(
            pad_population(&[(5, vec![0.0; 4])], 3).unwrap_err(),
            QuantileError::WindowTooLong {
                storm_id: 5,
                len: 4,
                window_len: 3,
            }
        );
    }

    #[test]
    fn zero_window() {
        assert!(matches!(
            classify_along_track(&[(1, vec![])], 0, &QuantileBands::new()),
            Err(QuantileError::InvalidConfig { .. })
        ));
    }
}
