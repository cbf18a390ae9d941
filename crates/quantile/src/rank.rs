//! Stable ordinal ranking and the shared quantile kernel.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::config::QuantileBands;
use crate::error::QuantileError;
use crate::result::{QuantileRecord, QuantileRecords};

/// 1-based ordinal ranks of the non-NaN entries of `values`.
///
/// Equal values are ranked in order of appearance. NaN entries get `None`
/// and are not counted.
pub fn ordinal_ranks(values: &[f64]) -> Vec<Option<usize>> {
    let mut order: Vec<usize> = (0..values.len()).filter(|&i| !values[i].is_nan()).collect();
    // stable: ties keep input order
    order.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![None; values.len()];
    for (r, &i) in order.iter().enumerate() {
        ranks[i] = Some(r + 1);
    }
    ranks
}

/// Ranks `values` and bands the resulting quantiles.
///
/// With `m` non-NaN values, the item of rank `r` gets quantile
/// `(r - 1) / (m - 1)`, rounded to `bands.decimals()` digits, and the
/// category of the rounded quantile. A population with a single non-NaN
/// value is degenerate: its quantile is 0 and the result reports
/// [`QuantileRecords::is_degenerate`].
///
/// # Errors
///
/// - [`QuantileError::InvalidConfig`] if `bands` is invalid.
/// - [`QuantileError::EmptyPopulation`] if every value is NaN.
pub fn quantile_ranks(
    values: &[f64],
    bands: &QuantileBands,
) -> Result<QuantileRecords, QuantileError> {
    bands.validate()?;
    rank_population(values, bands)
}

/// Kernel behind [`quantile_ranks`], for already validated bands.
pub(crate) fn rank_population(
    values: &[f64],
    bands: &QuantileBands,
) -> Result<QuantileRecords, QuantileError> {
    let ranks = ordinal_ranks(values);
    let m = ranks.iter().flatten().count();
    if m == 0 {
        return Err(QuantileError::EmptyPopulation { len: values.len() });
    }
    if m == 1 {
        warn!(len = values.len(), "degenerate population: single value gets quantile 0");
    }

    let denom = (m - 1) as f64;
    let records: Vec<QuantileRecord> = values
        .iter()
        .zip(&ranks)
        .map(|(&value, rank)| match *rank {
            Some(r) => {
                let raw = if m > 1 { (r - 1) as f64 / denom } else { 0.0 };
                let q = bands.round(raw);
                QuantileRecord {
                    value,
                    rank: Some(r),
                    quantile: Some(q),
                    category: Some(bands.classify(q)),
                }
            }
            None => QuantileRecord::missing(value),
        })
        .collect();

    debug!(len = values.len(), n_valid = m, "population ranked");
    Ok(QuantileRecords::new(records, m))
}
