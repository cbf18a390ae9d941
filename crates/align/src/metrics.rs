//! Per-window and per-storm scalar metrics.
//!
//! Window metrics return one value per offset, NaN where the window slot is
//! missing, so they line up with the offset columns of a [`WindowTable`].

use std::collections::BTreeMap;

use tempest_geo::haversine_km;
use tempest_tracks::{EventTable, Field, StormId};

use crate::error::AlignError;
use crate::result::{StormWindow, WindowTable};

fn check_row(row: usize, table: &EventTable) -> Result<usize, AlignError> {
    if row < table.len() {
        Ok(row)
    } else {
        Err(AlignError::RowOutOfBounds {
            row,
            len: table.len(),
        })
    }
}

/// Values of `field` at each window slot, NaN for missing slots.
///
/// # Errors
///
/// Returns [`AlignError::RowOutOfBounds`] if the window was built from a
/// different, larger table.
pub fn gather(
    window: &StormWindow,
    table: &EventTable,
    field: Field,
) -> Result<Vec<f64>, AlignError> {
    let column = table.column(field);
    window
        .rows()
        .iter()
        .map(|slot| match *slot {
            Some(row) => check_row(row, table).map(|r| column[r]),
            None => Ok(f64::NAN),
        })
        .collect()
}

/// Cumulative great-circle displacement (km) along the window.
///
/// The first present slot is 0; every later present slot adds the distance
/// from the previous present slot. Missing slots are NaN.
///
/// # Errors
///
/// Returns [`AlignError::RowOutOfBounds`] if a slot is not a row of `table`.
pub fn cumulative_distance(
    window: &StormWindow,
    table: &EventTable,
) -> Result<Vec<f64>, AlignError> {
    let lon = table.lon();
    let lat = table.lat();
    let mut out = Vec::with_capacity(window.rows().len());
    let mut previous: Option<usize> = None;
    let mut total = 0.0;
    for slot in window.rows() {
        match *slot {
            Some(row) => {
                let row = check_row(row, table)?;
                if let Some(p) = previous {
                    total += haversine_km(lon[p], lat[p], lon[row], lat[row]);
                }
                previous = Some(row);
                out.push(total);
            }
            None => out.push(f64::NAN),
        }
    }
    Ok(out)
}

/// [`cumulative_distance`] for every storm of a window table, in storm order.
///
/// # Errors
///
/// Returns [`AlignError::RowOutOfBounds`] if any window slot is not a row of
/// `table`.
pub fn window_distances(
    windows: &WindowTable,
    table: &EventTable,
) -> Result<Vec<Vec<f64>>, AlignError> {
    windows
        .windows()
        .iter()
        .map(|w| cumulative_distance(w, table))
        .collect()
}

/// Minimum central pressure of each listed storm, NaN-aware.
///
/// Storms that are absent from the table, or whose pressures are all NaN,
/// yield NaN. Output order follows `storms`.
pub fn storm_min_pressure(table: &EventTable, storms: &[StormId]) -> Vec<f64> {
    let mut minima: BTreeMap<StormId, f64> = BTreeMap::new();
    for (&storm_id, &p) in table.storm_ids().iter().zip(table.pressure()) {
        if p.is_nan() {
            continue;
        }
        minima
            .entry(storm_id)
            .and_modify(|m| *m = m.min(p))
            .or_insert(p);
    }
    storms
        .iter()
        .map(|id| minima.get(id).copied().unwrap_or(f64::NAN))
        .collect()
}
