//! Windows of valid-hour rows around each storm's pressure minimum.

use tempest_tracks::{EventTable, TimeIndex};
use tracing::{debug, info};

use crate::config::AlignConfig;
use crate::error::AlignError;
use crate::partition::{StormTrack, partition_storms};
use crate::result::{StormWindow, WindowTable};

/// Extracts, for every storm, the rows at fixed offsets around the valid-hour
/// row nearest its pressure minimum.
///
/// For each storm with at least one row in `config.year_range()`:
///
/// 1. the pressure minimum is located over all of the storm's rows in range
///    (NaN skipped, first minimum wins);
/// 2. among the rows whose hour is a valid hour, the one closest in row
///    position to the minimum becomes the anchor (earlier row wins ties);
/// 3. each offset `k` selects the valid-hour row `k` steps from the anchor,
///    or `None` if there is no such row.
///
/// Storms come out in ascending storm id. Storms with no valid-hour rows,
/// or whose pressures are all NaN, get a window of all `None`. Row
/// identifiers index into `table`.
///
/// # Errors
///
/// - [`AlignError::InvalidConfig`] or [`AlignError::Track`] if the
///   configuration is invalid.
/// - [`AlignError::Track`] wrapping [`TrackError::Calendar`] if a row in the
///   year range has calendar fields that do not form a valid instant.
///
/// [`TrackError::Calendar`]: tempest_tracks::TrackError::Calendar
#[tracing::instrument(skip(table, config), fields(n_rows = table.len(), year_range = ?config.year_range()))]
pub fn extract_pmin_windows(
    table: &EventTable,
    config: &AlignConfig,
) -> Result<WindowTable, AlignError> {
    config.validate()?;

    let tracks = partition_storms(table, config.year_range(), config.valid_hours());
    for track in &tracks {
        TimeIndex::build_rows(table, &track.rows)?;
    }
    let pressure = table.pressure();

    let mut windows = Vec::with_capacity(tracks.len());
    let mut n_empty = 0usize;
    for track in &tracks {
        let window = storm_window(track, pressure, config.offsets());
        if window.anchor().is_none() {
            n_empty += 1;
            debug!(storm_id = track.storm_id, "no anchor: window left empty");
        }
        windows.push(window);
    }

    info!(
        n_storms = windows.len(),
        n_empty,
        window_len = config.window_len(),
        "pmin windows extracted"
    );
    Ok(WindowTable::new(config.offsets().to_vec(), windows))
}

/// Builds the window of a single storm.
fn storm_window(track: &StormTrack, pressure: &[f64], offsets: &[i32]) -> StormWindow {
    let storm_pressure: Vec<f64> = track.rows.iter().map(|&r| pressure[r]).collect();
    let anchor = stable_argmin(&storm_pressure)
        .and_then(|pmin_pos| nearest_position(&track.valid, pmin_pos));

    let Some(anchor_k) = anchor else {
        return StormWindow::new(track.storm_id, None, vec![None; offsets.len()]);
    };

    let rows = resolve_offsets(anchor_k, offsets, track.valid.len())
        .into_iter()
        .map(|k| k.map(|k| track.rows[track.valid[k]]))
        .collect();
    StormWindow::new(track.storm_id, Some(track.rows[track.valid[anchor_k]]), rows)
}

/// Position of the smallest non-NaN value; the first one on ties.
pub(crate) fn stable_argmin(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if v >= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index into ascending `positions` of the entry nearest `target`.
///
/// Equidistant candidates resolve to the earlier position.
pub(crate) fn nearest_position(positions: &[usize], target: usize) -> Option<usize> {
    positions
        .iter()
        .enumerate()
        .min_by_key(|&(k, &p)| (p.abs_diff(target), k))
        .map(|(k, _)| k)
}

/// Maps each offset to `anchor + offset` when it lies in `[0, n)`.
///
/// Output order follows `offsets`.
pub(crate) fn resolve_offsets(anchor: usize, offsets: &[i32], n: usize) -> Vec<Option<usize>> {
    offsets
        .iter()
        .map(|&o| {
            let idx = anchor as i64 + i64::from(o);
            (0..n as i64).contains(&idx).then_some(idx as usize)
        })
        .collect()
}
