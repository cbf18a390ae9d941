//! End-to-end analysis: windows, Full-Track and Along-Track classification.

use anyhow::{Context, Result};
use tempest_align::metrics::{storm_min_pressure, window_distances};
use tempest_align::{WindowTable, extract_pmin_windows};
use tempest_quantile::{
    AlongTrackResult, FullTrackResult, QuantileError, classify_along_track, classify_full_track,
};
use tempest_tracks::{EventTable, select_years};
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::convert::{build_align_config, build_quantile_bands};

/// A classification stage that failed during [`run_analysis`].
#[derive(Debug, Clone, PartialEq)]
pub struct StageFailure {
    /// Stage name: `"full-track"` or `"along-track"`.
    pub stage: &'static str,
    /// Why the stage failed.
    pub error: QuantileError,
}

/// Output of [`run_analysis`].
///
/// A classification that failed is `None` and its error is listed in
/// [`failures`](Self::failures).
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    windows: WindowTable,
    full_track: Option<FullTrackResult>,
    along_track: Option<AlongTrackResult>,
    failures: Vec<StageFailure>,
}

impl AnalysisOutput {
    /// Pressure-minimum windows, one per storm in ascending id.
    pub fn windows(&self) -> &WindowTable {
        &self.windows
    }

    /// Storms classified by minimum in-range pressure.
    pub fn full_track(&self) -> Option<&FullTrackResult> {
        self.full_track.as_ref()
    }

    /// Window timesteps classified by cumulative distance along the window.
    pub fn along_track(&self) -> Option<&AlongTrackResult> {
        self.along_track.as_ref()
    }

    /// Classification stages that failed, in pipeline order.
    pub fn failures(&self) -> &[StageFailure] {
        &self.failures
    }

    /// Whether both classifications succeeded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs the whole analysis on an event table.
///
/// 1. Extract the pressure-minimum window of every storm in the year range.
/// 2. Classify storms by their minimum pressure within the year range. The
///    deepest storm has rank 1 and falls in the low band.
/// 3. Classify every window timestep by the cumulative great-circle
///    distance travelled since the first present window slot.
///
/// Storm order is ascending id in all three outputs. The two
/// classifications run independently: if one has no usable population it
/// is recorded in [`AnalysisOutput::failures`] and the other is still
/// returned.
///
/// # Errors
///
/// Fails if the configuration is invalid or if window extraction fails,
/// for example on an impossible calendar date inside the year range.
#[tracing::instrument(skip(table, config), fields(n_rows = table.len()))]
pub fn run_analysis(table: &EventTable, config: &AnalysisConfig) -> Result<AnalysisOutput> {
    let align = build_align_config(&config.align)?;
    let bands = build_quantile_bands(&config.quantile)?;

    let windows = extract_pmin_windows(table, &align).context("window extraction failed")?;
    let storm_ids = windows.storm_ids();
    let mut failures = Vec::new();

    let in_range = select_years(table, align.year_range()).context("year selection failed")?;
    let pmin = storm_min_pressure(&in_range, &storm_ids);
    let full_track = record_stage(
        "full-track",
        classify_full_track(&storm_ids, &pmin, &bands),
        &mut failures,
    );

    let distances = window_distances(&windows, table).context("window distance failed")?;
    let population: Vec<_> = storm_ids.iter().copied().zip(distances).collect();
    let along_track = record_stage(
        "along-track",
        classify_along_track(&population, windows.window_len(), &bands),
        &mut failures,
    );

    info!(
        n_storms = storm_ids.len(),
        window_len = windows.window_len(),
        n_failed = failures.len(),
        "analysis complete"
    );
    Ok(AnalysisOutput {
        windows,
        full_track,
        along_track,
        failures,
    })
}

fn record_stage<T>(
    stage: &'static str,
    result: Result<T, QuantileError>,
    failures: &mut Vec<StageFailure>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(stage, %error, "classification skipped");
            failures.push(StageFailure { stage, error });
            None
        }
    }
}
