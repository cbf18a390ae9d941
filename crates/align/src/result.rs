//! Output types for window extraction.

use tempest_tracks::StormId;

/// Window of one storm: one entry per configured offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StormWindow {
    storm_id: StormId,
    anchor: Option<usize>,
    rows: Vec<Option<usize>>,
}

impl StormWindow {
    pub(crate) fn new(storm_id: StormId, anchor: Option<usize>, rows: Vec<Option<usize>>) -> Self {
        Self {
            storm_id,
            anchor,
            rows,
        }
    }

    /// Returns the storm identifier.
    pub fn storm_id(&self) -> StormId {
        self.storm_id
    }

    /// Returns the table row chosen as offset 0, if the storm has one.
    ///
    /// This is set even when 0 is not among the configured offsets.
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Returns the table row at each offset, `None` where the offset falls
    /// outside the storm's valid-hour rows.
    pub fn rows(&self) -> &[Option<usize>] {
        &self.rows
    }

    /// Number of offsets that resolved to a row.
    pub fn n_present(&self) -> usize {
        self.rows.iter().filter(|r| r.is_some()).count()
    }
}

/// One window per storm, in ascending storm id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTable {
    offsets: Vec<i32>,
    windows: Vec<StormWindow>,
}

impl WindowTable {
    pub(crate) fn new(offsets: Vec<i32>, windows: Vec<StormWindow>) -> Self {
        Self { offsets, windows }
    }

    /// Returns the offsets, one per column.
    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    /// Returns the per-storm windows.
    pub fn windows(&self) -> &[StormWindow] {
        &self.windows
    }

    /// Returns the window of one storm.
    pub fn get(&self, storm_id: StormId) -> Option<&StormWindow> {
        self.windows
            .binary_search_by_key(&storm_id, |w| w.storm_id)
            .ok()
            .map(|i| &self.windows[i])
    }

    /// Returns the storm ids, one per output row.
    pub fn storm_ids(&self) -> Vec<StormId> {
        self.windows.iter().map(|w| w.storm_id).collect()
    }

    /// Number of storms.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Window length (number of offsets).
    pub fn window_len(&self) -> usize {
        self.offsets.len()
    }

    /// Returns the column for `offset` across all storms, or `None` if the
    /// offset was not requested. Duplicate offsets resolve to the first.
    pub fn column(&self, offset: i32) -> Option<Vec<Option<usize>>> {
        let j = self.offsets.iter().position(|&o| o == offset)?;
        Some(self.windows.iter().map(|w| w.rows[j]).collect())
    }

    /// Consumes the table and returns the windows.
    pub fn into_windows(self) -> Vec<StormWindow> {
        self.windows
    }
}
