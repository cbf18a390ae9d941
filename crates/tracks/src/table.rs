//! Columnar storm-track event table.

use std::collections::BTreeSet;

use crate::error::TrackError;

/// Identifier of one storm track.
pub type StormId = u32;

/// A single `(storm, timestamp)` observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRow {
    /// Track identifier.
    pub storm_id: StormId,
    /// Longitude in degrees east.
    pub lon: f64,
    /// Latitude in degrees north.
    pub lat: f64,
    /// Calendar year.
    pub year: i32,
    /// Month (1..=12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Hour of day (UTC).
    pub hour: u8,
    /// Central pressure (hPa). NaN marks a missing value.
    pub pressure: f64,
}

/// Owned column vectors used to build an [`EventTable`].
#[derive(Debug, Clone, Default)]
pub struct TrackColumns {
    pub storm_id: Vec<StormId>,
    pub lon: Vec<f64>,
    pub lat: Vec<f64>,
    pub year: Vec<i32>,
    pub month: Vec<u8>,
    pub day: Vec<u8>,
    pub hour: Vec<u8>,
    pub pressure: Vec<f64>,
}

/// Floating-point columns addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Lon,
    Lat,
    Pressure,
}

/// Immutable tabular view of one storm-track dataset.
///
/// One row per `(storm, timestamp)` observation, stored column-wise. Rows of
/// a single storm are expected to be time-ordered without duplicate
/// timestamps; the loader that produces the table is responsible for that.
/// Row identifiers handed out by the analysis crates are indices into these
/// columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTable {
    storm_id: Vec<StormId>,
    lon: Vec<f64>,
    lat: Vec<f64>,
    year: Vec<i32>,
    month: Vec<u8>,
    day: Vec<u8>,
    hour: Vec<u8>,
    pressure: Vec<f64>,
}

impl EventTable {
    /// Build from owned columns.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::LengthMismatch`] if any column length differs
    /// from the `storm_id` column.
    pub fn from_columns(columns: TrackColumns) -> Result<Self, TrackError> {
        let n = columns.storm_id.len();
        let lengths = [
            ("lon", columns.lon.len()),
            ("lat", columns.lat.len()),
            ("year", columns.year.len()),
            ("month", columns.month.len()),
            ("day", columns.day.len()),
            ("hour", columns.hour.len()),
            ("pressure", columns.pressure.len()),
        ];
        if let Some(&(field, got)) = lengths.iter().find(|&&(_, len)| len != n) {
            return Err(TrackError::LengthMismatch {
                field,
                expected: n,
                got,
            });
        }
        Ok(Self {
            storm_id: columns.storm_id,
            lon: columns.lon,
            lat: columns.lat,
            year: columns.year,
            month: columns.month,
            day: columns.day,
            hour: columns.hour,
            pressure: columns.pressure,
        })
    }

    /// Build from a slice of rows, preserving order.
    pub fn from_rows(rows: &[TrackRow]) -> Self {
        rows.iter().copied().collect()
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.storm_id.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.storm_id.is_empty()
    }

    /// Returns the row at `index`, or `None` if out of bounds.
    pub fn row(&self, index: usize) -> Option<TrackRow> {
        (index < self.len()).then(|| TrackRow {
            storm_id: self.storm_id[index],
            lon: self.lon[index],
            lat: self.lat[index],
            year: self.year[index],
            month: self.month[index],
            day: self.day[index],
            hour: self.hour[index],
            pressure: self.pressure[index],
        })
    }

    /// Iterates over all rows in order.
    pub fn rows(&self) -> impl Iterator<Item = TrackRow> + '_ {
        (0..self.len()).filter_map(|i| self.row(i))
    }

    pub fn storm_ids(&self) -> &[StormId] {
        &self.storm_id
    }

    pub fn lon(&self) -> &[f64] {
        &self.lon
    }

    pub fn lat(&self) -> &[f64] {
        &self.lat
    }

    pub fn years(&self) -> &[i32] {
        &self.year
    }

    pub fn months(&self) -> &[u8] {
        &self.month
    }

    pub fn days(&self) -> &[u8] {
        &self.day
    }

    pub fn hours(&self) -> &[u8] {
        &self.hour
    }

    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    /// Returns a floating-point column by name.
    pub fn column(&self, field: Field) -> &[f64] {
        match field {
            Field::Lon => &self.lon,
            Field::Lat => &self.lat,
            Field::Pressure => &self.pressure,
        }
    }

    /// Distinct storm ids in ascending numeric order.
    pub fn unique_storm_ids(&self) -> Vec<StormId> {
        let ids: BTreeSet<StormId> = self.storm_id.iter().copied().collect();
        ids.into_iter().collect()
    }

    /// Row indices of one storm, in table order.
    pub fn storm_rows(&self, id: StormId) -> Vec<usize> {
        self.storm_id
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == id)
            .map(|(i, _)| i)
            .collect()
    }

    /// Builds a new table from the rows at `indices`, in the given order.
    ///
    /// Indices out of bounds are skipped.
    pub fn take(&self, indices: &[usize]) -> Self {
        indices.iter().filter_map(|&i| self.row(i)).collect()
    }

    /// Builds a new table keeping rows where `mask` is `true`.
    ///
    /// Rows beyond the end of `mask` are dropped.
    pub fn filter_mask(&self, mask: &[bool]) -> Self {
        self.rows()
            .zip(mask.iter())
            .filter(|&(_, &keep)| keep)
            .map(|(row, _)| row)
            .collect()
    }
}

impl FromIterator<TrackRow> for EventTable {
    fn from_iter<I: IntoIterator<Item = TrackRow>>(iter: I) -> Self {
        let mut table = Self::default();
        for row in iter {
            table.storm_id.push(row.storm_id);
            table.lon.push(row.lon);
            table.lat.push(row.lat);
            table.year.push(row.year);
            table.month.push(row.month);
            table.day.push(row.day);
            table.hour.push(row.hour);
            table.pressure.push(row.pressure);
        }
        table
    }
}
