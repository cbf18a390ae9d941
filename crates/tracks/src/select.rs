//! Row selection by year range, storm identity and datetime.

use std::collections::BTreeSet;

use tempest_calendar::HourInstant;
use tracing::debug;

use crate::error::TrackError;
use crate::table::{EventTable, Field, StormId};
use crate::time_index::TimeIndex;

/// Which storms a selection keeps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StormFilter {
    /// Keep every storm.
    #[default]
    All,
    /// Keep only the listed storm ids.
    Ids(BTreeSet<StormId>),
}

impl StormFilter {
    /// Filter for a single storm.
    pub fn one(id: StormId) -> Self {
        Self::Ids(BTreeSet::from([id]))
    }

    /// Returns `true` if rows of storm `id` pass the filter.
    pub fn contains(&self, id: StormId) -> bool {
        match self {
            Self::All => true,
            Self::Ids(ids) => ids.contains(&id),
        }
    }
}

/// Checks that `start <= end`.
pub fn check_year_range((start, end): (i32, i32)) -> Result<(), TrackError> {
    if start > end {
        return Err(TrackError::InvalidYearRange { start, end });
    }
    Ok(())
}

/// Keeps rows whose year lies in the inclusive `year_range`.
///
/// # Errors
///
/// Returns [`TrackError::InvalidYearRange`] if the bounds are reversed.
pub fn select_years(table: &EventTable, year_range: (i32, i32)) -> Result<EventTable, TrackError> {
    check_year_range(year_range)?;
    let (y0, y1) = year_range;
    let mask: Vec<bool> = table
        .years()
        .iter()
        .map(|y| (y0..=y1).contains(y))
        .collect();
    let selected = table.filter_mask(&mask);
    debug!(kept = selected.len(), total = table.len(), "year selection");
    Ok(selected)
}

/// Keeps rows of the storms accepted by `filter`.
pub fn select_storms(table: &EventTable, filter: &StormFilter) -> EventTable {
    let mask: Vec<bool> = table.storm_ids().iter().map(|&s| filter.contains(s)).collect();
    table.filter_mask(&mask)
}

/// Keeps rows of the storms accepted by `filter` whose datetime is in `times`.
///
/// An empty `times` set disables datetime filtering. Only rows that pass the
/// storm filter are converted to datetimes.
///
/// # Errors
///
/// Returns [`TrackError::Calendar`] if a kept row has invalid calendar fields.
/// The row index refers to the storm-filtered table.
pub fn select_at_times(
    table: &EventTable,
    filter: &StormFilter,
    times: &BTreeSet<HourInstant>,
) -> Result<EventTable, TrackError> {
    let storms = select_storms(table, filter);
    if times.is_empty() {
        return Ok(storms);
    }
    let index = TimeIndex::build(&storms)?;
    let selected = storms.filter_mask(&index.mask(times));
    debug!(
        kept = selected.len(),
        candidates = storms.len(),
        n_times = times.len(),
        "datetime selection"
    );
    Ok(selected)
}

/// Extracts the requested columns for the storms accepted by `filter`.
///
/// Returns one vector per entry of `fields`, each holding the values of all
/// selected rows in table order.
pub fn storm_values(table: &EventTable, filter: &StormFilter, fields: &[Field]) -> Vec<Vec<f64>> {
    let rows: Vec<usize> = table
        .storm_ids()
        .iter()
        .enumerate()
        .filter(|&(_, &s)| filter.contains(s))
        .map(|(i, _)| i)
        .collect();
    fields
        .iter()
        .map(|&field| {
            let column = table.column(field);
            rows.iter().map(|&i| column[i]).collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TrackRow;

    fn row(storm_id: StormId, year: i32, hour: u8, pressure: f64) -> TrackRow {
        TrackRow {
            storm_id,
            lon: f64::from(storm_id),
            lat: 35.0,
            year,
            month: 12,
            day: 31,
            hour,
            pressure,
        }
    }

    fn table() -> EventTable {
        EventTable::from_rows(&[
            row(1, 1990, 12, 1000.0),
            row(1, 1990, 18, 998.0),
            row(2, 1995, 0, 1005.0),
            row(3, 2001, 6, 990.0),
        ])
    }

    #[test]
    fn years_inclusive() {
        let selected = select_years(&table(), (1990, 1995)).unwrap();
        assert_eq!(selected.storm_ids(), &[1, 1, 2]);
    }

    #[test]
    fn years_reversed() {
        assert_eq!(
            select_years(&table(), (2000, 1990)).unwrap_err(),
            TrackError::InvalidYearRange {
                start: 2000,
                end: 1990,
            }
        );
    }

    #[test]
    fn storms_by_id() {
        let filter = StormFilter::Ids(BTreeSet::from([1, 3]));
        assert_eq!(select_storms(&table(), &filter).storm_ids(), &[1, 1, 3]);
        assert_eq!(select_storms(&table(), &StormFilter::All).len(), 4);
    }

    #[test]
    fn at_times() {
        let times = BTreeSet::from([HourInstant::new(1990, 12, 31, 18).unwrap()]);
        let selected = select_at_times(&table(), &StormFilter::one(1), &times).unwrap();
        assert_eq!(selected.pressure(), &[998.0]);
    }

    #[test]
    fn at_times_empty_set_keeps_storm_rows() {
        let selected = select_at_times(&table(), &StormFilter::one(1), &BTreeSet::new()).unwrap();
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn at_times_ignores_invalid_rows_of_other_storms() {
        let mut rows: Vec<TrackRow> = table().rows().collect();
        rows.push(TrackRow {
            day: 32,
            ..row(9, 1990, 0, 1000.0)
        });
        let table = EventTable::from_rows(&rows);
        let times = BTreeSet::from([HourInstant::new(1990, 12, 31, 12).unwrap()]);
        assert!(select_at_times(&table, &StormFilter::one(1), &times).is_ok());
        assert!(select_at_times(&table, &StormFilter::All, &times).is_err());
    }

    #[test]
    fn values_per_field() {
        let values = storm_values(&table(), &StormFilter::one(1), &[Field::Lon, Field::Pressure]);
        assert_eq!(values, vec![vec![1.0, 1.0], vec![1000.0, 998.0]]);
    }
}
