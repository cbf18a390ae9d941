//! Per-row datetime index of an event table.

use std::collections::BTreeSet;

use tempest_calendar::HourInstant;

use crate::error::TrackError;
use crate::table::EventTable;

/// Datetime of every row of an [`EventTable`], in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeIndex {
    instants: Vec<HourInstant>,
}

impl TimeIndex {
    /// Derives the instant of every row from its calendar fields.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::Calendar`] naming the first row whose
    /// `(year, month, day, hour)` is not a valid instant.
    #[tracing::instrument(skip(table), fields(n_rows = table.len()))]
    pub fn build(table: &EventTable) -> Result<Self, TrackError> {
        let rows: Vec<usize> = (0..table.len()).collect();
        Self::build_rows(table, &rows)
    }

    /// Derives the instants of the listed rows only, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError::Calendar`] naming the first listed row, as a
    /// row of `table`, whose calendar fields are not a valid instant.
    ///
    /// # Panics
    ///
    /// Panics if a listed row is not a row of `table`.
    pub fn build_rows(table: &EventTable, rows: &[usize]) -> Result<Self, TrackError> {
        let instants = rows
            .iter()
            .map(|&row| {
                HourInstant::new(
                    table.years()[row],
                    table.months()[row],
                    table.days()[row],
                    table.hours()[row],
                )
                .map_err(|source| TrackError::Calendar { row, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { instants })
    }

    /// Returns the instants in row order.
    pub fn instants(&self) -> &[HourInstant] {
        &self.instants
    }

    pub fn len(&self) -> usize {
        self.instants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    /// Boolean mask over rows: `true` where the row's instant is in `targets`.
    pub fn mask(&self, targets: &BTreeSet<HourInstant>) -> Vec<bool> {
        self.instants.iter().map(|t| targets.contains(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TrackRow;
    use tempest_calendar::CalendarError;

    fn row(day: u8, hour: u8) -> TrackRow {
        TrackRow {
            storm_id: 1,
            lon: 0.0,
            lat: 0.0,
            year: 2001,
            month: 4,
            day,
            hour,
            pressure: 1000.0,
        }
    }

    #[test]
    fn build_in_row_order() {
        let table = EventTable::from_rows(&[row(30, 18), row(30, 12)]);
        let index = TimeIndex::build(&table).unwrap();
        assert_eq!(
            index.instants(),
            &[
                HourInstant::new(2001, 4, 30, 18).unwrap(),
                HourInstant::new(2001, 4, 30, 12).unwrap()
            ]
        );
    }

    #[test]
    fn invalid_row_is_reported() {
        let table = EventTable::from_rows(&[row(30, 0), row(31, 0)]);
        assert_eq!(
            TimeIndex::build(&table).unwrap_err(),
            TrackError::Calendar {
                row: 1,
                source: CalendarError::InvalidCalendarFields {
                    year: 2001,
                    month: 4,
                    day: 31,
                    hour: 0,
                },
            }
        );
    }

    #[test]
    fn build_rows_reports_table_row() {
        let table = EventTable::from_rows(&[row(31, 0), row(30, 6), row(30, 0)]);
        let index = TimeIndex::build_rows(&table, &[2, 1]).unwrap();
        assert_eq!(
            index.instants(),
            &[
                HourInstant::new(2001, 4, 30, 0).unwrap(),
                HourInstant::new(2001, 4, 30, 6).unwrap()
            ]
        );
        assert!(matches!(
            TimeIndex::build_rows(&table, &[1, 0]),
            Err(TrackError::Calendar { row: 0, .. })
        ));
    }

    #[test]
    fn mask_membership() {
        let table = EventTable::from_rows(&[row(1, 0), row(1, 6), row(1, 12)]);
        let index = TimeIndex::build(&table).unwrap();
        let targets: BTreeSet<HourInstant> = [
            HourInstant::new(2001, 4, 1, 6).unwrap(),
            HourInstant::new(2001, 4, 2, 0).unwrap(),
        ]
        .into_iter()
        .collect();
        assert_eq!(index.mask(&targets), vec![false, true, false]);
    }

    #[test]
    fn empty_table() {
        let index = TimeIndex::build(&EventTable::default()).unwrap();
        assert!(index.is_empty());
        assert!(index.mask(&BTreeSet::new()).is_empty());
    }
}
