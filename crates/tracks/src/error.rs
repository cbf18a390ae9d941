//! Error types for the tempest-tracks crate.

use tempest_calendar::CalendarError;

/// Error type for all fallible operations in the tempest-tracks crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TrackError {
    /// Returned when table columns differ in length.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched column.
        field: &'static str,
        /// Expected length (the `storm_id` column length).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when a year range has its bounds reversed.
    #[error("invalid year range: {start}..={end}")]
    InvalidYearRange {
        /// First year of the range.
        start: i32,
        /// Last year of the range.
        end: i32,
    },

    /// Returned when a row's calendar fields do not form a valid instant.
    #[error("row {row}: {source}")]
    Calendar {
        /// Row index in the table being indexed.
        row: usize,
        /// Underlying calendar error.
        source: CalendarError,
    },
}
