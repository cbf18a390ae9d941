//! Error types for the tempest-align crate.

use tempest_tracks::TrackError;

/// Error type for all fallible operations in the tempest-align crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlignError {
    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a window refers to a row the table does not have.
    #[error("row {row} out of bounds for table of {len} rows")]
    RowOutOfBounds {
        /// The offending row identifier.
        row: usize,
        /// Number of rows in the table.
        len: usize,
    },

    /// Track table error.
    #[error(transparent)]
    Track(#[from] TrackError),
}
