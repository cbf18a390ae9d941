//! Error types for the tempest-quantile crate.

use tempest_tracks::StormId;

/// Error type for all fallible operations in the tempest-quantile crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantileError {
    /// Returned when a population has no non-missing value to rank.
    #[error("population of {len} values has no non-missing entry")]
    EmptyPopulation {
        /// Total number of entries, missing included.
        len: usize,
    },

    /// Returned when paired inputs differ in length.
    #[error("{field}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Name of the mismatched input.
        field: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when a storm has more along-track values than window slots.
    #[error("storm {storm_id}: {len} values exceed window length {window_len}")]
    WindowTooLong {
        /// The offending storm.
        storm_id: StormId,
        /// Number of values supplied for the storm.
        len: usize,
        /// Configured window length.
        window_len: usize,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
