//! Configuration for minimum-pressure window extraction.

use std::collections::BTreeSet;

use tempest_tracks::check_year_range;

use crate::error::AlignError;

/// Configuration for [`extract_pmin_windows`](crate::extract_pmin_windows).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use tempest_align::AlignConfig;
///
/// let config = AlignConfig::new()
///     .with_year_range(1979, 2020)
///     .with_valid_hours([0, 12])
///     .with_offsets(vec![-4, -2, 0, 2, 4]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignConfig {
    year_range: (i32, i32),
    valid_hours: BTreeSet<u8>,
    offsets: Vec<i32>,
}

impl AlignConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `year_range = (1979, 2020)`, `valid_hours = {0, 6, 12, 18}`,
    /// `offsets = [-2, -1, 0, 1, 2]`.
    pub fn new() -> Self {
        Self {
            year_range: (1979, 2020),
            valid_hours: BTreeSet::from([0, 6, 12, 18]),
            offsets: vec![-2, -1, 0, 1, 2],
        }
    }

    // --- Builder methods ---

    /// Sets the inclusive year range.
    pub fn with_year_range(mut self, first: i32, last: i32) -> Self {
        self.year_range = (first, last);
        self
    }

    /// Sets the hours of day eligible as window anchors and offsets.
    pub fn with_valid_hours<I: IntoIterator<Item = u8>>(mut self, hours: I) -> Self {
        self.valid_hours = hours.into_iter().collect();
        self
    }

    /// Sets the ordered window offsets, in valid-hour steps.
    pub fn with_offsets(mut self, offsets: Vec<i32>) -> Self {
        self.offsets = offsets;
        self
    }

    // --- Accessors ---

    /// Returns the inclusive year range.
    pub fn year_range(&self) -> (i32, i32) {
        self.year_range
    }

    /// Returns the valid hours.
    pub fn valid_hours(&self) -> &BTreeSet<u8> {
        &self.valid_hours
    }

    /// Returns the window offsets in output order.
    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    /// Returns the window length.
    pub fn window_len(&self) -> usize {
        self.offsets.len()
    }

    /// Validates this configuration.
    ///
    /// Checks that the year range is ordered, valid hours are non-empty and
    /// within 0..=23, and at least one offset is given. A reversed year range
    /// is reported as [`AlignError::Track`].
    pub fn validate(&self) -> Result<(), AlignError> {
        check_year_range(self.year_range)?;

        if self.valid_hours.is_empty() {
            return Err(AlignError::InvalidConfig {
                reason: "valid_hours must not be empty".to_string(),
            });
        }

        if let Some(&hour) = self.valid_hours.iter().find(|&&h| h > 23) {
            return Err(AlignError::InvalidConfig {
                reason: format!("valid_hours must be in 0..=23, got {hour}"),
            });
        }

        if self.offsets.is_empty() {
            return Err(AlignError::InvalidConfig {
                reason: "offsets must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self::new()
    }
}
