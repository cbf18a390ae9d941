//! Quantile band configuration.

use crate::category::Category;
use crate::error::QuantileError;

/// Band edges that map a quantile in `[0, 1]` to a [`Category`].
///
/// Edges are inclusive: `q <= low_max` is low, `medium.0 <= q <= medium.1`
/// is medium, `q >= high_min` is high, anything else is unclassified.
/// Quantiles are rounded to `decimals` digits before banding.
///
/// # Example
///
/// ```
/// use tempest_quantile::QuantileBands;
///
/// let bands = QuantileBands::new()
///     .with_low_max(0.2)
///     .with_high_min(0.8);
/// assert!(bands.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct QuantileBands {
    low_max: f64,
    medium: (f64, f64),
    high_min: f64,
    decimals: u32,
}

impl QuantileBands {
    /// Creates bands with defaults.
    ///
    /// Defaults: `low_max = 0.10`, `medium = (0.45, 0.55)`,
    /// `high_min = 0.90`, `decimals = 3`.
    pub fn new() -> Self {
        Self {
            low_max: 0.10,
            medium: (0.45, 0.55),
            high_min: 0.90,
            decimals: 3,
        }
    }

    // --- Builder methods ---

    /// Sets the upper edge of the low band.
    pub fn with_low_max(mut self, v: f64) -> Self {
        self.low_max = v;
        self
    }

    /// Sets the inclusive edges of the medium band.
    pub fn with_medium(mut self, lower: f64, upper: f64) -> Self {
        self.medium = (lower, upper);
        self
    }

    /// Sets the lower edge of the high band.
    pub fn with_high_min(mut self, v: f64) -> Self {
        self.high_min = v;
        self
    }

    /// Sets the number of decimal digits quantiles are rounded to.
    pub fn with_decimals(mut self, d: u32) -> Self {
        self.decimals = d;
        self
    }

    // --- Accessors ---

    pub fn low_max(&self) -> f64 {
        self.low_max
    }

    pub fn medium(&self) -> (f64, f64) {
        self.medium
    }

    pub fn high_min(&self) -> f64 {
        self.high_min
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Maps a quantile to its band.
    ///
    /// Low and high are tested before medium.
    pub fn classify(&self, q: f64) -> Category {
        if q <= self.low_max {
            Category::Low
        } else if q >= self.high_min {
            Category::High
        } else if (self.medium.0..=self.medium.1).contains(&q) {
            Category::Medium
        } else {
            Category::Unclassified
        }
    }

    /// Rounds a quantile to the configured number of decimals.
    ///
    /// Halfway cases round to even.
    pub fn round(&self, q: f64) -> f64 {
        let scale = 10f64.powi(self.decimals as i32);
        (q * scale).round_ties_even() / scale
    }

    /// Validates this configuration.
    ///
    /// Checks that all edges are finite and in `[0, 1]`, that
    /// `low_max < medium.0 <= medium.1 < high_min`, and that `decimals`
    /// is at most 15.
    pub fn validate(&self) -> Result<(), QuantileError> {
        let edges = [
            ("low_max", self.low_max),
            ("medium lower edge", self.medium.0),
            ("medium upper edge", self.medium.1),
            ("high_min", self.high_min),
        ];
        for (name, v) in edges {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(QuantileError::InvalidConfig {
                    reason: format!("{name} must be finite and in [0, 1], got {v}"),
                });
            }
        }

        if self.low_max >= self.medium.0 {
            return Err(QuantileError::InvalidConfig {
                reason: format!(
                    "low_max must be < medium lower edge, got {} >= {}",
                    self.low_max, self.medium.0
                ),
            });
        }

        if self.medium.0 > self.medium.1 {
            return Err(QuantileError::InvalidConfig {
                reason: format!(
                    "medium band must be ordered, got ({}, {})",
                    self.medium.0, self.medium.1
                ),
            });
        }

        if self.medium.1 >= self.high_min {
            return Err(QuantileError::InvalidConfig {
                reason: format!(
                    "medium upper edge must be < high_min, got {} >= {}",
                    self.medium.1, self.high_min
                ),
            });
        }

        if self.decimals > 15 {
            return Err(QuantileError::InvalidConfig {
                reason: format!("decimals must be <= 15, got {}", self.decimals),
            });
        }

        Ok(())
    }
}

impl Default for QuantileBands {
    fn default() -> Self {
        Self::new()
    }
}
