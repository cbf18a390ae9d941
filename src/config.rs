//! TOML analysis configuration.
//!
//! ```toml
//! [align]
//! year_range = [1979, 2020]
//! valid_hours = [0, 6, 12, 18]
//! offsets = [-2, -1, 0, 1, 2]
//!
//! [quantile]
//! low_max = 0.10
//! medium = [0.45, 0.55]
//! high_min = 0.90
//! decimals = 3
//!
//! [logging]
//! verbosity = 1
//! ```
//!
//! Every section and field is optional.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level analysis configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Window extraction settings.
    #[serde(default)]
    pub align: AlignToml,

    /// Quantile band settings.
    #[serde(default)]
    pub quantile: QuantileToml,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingToml,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlignToml {
    #[serde(default = "default_year_range")]
    pub year_range: [i32; 2],
    #[serde(default = "default_valid_hours")]
    pub valid_hours: Vec<u8>,
    #[serde(default = "default_offsets")]
    pub offsets: Vec<i32>,
}

impl Default for AlignToml {
    fn default() -> Self {
        Self {
            year_range: default_year_range(),
            valid_hours: default_valid_hours(),
            offsets: default_offsets(),
        }
    }
}

fn default_year_range() -> [i32; 2] {
    [1979, 2020]
}
fn default_valid_hours() -> Vec<u8> {
    vec![0, 6, 12, 18]
}
fn default_offsets() -> Vec<i32> {
    vec![-2, -1, 0, 1, 2]
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuantileToml {
    #[serde(default = "default_low_max")]
    pub low_max: f64,
    #[serde(default = "default_medium")]
    pub medium: [f64; 2],
    #[serde(default = "default_high_min")]
    pub high_min: f64,
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

impl Default for QuantileToml {
    fn default() -> Self {
        Self {
            low_max: default_low_max(),
            medium: default_medium(),
            high_min: default_high_min(),
            decimals: default_decimals(),
        }
    }
}

fn default_low_max() -> f64 {
    0.10
}
fn default_medium() -> [f64; 2] {
    [0.45, 0.55]
}
fn default_high_min() -> f64 {
    0.90
}
fn default_decimals() -> u32 {
    3
}

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LoggingToml {
    /// 0 warn, 1 info, 2 debug, 3+ trace.
    #[serde(default)]
    pub verbosity: u8,
}

/// Parses an analysis configuration from TOML text.
pub fn parse_config(text: &str) -> Result<AnalysisConfig> {
    toml::from_str(text).context("failed to parse TOML config")
}

/// Reads and parses an analysis configuration file.
pub fn load_config(path: &Path) -> Result<AnalysisConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    parse_config(&text)
}
