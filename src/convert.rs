//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result};

use tempest_align::AlignConfig;
use tempest_quantile::QuantileBands;

use crate::config::{AlignToml, QuantileToml};

/// Builds a validated [`AlignConfig`] from the `[align]` section.
pub fn build_align_config(align: &AlignToml) -> Result<AlignConfig> {
    let [first, last] = align.year_range;
    let cfg = AlignConfig::new()
        .with_year_range(first, last)
        .with_valid_hours(align.valid_hours.iter().copied())
        .with_offsets(align.offsets.clone());
    cfg.validate().context("invalid [align] section")?;
    Ok(cfg)
}

/// Builds validated [`QuantileBands`] from the `[quantile]` section.
pub fn build_quantile_bands(quantile: &QuantileToml) -> Result<QuantileBands> {
    let [lower, upper] = quantile.medium;
    let bands = QuantileBands::new()
        .with_low_max(quantile.low_max)
        .with_medium(lower, upper)
        .with_high_min(quantile.high_min)
        .with_decimals(quantile.decimals);
    bands.validate().context("invalid [quantile] section")?;
    Ok(bands)
}
