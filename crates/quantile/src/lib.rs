//! Ordinal quantile ranks and three-band classification of storm metrics.
//!
//! A population of scalar values (NaN = missing) is ranked with a stable
//! ordinal ranking: rank 1 is the smallest value and equal values keep their
//! input order. With `m` ranked values, rank `r` maps to the quantile
//! `(r - 1) / (m - 1)`, rounded to a fixed number of decimals, and the
//! rounded quantile is banded into a [`Category`].
//!
//! # Policies
//!
//! | Policy | Population | Entry point |
//! |--------|-----------|-------------|
//! | Full-Track | one value per storm | [`classify_full_track`] |
//! | Along-Track | one value per storm-timestep, pooled over storms | [`classify_along_track`] |
//! | Grouped | independent keyed populations | [`classify_groups`] |
//!
//! Along-Track populations are NaN-padded per storm to the window length
//! before pooling, so the flat output reshapes into a storm × window grid
//! (see [`AlongTrackResult::quantile_grid`]).
//!
//! # Missing and degenerate populations
//!
//! - NaN inputs get no rank, quantile or category.
//! - A population with no non-NaN value is [`QuantileError::EmptyPopulation`].
//! - A population with one non-NaN value gets quantile 0 (always the low
//!   band) and reports [`QuantileRecords::is_degenerate`].
//!
//! # Quick start
//!
//! ```
//! use tempest_quantile::{Category, QuantileBands, classify_full_track};
//!
//! let storms = [11, 12, 13, 14, 15];
//! let values = [5.0, 1.0, 9.0, 3.0, 7.0];
//! let result = classify_full_track(&storms, &values, &QuantileBands::new()).unwrap();
//!
//! assert_eq!(result.records().quantiles(), vec![0.75, 0.0, 1.0, 0.25, 0.5]);
//! assert_eq!(result.get(13).unwrap().category, Some(Category::High));
//! ```

mod along_track;
mod batch;
mod category;
mod config;
mod error;
mod full_track;
mod rank;
mod result;

pub use along_track::classify_along_track;
pub use batch::classify_groups;
pub use category::Category;
pub use config::QuantileBands;
pub use error::QuantileError;
pub use full_track::classify_full_track;
pub use rank::{ordinal_ranks, quantile_ranks};
pub use result::{
    AlongTrackResult, FullTrackResult, GroupedResult, QuantileRecord, QuantileRecords,
};
