//! # tempest
//!
//! Storm-track temporal alignment and quantile classification.
//!
//! The root crate wires the workspace crates into one analysis driven by a
//! TOML configuration file.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     T["EventTable"] -->|"extract_pmin_windows()"| W["WindowTable"]
//!     T -->|"storm_min_pressure()"| P["per-storm pmin"]
//!     W -->|"window_distances()"| D["per-slot distance"]
//!     P -->|"classify_full_track()"| F["FullTrackResult"]
//!     D -->|"classify_along_track()"| A["AlongTrackResult"]
//!     C["tempest.toml"] -->|"load_config()"| K["AnalysisConfig"]
//!     K --> W
//!     K --> F
//!     K --> A
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tempest::{parse_config, run_analysis};
//! use tempest::tracks::{EventTable, TrackRow};
//!
//! let config = parse_config("[align]\nyear_range = [2000, 2000]\noffsets = [-1, 0, 1]\n")
//!     .unwrap();
//! let obs = |storm_id, hour, lat, pressure| TrackRow {
//!     storm_id, lon: 10.0, lat, year: 2000, month: 1, day: 5, hour, pressure,
//! };
//! let table = EventTable::from_rows(&[
//!     obs(1, 0, 40.0, 1000.0),
//!     obs(1, 6, 41.0, 995.0),
//!     obs(1, 12, 42.0, 998.0),
//!     obs(2, 0, 35.0, 1010.0),
//!     obs(2, 6, 35.5, 1005.0),
//! ]);
//!
//! let out = run_analysis(&table, &config).unwrap();
//! assert_eq!(out.windows().storm_ids(), vec![1, 2]);
//! assert!(out.is_complete());
//! let full = out.full_track().unwrap();
//! assert_eq!(full.records().quantiles(), vec![0.0, 1.0]);
//! assert_eq!(out.along_track().unwrap().quantile_grid().dim(), (2, 3));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | TOML analysis configuration |
//! | `convert` | TOML sections to crate config types |
//! | `logging` | `tracing` subscriber setup |
//! | `pipeline` | End-to-end `run_analysis` |

pub mod config;
pub mod convert;
pub mod logging;
mod pipeline;

pub use config::{AnalysisConfig, load_config, parse_config};
pub use pipeline::{AnalysisOutput, StageFailure, run_analysis};

pub use tempest_align as align;
pub use tempest_calendar as calendar;
pub use tempest_geo as geo;
pub use tempest_quantile as quantile;
pub use tempest_tracks as tracks;
