//! Temporal alignment of storm tracks around their pressure minimum.
//!
//! For each storm, the row nearest the pressure minimum among the rows at
//! valid hours (the hours at which gridded data exist) becomes the anchor of
//! a fixed list of offsets. Offsets count valid-hour rows, not wall-clock
//! hours. Offsets that run past either end of the storm's valid-hour rows
//! are reported as missing rather than clipped.
//!
//! # Pipeline
//!
//! ```text
//!  EventTable ──▶ year filter ──▶ per-storm partition (ascending id)
//!                                      │
//!          pmin row ◀── stable argmin ─┤
//!                                      ▼
//!          anchor = nearest valid-hour row ──▶ anchor + offsets ──▶ WindowTable
//! ```
//!
//! # Quick start
//!
//! ```
//! use tempest_align::{AlignConfig, extract_pmin_windows};
//! use tempest_tracks::{EventTable, TrackRow};
//!
//! let rows: Vec<TrackRow> = [(0u8, 1000.0), (6, 995.0), (12, 998.0)]
//!     .into_iter()
//!     .map(|(hour, pressure)| TrackRow {
//!         storm_id: 1, lon: 20.0, lat: 35.0, year: 2010,
//!         month: 11, day: 2, hour, pressure,
//!     })
//!     .collect();
//! let table = EventTable::from_rows(&rows);
//!
//! let config = AlignConfig::new()
//!     .with_year_range(2010, 2010)
//!     .with_offsets(vec![-1, 0, 1]);
//! let windows = extract_pmin_windows(&table, &config).unwrap();
//! assert_eq!(windows.windows()[0].rows(), &[Some(0), Some(1), Some(2)]);
//! ```

mod config;
mod error;
pub mod metrics;
mod partition;
mod result;
mod window;

pub use config::AlignConfig;
pub use error::AlignError;
pub use result::{StormWindow, WindowTable};
pub use window::extract_pmin_windows;
