//! Storm-track event tables for the tempest analysis crates.
//!
//! An [`EventTable`] holds one row per `(storm, timestamp)` observation with
//! named columns `{storm_id, lon, lat, year, month, day, hour, pressure}`.
//! It is produced by an external loader and treated as read-only here.
//!
//! # Pipeline
//!
//! ```text
//!  EventTable ──▶ TimeIndex (one HourInstant per row) ──▶ mask(targets)
//!      │
//!      └──▶ select_years / select_storms / select_at_times ──▶ EventTable
//! ```
//!
//! # Quick start
//!
//! ```
//! use std::collections::BTreeSet;
//! use tempest_calendar::HourInstant;
//! use tempest_tracks::{EventTable, StormFilter, TrackRow, select_at_times};
//!
//! let rows = [
//!     TrackRow { storm_id: 1, lon: 15.0, lat: 38.0, year: 1996, month: 10, day: 6, hour: 0, pressure: 1002.0 },
//!     TrackRow { storm_id: 1, lon: 16.1, lat: 38.4, year: 1996, month: 10, day: 6, hour: 6, pressure: 998.5 },
//! ];
//! let table = EventTable::from_rows(&rows);
//! let times = BTreeSet::from([HourInstant::new(1996, 10, 6, 6).unwrap()]);
//! let at_six = select_at_times(&table, &StormFilter::All, &times).unwrap();
//! assert_eq!(at_six.pressure(), &[998.5]);
//! ```

mod error;
mod select;
mod table;
mod time_index;

pub use error::TrackError;
pub use select::{
    StormFilter, check_year_range, select_at_times, select_storms, select_years, storm_values,
};
pub use table::{EventTable, Field, StormId, TrackColumns, TrackRow};
pub use time_index::TimeIndex;
