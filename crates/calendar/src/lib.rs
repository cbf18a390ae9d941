//! # tempest-calendar
//!
//! Hour-resolution calendar arithmetic for storm-track observations.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day, hour)"] -->|"HourInstant::new()"| B["HourInstant"]
//!     B -->|".add_hours()"| B
//!     B -->|"timerange()"| C["Vec of HourInstant"]
//!     D["month list"] -->|"month_label()"| E["\"_DJF\""]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tempest_calendar::{HourInstant, month_label, timerange};
//!
//! // Calendar fields are validated, never clamped
//! assert!(HourInstant::new(2001, 4, 31, 0).is_err());
//!
//! // Six-hourly synoptic times for a winter season
//! let start = HourInstant::new(2000, 12, 1, 0).unwrap();
//! let end = HourInstant::new(2001, 3, 1, 0).unwrap();
//! let times = timerange(start, end, 6, &[12, 1, 2]).unwrap();
//! assert_eq!(times.len(), 90 * 4);
//!
//! assert_eq!(month_label(&[12, 1, 2]).unwrap(), "_DJF");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `instant` | Hour-resolution UTC instant |
//! | `timerange` | Regular time range generation with month filtering |
//! | `labels` | Month-selection labels |
//! | `error` | Error types |

mod error;
mod instant;
mod labels;
mod timerange;

pub use error::CalendarError;
pub use instant::HourInstant;
pub use labels::month_label;
pub use timerange::timerange;
