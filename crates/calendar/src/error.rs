//! Error types for the tempest-calendar crate.

/// Error type for all fallible operations in the tempest-calendar crate.
///
/// Calendar fields are never clamped: a date that does not exist in the
/// proleptic Gregorian calendar is always reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when `(year, month, day, hour)` do not name a real instant,
    /// e.g. April 31st or hour 24.
    #[error("invalid calendar fields: {year:04}-{month:02}-{day:02} {hour:02}h")]
    InvalidCalendarFields {
        /// Calendar year.
        year: i32,
        /// Month as provided.
        month: u8,
        /// Day of month as provided.
        day: u8,
        /// Hour of day as provided.
        hour: u8,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a time range step is zero.
    #[error("invalid time step: {hours} hours (must be > 0)")]
    InvalidStep {
        /// The step that was provided.
        hours: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_calendar_fields() {
        let err = CalendarError::InvalidCalendarFields {
            year: 2001,
            month: 4,
            day: 31,
            hour: 6,
        };
        assert_eq!(
            err.to_string(),
            "invalid calendar fields: 2001-04-31 06h"
        );
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_step() {
        let err = CalendarError::InvalidStep { hours: 0 };
        assert_eq!(err.to_string(), "invalid time step: 0 hours (must be > 0)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
