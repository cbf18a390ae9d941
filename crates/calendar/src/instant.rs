//! Hour-resolution UTC instant.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::error::CalendarError;

/// A UTC instant truncated to the hour.
///
/// Built from the `(year, month, day, hour)` fields of a track observation.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourInstant(NaiveDateTime);

impl HourInstant {
    /// Creates a new `HourInstant` from calendar fields.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidCalendarFields`] if the fields do not
    /// form a valid Gregorian date and hour (0..=23).
    pub fn new(year: i32, month: u8, day: u8, hour: u8) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
            .and_then(|d| d.and_hms_opt(u32::from(hour), 0, 0))
            .map(Self)
            .ok_or(CalendarError::InvalidCalendarFields {
                year,
                month,
                day,
                hour,
            })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the hour of day (0..=23).
    pub fn hour(self) -> u8 {
        self.0.hour() as u8
    }

    /// Returns the instant `hours` later (or earlier, if negative).
    ///
    /// Returns `None` if the result leaves chrono's representable range.
    pub fn add_hours(self, hours: i64) -> Option<Self> {
        TimeDelta::try_hours(hours)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }

    /// Returns the underlying chrono value.
    pub fn as_naive(self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for HourInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:00"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let t = HourInstant::new(2000, 1, 1, 18).unwrap();
        assert_eq!(t.year(), 2000);
        assert_eq!(t.month(), 1);
        assert_eq!(t.day(), 1);
        assert_eq!(t.hour(), 18);
    }

    #[test]
    fn april_31_rejected() {
        assert_eq!(
            HourInstant::new(2001, 4, 31, 0).unwrap_err(),
            CalendarError::InvalidCalendarFields {
                year: 2001,
                month: 4,
                day: 31,
                hour: 0,
            }
        );
    }

    #[test]
    fn leap_day() {
        assert!(HourInstant::new(2000, 2, 29, 0).is_ok());
        assert!(HourInstant::new(1900, 2, 29, 0).is_err());
    }

    #[test]
    fn hour_24_rejected() {
        assert!(HourInstant::new(2000, 1, 1, 24).is_err());
    }

    #[test]
    fn month_zero_rejected() {
        assert!(HourInstant::new(2000, 0, 1, 0).is_err());
    }

    #[test]
    fn add_hours_crosses_year() {
        let t = HourInstant::new(1999, 12, 31, 18).unwrap();
        let next = t.add_hours(6).unwrap();
        assert_eq!(next, HourInstant::new(2000, 1, 1, 0).unwrap());
        assert_eq!(next.add_hours(-6).unwrap(), t);
    }

    #[test]
    fn ordering_is_chronological() {
        let a = HourInstant::new(2000, 12, 31, 23).unwrap();
        let b = HourInstant::new(2001, 1, 1, 0).unwrap();
        assert!(a < b);
    }

    #[test]
    fn display() {
        let t = HourInstant::new(1985, 3, 7, 6).unwrap();
        assert_eq!(t.to_string(), "1985-03-07T06:00");
    }
}
