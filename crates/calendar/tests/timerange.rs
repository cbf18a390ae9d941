use tempest_calendar::{HourInstant, timerange};

#[test]
fn season_length_matches_calendar() {
    // Dec 2003 (31) + Jan 2004 (31) + Feb 2004 (29, leap) = 91 days
    let start = HourInstant::new(2003, 12, 1, 0).unwrap();
    let end = HourInstant::new(2004, 3, 1, 0).unwrap();
    let times = timerange(start, end, 6, &[]).unwrap();
    assert_eq!(times.len(), 91 * 4);
    assert_eq!(times[0], start);
    assert_eq!(*times.last().unwrap(), HourInstant::new(2004, 2, 29, 18).unwrap());
}

#[test]
fn month_filter_over_several_years() {
    let start = HourInstant::new(2000, 1, 1, 0).unwrap();
    let end = HourInstant::new(2003, 1, 1, 0).unwrap();
    let times = timerange(start, end, 24, &[10]).unwrap();
    assert_eq!(times.len(), 3 * 31);
    assert!(times.iter().all(|t| t.month() == 10 && t.hour() == 0));
}

#[test]
fn step_not_dividing_a_day() {
    let start = HourInstant::new(2000, 1, 1, 0).unwrap();
    let end = HourInstant::new(2000, 1, 2, 0).unwrap();
    let times = timerange(start, end, 5, &[]).unwrap();
    let hours: Vec<u8> = times.iter().map(|t| t.hour()).collect();
    assert_eq!(hours, vec![0, 5, 10, 15, 20]);
}
