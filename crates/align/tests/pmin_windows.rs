use std::collections::BTreeSet;

use tempest_align::{AlignConfig, AlignError, extract_pmin_windows};
use tempest_calendar::CalendarError;
use tempest_tracks::{EventTable, StormId, TrackError, TrackRow};

fn obs(storm_id: StormId, year: i32, hour: u8, pressure: f64) -> TrackRow {
    TrackRow {
        storm_id,
        lon: 18.0,
        lat: 36.0,
        year,
        month: 9,
        day: 14,
        hour,
        pressure,
    }
}

fn all_hours() -> AlignConfig {
    AlignConfig::new()
        .with_year_range(1979, 2020)
        .with_valid_hours([0, 6, 12, 18])
        .with_offsets(vec![-1, 0, 1])
}

#[test]
fn two_storm_scenario() {
    let table = EventTable::from_rows(&[
        obs(1, 2000, 0, 1000.0),
        obs(1, 2000, 6, 995.0),
        obs(1, 2000, 12, 998.0),
        obs(2, 2000, 0, 1010.0),
        obs(2, 2000, 6, 1005.0),
    ]);
    let out = extract_pmin_windows(&table, &all_hours()).unwrap();
    assert_eq!(out.storm_ids(), vec![1, 2]);
    assert_eq!(out.windows()[0].rows(), &[Some(0), Some(1), Some(2)]);
    assert_eq!(out.windows()[1].rows(), &[Some(3), Some(4), None]);
}

#[test]
fn one_output_row_per_storm_in_range() {
    let table = EventTable::from_rows(&[
        obs(4, 1975, 0, 1000.0),
        obs(3, 1990, 0, 1000.0),
        obs(3, 1990, 6, 990.0),
        obs(8, 2019, 6, 1001.0),
        obs(5, 2025, 0, 980.0),
    ]);
    let out = extract_pmin_windows(&table, &all_hours()).unwrap();
    assert_eq!(out.storm_ids(), vec![3, 8]);
}

#[test]
fn storm_straddling_range_keeps_in_range_rows_only() {
    // Deepest point falls in 1978, outside the range.
    let table = EventTable::from_rows(&[
        obs(1, 1978, 12, 960.0),
        obs(1, 1979, 0, 1000.0),
        obs(1, 1979, 6, 990.0),
        obs(1, 1979, 12, 995.0),
    ]);
    let out = extract_pmin_windows(&table, &all_hours()).unwrap();
    assert_eq!(out.windows()[0].anchor(), Some(2));
    assert_eq!(out.windows()[0].rows(), &[Some(1), Some(2), Some(3)]);
}

#[test]
fn storms_emitted_in_ascending_id_not_table_order() {
    let table = EventTable::from_rows(&[
        obs(30, 2000, 0, 1000.0),
        obs(10, 2000, 0, 1000.0),
        obs(20, 2000, 0, 1000.0),
    ]);
    let out = extract_pmin_windows(&table, &all_hours()).unwrap();
    assert_eq!(out.storm_ids(), vec![10, 20, 30]);
    assert_eq!(out.column(0).unwrap(), vec![Some(1), Some(2), Some(0)]);
}

#[test]
fn minimum_off_valid_hours_snaps_to_nearest_valid_row() {
    // Hourly track, valid hours every 6h; minimum at 09h (position 3).
    let pressures = [1000.0, 999.0, 998.0, 990.0, 997.0, 998.0, 999.0];
    let hours = [6u8, 7, 8, 9, 10, 11, 12];
    let rows: Vec<TrackRow> = hours
        .iter()
        .zip(pressures)
        .map(|(&h, p)| obs(1, 2000, h, p))
        .collect();
    let table = EventTable::from_rows(&rows);
    let config = all_hours().with_offsets(vec![0]);
    let out = extract_pmin_windows(&table, &config).unwrap();
    // 06h (pos 0) and 12h (pos 6) are both 3 rows away: earlier wins.
    assert_eq!(out.windows()[0].rows(), &[Some(0)]);
}

#[test]
fn offsets_count_valid_hour_rows() {
    // Three-hourly track, only synoptic 6h rows are valid.
    let hours = [0u8, 3, 6, 9, 12, 15, 18];
    let pressures = [1004.0, 1002.0, 1000.0, 996.0, 994.0, 999.0, 1001.0];
    let rows: Vec<TrackRow> = hours
        .iter()
        .zip(pressures)
        .map(|(&h, p)| obs(1, 2000, h, p))
        .collect();
    let table = EventTable::from_rows(&rows);
    let config = all_hours().with_offsets(vec![-2, -1, 0, 1, 2]);
    let out = extract_pmin_windows(&table, &config).unwrap();
    // valid rows: 0 (00h), 2 (06h), 4 (12h), 6 (18h); minimum is row 4
    assert_eq!(
        out.windows()[0].rows(),
        &[Some(0), Some(2), Some(4), Some(6), None]
    );
}

#[test]
fn no_valid_hours_gives_all_missing() {
    let table = EventTable::from_rows(&[obs(1, 2000, 3, 1000.0), obs(1, 2000, 9, 990.0)]);
    let out = extract_pmin_windows(&table, &all_hours()).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out.windows()[0].rows(), &[None, None, None]);
    assert_eq!(out.windows()[0].anchor(), None);
}

#[test]
fn all_nan_pressure_gives_all_missing() {
    let table = EventTable::from_rows(&[obs(1, 2000, 0, f64::NAN), obs(1, 2000, 6, f64::NAN)]);
    let out = extract_pmin_windows(&table, &all_hours()).unwrap();
    assert_eq!(out.windows()[0].rows(), &[None, None, None]);
}

#[test]
fn pressure_ties_resolve_to_first_row() {
    let table = EventTable::from_rows(&[
        obs(1, 2000, 0, 1000.0),
        obs(1, 2000, 6, 990.0),
        obs(1, 2000, 12, 995.0),
        obs(1, 2000, 18, 990.0),
    ]);
    let out = extract_pmin_windows(&table, &all_hours().with_offsets(vec![0])).unwrap();
    assert_eq!(out.windows()[0].rows(), &[Some(1)]);
}

#[test]
fn interleaved_storms_use_storm_local_positions() {
    let table = EventTable::from_rows(&[
        obs(1, 2000, 0, 1000.0),
        obs(2, 2000, 0, 1008.0),
        obs(1, 2000, 6, 990.0),
        obs(2, 2000, 6, 1002.0),
        obs(1, 2000, 12, 994.0),
    ]);
    let out = extract_pmin_windows(&table, &all_hours()).unwrap();
    assert_eq!(out.get(1).unwrap().rows(), &[Some(0), Some(2), Some(4)]);
    assert_eq!(out.get(2).unwrap().rows(), &[Some(1), Some(3), None]);
}

#[test]
fn offset_order_is_preserved() {
    let table = EventTable::from_rows(&[
        obs(1, 2000, 0, 1000.0),
        obs(1, 2000, 6, 995.0),
        obs(1, 2000, 12, 998.0),
    ]);
    let config = all_hours().with_offsets(vec![1, -1, 0, 5]);
    let out = extract_pmin_windows(&table, &config).unwrap();
    assert_eq!(out.windows()[0].rows(), &[Some(2), Some(0), Some(1), None]);
}

#[test]
fn anchor_is_always_nearest_valid_row() {
    // Deterministic pseudo-random tracks; check the anchor law directly.
    let mut rows = Vec::new();
    let mut seed = 17u64;
    let mut next = || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as u32
    };
    for storm in 1..=40u32 {
        let n = 3 + (next() % 12) as usize;
        for k in 0..n {
            let hour = ((k * 3) % 24) as u8;
            rows.push(obs(storm, 2000, hour, 950.0 + f64::from(next() % 60)));
        }
    }
    let table = EventTable::from_rows(&rows);
    let valid = BTreeSet::from([0u8, 6, 12, 18]);
    let out = extract_pmin_windows(&table, &all_hours()).unwrap();
    assert_eq!(out.len(), 40);

    for window in out.windows() {
        let storm_rows = table.storm_rows(window.storm_id());
        let p: Vec<f64> = storm_rows.iter().map(|&r| table.pressure()[r]).collect();
        let min = p.iter().copied().fold(f64::INFINITY, f64::min);
        let pmin_pos = p.iter().position(|&v| v == min).unwrap();
        let best = storm_rows
            .iter()
            .enumerate()
            .filter(|&(_, &r)| valid.contains(&table.hours()[r]))
            .min_by_key(|&(pos, _)| pos.abs_diff(pmin_pos))
            .map(|(_, &r)| r);
        assert_eq!(window.anchor(), best);
        assert_eq!(window.rows()[1], best);
    }
}

#[test]
fn invalid_config_rejected() {
    let table = EventTable::default();
    let config = AlignConfig::new().with_offsets(Vec::new());
    assert!(extract_pmin_windows(&table, &config).is_err());
}

#[test]
fn impossible_date_in_range_is_fatal() {
    let table = EventTable::from_rows(&[
        obs(1, 2001, 12, 1000.0),
        obs(1, 2001, 18, 995.0),
        TrackRow {
            month: 4,
            day: 31,
            ..obs(1, 2001, 0, 998.0)
        },
    ]);
    assert_eq!(
        extract_pmin_windows(&table, &all_hours()).unwrap_err(),
        AlignError::Track(TrackError::Calendar {
            row: 2,
            source: CalendarError::InvalidCalendarFields {
                year: 2001,
                month: 4,
                day: 31,
                hour: 0,
            },
        })
    );
}

#[test]
fn impossible_date_outside_range_is_ignored() {
    let table = EventTable::from_rows(&[
        TrackRow {
            day: 31,
            month: 2,
            ..obs(7, 1950, 0, 990.0)
        },
        obs(1, 2001, 0, 1000.0),
    ]);
    let out = extract_pmin_windows(&table, &all_hours()).unwrap();
    assert_eq!(out.storm_ids(), vec![1]);
}
