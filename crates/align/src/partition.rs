//! Ordered per-storm partition of an event table.

use std::collections::{BTreeMap, BTreeSet};

use tempest_tracks::{EventTable, StormId};

/// Rows of one storm inside the selected year range.
///
/// `rows` holds table row indices in table order; `valid` holds positions
/// into `rows` whose hour is a valid hour, ascending.
pub(crate) struct StormTrack {
    pub(crate) storm_id: StormId,
    pub(crate) rows: Vec<usize>,
    pub(crate) valid: Vec<usize>,
}

/// Groups rows with `year` in `year_range` by storm, in ascending storm id.
///
/// Storms without any row in range are absent from the output.
pub(crate) fn partition_storms(
    table: &EventTable,
    year_range: (i32, i32),
    valid_hours: &BTreeSet<u8>,
) -> Vec<StormTrack> {
    let (y0, y1) = year_range;
    let mut groups: BTreeMap<StormId, Vec<usize>> = BTreeMap::new();
    for (i, (&storm_id, year)) in table.storm_ids().iter().zip(table.years()).enumerate() {
        if (y0..=y1).contains(year) {
            groups.entry(storm_id).or_default().push(i);
        }
    }

    let hours = table.hours();
    groups
        .into_iter()
        .map(|(storm_id, rows)| {
            let valid = rows
                .iter()
                .enumerate()
                .filter(|&(_, &r)| valid_hours.contains(&hours[r]))
                .map(|(pos, _)| pos)
                .collect();
            StormTrack {
                storm_id,
                rows,
                valid,
            }
        })
        .collect()
}
