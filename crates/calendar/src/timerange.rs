//! Regular hourly time ranges.

use crate::error::CalendarError;
use crate::instant::HourInstant;

/// Generates the instants in `[start, end)` spaced `step_hours` apart.
///
/// If `months` is non-empty, only instants whose month is listed are kept;
/// an empty slice keeps every month. The step is applied to the full range
/// before filtering, so kept instants stay on the `start + k * step` lattice.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidStep`] if `step_hours` is zero, or
/// [`CalendarError::InvalidMonth`] if `months` contains a value outside 1..=12.
///
/// # Example
///
/// ```
/// use tempest_calendar::{HourInstant, timerange};
///
/// let start = HourInstant::new(2000, 1, 31, 12).unwrap();
/// let end = HourInstant::new(2000, 2, 1, 12).unwrap();
/// let steps = timerange(start, end, 6, &[]).unwrap();
/// assert_eq!(steps.len(), 4);
/// ```
pub fn timerange(
    start: HourInstant,
    end: HourInstant,
    step_hours: u32,
    months: &[u8],
) -> Result<Vec<HourInstant>, CalendarError> {
    if step_hours == 0 {
        return Err(CalendarError::InvalidStep { hours: step_hours });
    }
    if let Some(&month) = months.iter().find(|m| !(1..=12).contains(*m)) {
        return Err(CalendarError::InvalidMonth { month });
    }

    let mut out = Vec::new();
    let mut current = start;
    while current < end {
        if months.is_empty() || months.contains(&current.month()) {
            out.push(current);
        }
        match current.add_hours(i64::from(step_hours)) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(out)
}
