//! Short labels for month selections.

use crate::error::CalendarError;

const MONTH_INITIALS: [char; 12] = ['J', 'F', 'M', 'A', 'M', 'J', 'J', 'A', 'S', 'O', 'N', 'D'];

/// Builds a file-name friendly label for a month selection.
///
/// Returns `"_"` followed by the initial of each month in the given order,
/// or an empty string when no months are selected.
///
/// ```
/// use tempest_calendar::month_label;
///
/// assert_eq!(month_label(&[12, 1, 2]).unwrap(), "_DJF");
/// assert_eq!(month_label(&[]).unwrap(), "");
/// ```
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] for months outside 1..=12.
pub fn month_label(months: &[u8]) -> Result<String, CalendarError> {
    if months.is_empty() {
        return Ok(String::new());
    }
    let mut label = String::with_capacity(months.len() + 1);
    label.push('_');
    for &month in months {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        label.push(MONTH_INITIALS[usize::from(month) - 1]);
    }
    Ok(label)
}
