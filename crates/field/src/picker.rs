//! Selection state for picker-backed fields.

use chrono::NaiveDate;

/// `strftime` layout used for date-picker text.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats a picked date the way it is written into the field.
///
/// ```rust
/// use chrono::NaiveDate;
/// use smartfield_field::picker::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(format_date(date), "2024-03-09");
/// ```
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Current selection of a picker. Reset whenever the field type changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PickerSelection {
    /// Highlighted row of a list picker; starts on the first row.
    pub row: usize,
    /// Date chosen on a date picker, if any.
    pub date: Option<NaiveDate>,
}
