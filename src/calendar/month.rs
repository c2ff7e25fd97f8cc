//! Month arithmetic helpers.
//!
//! Callers rendering a month grid need the number of days in the month and
//! the weekday the month opens on. Both are derived from `chrono` so leap
//! years are handled correctly.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns the number of days in the given month, or `None` if the
/// year/month combination is out of range.
///
/// # Example
///
/// ```
/// use overtime_engine::calendar::days_in_month;
///
/// assert_eq!(days_in_month(2025, 1), Some(31));
/// assert_eq!(days_in_month(2025, 2), Some(28));
/// assert_eq!(days_in_month(2024, 2), Some(29)); // leap year
/// assert_eq!(days_in_month(2025, 13), None);
/// ```
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next_first - first).num_days() as u32)
}

/// Returns the weekday of the first day of the given month, or `None` if
/// the year/month combination is out of range.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use overtime_engine::calendar::first_weekday_of_month;
///
/// // January 2025 opens on a Wednesday.
/// assert_eq!(first_weekday_of_month(2025, 1), Some(Weekday::Wed));
/// ```
pub fn first_weekday_of_month(year: i32, month: u32) -> Option<Weekday> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.weekday())
}
