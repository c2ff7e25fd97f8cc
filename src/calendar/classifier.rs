//! Day classification logic.
//!
//! Determines whether a calendar date is an ordinary workday, the weekly
//! rest day (Sunday), or a listed national holiday. Rest days and national
//! holidays both pay at the holiday overtime tiers; the distinction is kept
//! so callers can label the day correctly.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::holiday::HolidayCalendar;

/// The classification of a calendar date for overtime purposes.
///
/// # Example
///
/// ```
/// use overtime_engine::calendar::DayClass;
///
/// let class = DayClass::WeeklyRest;
/// assert_eq!(format!("{:?}", class), "WeeklyRest");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// An ordinary working day - workday overtime tiers apply.
    Workday,
    /// The weekly rest day (Sunday) - holiday overtime tiers apply.
    WeeklyRest,
    /// A listed national holiday - holiday overtime tiers apply.
    NationalHoliday,
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayClass::Workday => write!(f, "Workday"),
            DayClass::WeeklyRest => write!(f, "Weekly rest day"),
            DayClass::NationalHoliday => write!(f, "National holiday"),
        }
    }
}

impl DayClass {
    /// Returns true for the weekly rest day and national holidays.
    pub fn is_non_working(&self) -> bool {
        !matches!(self, DayClass::Workday)
    }
}

/// Classifies a date against the weekly rest day and the holiday table.
///
/// Sunday always classifies as [`DayClass::WeeklyRest`], even when the date
/// also appears in the holiday table; both classes pay the same tiers, so
/// the weekday check wins.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use overtime_engine::calendar::{classify_day, DayClass, HolidayCalendar, NationalHoliday};
///
/// let calendar = HolidayCalendar::new(
///     2025,
///     vec![NationalHoliday {
///         date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///         name: "Tahun Baru Masehi".to_string(),
///     }],
/// )
/// .unwrap();
///
/// // 2025-01-01 is a Wednesday, but it is in the holiday table.
/// let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert_eq!(classify_day(new_year, &calendar), DayClass::NationalHoliday);
///
/// // 2025-01-05 is a Sunday.
/// let sunday = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
/// assert_eq!(classify_day(sunday, &calendar), DayClass::WeeklyRest);
///
/// // 2025-01-02 is a Thursday and not listed.
/// let thursday = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// assert_eq!(classify_day(thursday, &calendar), DayClass::Workday);
/// ```
pub fn classify_day(date: NaiveDate, calendar: &HolidayCalendar) -> DayClass {
    if date.weekday() == Weekday::Sun {
        DayClass::WeeklyRest
    } else if calendar.contains(date) {
        DayClass::NationalHoliday
    } else {
        DayClass::Workday
    }
}

/// Returns true if the date is a non-working day (weekly rest day or
/// national holiday).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use overtime_engine::calendar::{is_non_working_day, HolidayCalendar, NationalHoliday};
///
/// let calendar = HolidayCalendar::new(
///     2025,
///     vec![NationalHoliday {
///         date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///         name: "Tahun Baru Masehi".to_string(),
///     }],
/// )
/// .unwrap();
///
/// assert!(is_non_working_day(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), &calendar));
/// assert!(!is_non_working_day(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(), &calendar));
/// ```
pub fn is_non_working_day(date: NaiveDate, calendar: &HolidayCalendar) -> bool {
    classify_day(date, calendar).is_non_working()
}
