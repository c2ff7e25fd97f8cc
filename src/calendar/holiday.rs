//! National holiday table.
//!
//! The holiday calendar is a static lookup table for a single supported
//! year, loaded once at startup (see [`crate::config::ConfigLoader`]). It is
//! deliberately not generalized to arbitrary years: the table content is
//! published annually by ministerial decree and must be replaced wholesale.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A national holiday for the supported year.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use overtime_engine::calendar::NationalHoliday;
///
/// let holiday = NationalHoliday {
///     date: NaiveDate::from_ymd_opt(2025, 8, 17).unwrap(),
///     name: "Hari Kemerdekaan".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalHoliday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The official name of the holiday.
    pub name: String,
}

/// The set of national holidays for one calendar year.
///
/// Lookup is by exact calendar-date equality, so there is no ambiguity
/// between zero-padded and bare month/day representations: everything is a
/// [`NaiveDate`] once it enters the calendar.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use overtime_engine::calendar::{HolidayCalendar, NationalHoliday};
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
/// assert!(calendar.contains(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
/// assert!(!calendar.contains(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    year: i32,
    holidays: Vec<NationalHoliday>,
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Creates a holiday calendar for the given year.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] if any holiday falls outside
    /// the declared year. A mixed-year table would silently misclassify
    /// dates, so it is rejected up front.
    pub fn new(year: i32, holidays: Vec<NationalHoliday>) -> EngineResult<Self> {
        if let Some(stray) = holidays.iter().find(|h| h.date.year() != year) {
            return Err(EngineError::InvalidArgument {
                field: "holidays".to_string(),
                message: format!(
                    "holiday '{}' on {} is outside calendar year {}",
                    stray.name, stray.date, year
                ),
            });
        }

        let dates = holidays.iter().map(|h| h.date).collect();
        Ok(Self {
            year,
            holidays,
            dates,
        })
    }

    /// Returns the calendar year this table covers.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns true if the given date is a listed national holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns all holidays in the table, in file order.
    pub fn holidays(&self) -> &[NationalHoliday] {
        &self.holidays
    }

    /// Returns the number of holidays in the table.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Returns true if the table has no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}
