//! Calendar model for the Overtime Pay Calculation Engine.
//!
//! This module provides month arithmetic (days in month, first weekday),
//! the national holiday table for the supported year, and the classifier
//! that decides whether a date is a working day, the weekly rest day
//! (Sunday), or a national holiday.

mod classifier;
mod holiday;
mod month;

pub use classifier::{DayClass, classify_day, is_non_working_day};
pub use holiday::{HolidayCalendar, NationalHoliday};
pub use month::{days_in_month, first_weekday_of_month};
