//! Calculation logic for the Overtime Pay Calculation Engine.
//!
//! This module contains all the calculation functions for determining
//! overtime pay: the experience allowance step function, the 1/173 hourly
//! rate, the tiered workday and holiday overtime calculations, the
//! per-record entry point, and monthly aggregation.

mod allowance;
mod holiday_overtime;
mod hourly_rate;
mod month_summary;
mod overtime_pay;
mod workday_overtime;

pub use allowance::{
    EXPERIENCE_FIRST_YEAR_ALLOWANCE, EXPERIENCE_YEARLY_STEP, experience_allowance,
};
pub use holiday_overtime::{
    HOLIDAY_TIER_1_HOURS, HOLIDAY_TIER_1_MULTIPLIER, HOLIDAY_TIER_2_HOURS,
    HOLIDAY_TIER_2_MULTIPLIER, HOLIDAY_TIER_3_MULTIPLIER, calculate_holiday_overtime,
};
pub use hourly_rate::{MONTHLY_HOURS_DIVISOR, hourly_rate};
pub use month_summary::summarize_month;
pub use overtime_pay::{calculate_overtime_pay, calculate_record_pay};
pub use workday_overtime::{
    WORKDAY_TIER_1_HOURS, WORKDAY_TIER_1_MULTIPLIER, WORKDAY_TIER_2_MULTIPLIER,
    calculate_workday_overtime,
};
