//! Core data models for the Overtime Pay Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day_key;
mod pay_result;
mod record;
mod settings;

pub use day_key::DayKey;
pub use pay_result::{MonthSummary, OvertimePayResult, PayCategory, PayLine};
pub use record::OvertimeRecord;
pub use settings::Settings;
