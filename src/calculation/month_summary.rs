//! Monthly aggregation.
//!
//! Total hours and pay for a displayed month are the sum over every record
//! whose key falls in that month. Records are summed in day order so the
//! result is deterministic regardless of how the caller's store iterates.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{MonthSummary, OvertimeRecord, Settings};

use super::overtime_pay::calculate_record_pay;

/// Summarizes overtime hours and pay for one (year, month).
///
/// Records outside the month are ignored; pay for each record is derived
/// live from the given settings, never read from storage.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidArgument`] if the settings
/// are invalid or any selected record carries negative hours.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::summarize_month;
/// use overtime_engine::models::{DayKey, OvertimeRecord, Settings};
/// use rust_decimal::Decimal;
///
/// let settings = Settings::new(Decimal::from(2_436_886), 0).unwrap();
/// let records = vec![
///     OvertimeRecord::new(DayKey::new(2025, 1, 6).unwrap(), Decimal::from(2), false),
///     OvertimeRecord::new(DayKey::new(2025, 2, 3).unwrap(), Decimal::from(4), false),
/// ];
///
/// let summary = summarize_month(&records, 2025, 1, &settings).unwrap();
/// assert_eq!(summary.days_worked, 1);
/// assert_eq!(summary.total_hours, Decimal::from(2));
/// ```
pub fn summarize_month(
    records: &[OvertimeRecord],
    year: i32,
    month: u32,
    settings: &Settings,
) -> EngineResult<MonthSummary> {
    settings.validate()?;

    let mut selected: Vec<&OvertimeRecord> = records
        .iter()
        .filter(|record| record.day_key.in_month(year, month))
        .collect();
    selected.sort_by_key(|record| record.day_key.day());

    let mut total_hours = Decimal::ZERO;
    let mut total_pay = Decimal::ZERO;
    for record in &selected {
        total_hours += record.hours;
        total_pay += calculate_record_pay(record, settings)?.total;
    }

    Ok(MonthSummary {
        year,
        month,
        days_worked: selected.len(),
        total_hours,
        total_pay,
    })
}
