//! Per-entry overtime pay calculation.
//!
//! This is the engine's main entry point: validate the inputs, derive the
//! hourly rate, and dispatch to the workday or holiday tier schedule.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{OvertimePayResult, OvertimeRecord, Settings};

use super::holiday_overtime::calculate_holiday_overtime;
use super::hourly_rate::hourly_rate;
use super::workday_overtime::calculate_workday_overtime;

/// Calculates overtime pay for one day's hours.
///
/// The result carries a per-tier breakdown; `total` is the sum of the line
/// amounts. No currency rounding is applied, rounding is a presentation
/// concern.
///
/// # Errors
///
/// Returns [`EngineError::InvalidArgument`] for negative hours or a
/// non-positive base salary. The function never clamps: invalid input is
/// rejected, not silently corrected.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{calculate_overtime_pay, MONTHLY_HOURS_DIVISOR};
/// use overtime_engine::models::Settings;
/// use rust_decimal::Decimal;
///
/// let settings = Settings::new(Decimal::from(2_436_886), 0).unwrap();
/// let rate = Decimal::from(2_436_886) / MONTHLY_HOURS_DIVISOR;
///
/// // One workday hour pays 150%.
/// let result = calculate_overtime_pay(Decimal::ONE, false, &settings).unwrap();
/// assert_eq!(result.total, rate * Decimal::new(15, 1));
///
/// // Seven holiday hours pay 200% each.
/// let result = calculate_overtime_pay(Decimal::from(7), true, &settings).unwrap();
/// assert_eq!(result.total, Decimal::from(7) * (rate * Decimal::from(2)));
/// ```
pub fn calculate_overtime_pay(
    hours: Decimal,
    is_holiday: bool,
    settings: &Settings,
) -> EngineResult<OvertimePayResult> {
    if hours < Decimal::ZERO {
        return Err(EngineError::InvalidArgument {
            field: "hours".to_string(),
            message: format!("must not be negative, got {}", hours),
        });
    }

    let rate = hourly_rate(settings)?;

    if hours == Decimal::ZERO {
        return Ok(OvertimePayResult::zero());
    }

    let pay_lines = if is_holiday {
        calculate_holiday_overtime(hours, rate)
    } else {
        calculate_workday_overtime(hours, rate)
    };

    let total = pay_lines.iter().map(|line| line.amount).sum();
    Ok(OvertimePayResult { total, pay_lines })
}

/// Calculates overtime pay for a stored record.
///
/// Convenience wrapper over [`calculate_overtime_pay`] using the record's
/// hours and holiday flag.
pub fn calculate_record_pay(
    record: &OvertimeRecord,
    settings: &Settings,
) -> EngineResult<OvertimePayResult> {
    calculate_overtime_pay(record.hours, record.is_holiday, settings)
}
