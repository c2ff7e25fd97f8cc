//! Base hourly rate derivation.
//!
//! The regulation fixes the overtime hourly rate at 1/173 of the monthly
//! wage (base salary plus allowances). The divisor 173 is the statutory
//! monthly-hours constant and is deliberately not configurable.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::Settings;

use super::allowance::experience_allowance;

/// The statutory monthly working hours divisor.
pub const MONTHLY_HOURS_DIVISOR: Decimal = Decimal::from_parts(173, 0, 0, false, 0);

/// Derives the base hourly rate from the wage settings.
///
/// The rate is `(base_salary + experience_allowance) / 173`, unrounded.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidArgument`] if the base
/// salary is not positive.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{hourly_rate, MONTHLY_HOURS_DIVISOR};
/// use overtime_engine::models::Settings;
/// use rust_decimal::Decimal;
///
/// let settings = Settings::new(Decimal::from(2_436_886), 0).unwrap();
/// let rate = hourly_rate(&settings).unwrap();
/// assert_eq!(rate, Decimal::from(2_436_886) / MONTHLY_HOURS_DIVISOR);
/// ```
pub fn hourly_rate(settings: &Settings) -> EngineResult<Decimal> {
    settings.validate()?;
    let total_basic = settings.base_salary + experience_allowance(settings.experience_years);
    Ok(total_basic / MONTHLY_HOURS_DIVISOR)
}
