//! Experience allowance calculation.
//!
//! Tenure grants an additive allowance on top of the base salary before the
//! hourly rate is derived. The allowance is a step function: the first year
//! of tenure grants a flat 5,000, each further year adds 10,000. Linear,
//! not compounding.

use rust_decimal::Decimal;

/// Allowance granted for the first year of tenure.
pub const EXPERIENCE_FIRST_YEAR_ALLOWANCE: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

/// Allowance added for each year of tenure after the first.
pub const EXPERIENCE_YEARLY_STEP: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);

/// Calculates the experience allowance for the given years of tenure.
///
/// Zero years grant no allowance; `n >= 1` years grant
/// `5000 + (n - 1) * 10000`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::experience_allowance;
/// use rust_decimal::Decimal;
///
/// assert_eq!(experience_allowance(0), Decimal::ZERO);
/// assert_eq!(experience_allowance(1), Decimal::from(5_000));
/// assert_eq!(experience_allowance(2), Decimal::from(15_000));
/// assert_eq!(experience_allowance(5), Decimal::from(45_000));
/// ```
pub fn experience_allowance(years: u32) -> Decimal {
    if years == 0 {
        return Decimal::ZERO;
    }
    EXPERIENCE_FIRST_YEAR_ALLOWANCE + Decimal::from(years - 1) * EXPERIENCE_YEARLY_STEP
}
