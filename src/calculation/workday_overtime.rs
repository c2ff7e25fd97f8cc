//! Workday overtime rate calculation.
//!
//! ## Rate structure
//!
//! **Workday overtime is calculated in two tiers:**
//! - First hour: 150%
//! - Beyond the first hour: 200%
//!
//! Exactly 1.0 hour uses only the first tier; the boundary belongs to the
//! lower tier.

use rust_decimal::Decimal;

use crate::models::{PayCategory, PayLine};

/// The threshold in hours for tier 1 workday overtime.
pub const WORKDAY_TIER_1_HOURS: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Multiplier for the first hour of workday overtime (150%).
pub const WORKDAY_TIER_1_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Multiplier for workday overtime beyond the first hour (200%).
pub const WORKDAY_TIER_2_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Calculates workday overtime pay lines at tiered rates.
///
/// The caller is responsible for validating that `hours` is non-negative
/// (see [`crate::calculation::calculate_overtime_pay`]); zero hours return
/// no lines.
///
/// # Returns
///
/// 0-2 [`PayLine`]s in tier order. The sum of the line hours equals
/// `hours`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::calculate_workday_overtime;
/// use overtime_engine::models::PayCategory;
/// use rust_decimal::Decimal;
///
/// let rate = Decimal::from(10_000);
/// let lines = calculate_workday_overtime(Decimal::from(3), rate);
///
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].category, PayCategory::Overtime150);
/// assert_eq!(lines[0].amount, Decimal::from(15_000)); // 1h at 150%
/// assert_eq!(lines[1].category, PayCategory::Overtime200);
/// assert_eq!(lines[1].amount, Decimal::from(40_000)); // 2h at 200%
/// ```
pub fn calculate_workday_overtime(hours: Decimal, hourly_rate: Decimal) -> Vec<PayLine> {
    let mut pay_lines = Vec::new();

    let tier1_hours = hours.min(WORKDAY_TIER_1_HOURS);
    if tier1_hours > Decimal::ZERO {
        let rate = hourly_rate * WORKDAY_TIER_1_MULTIPLIER;
        pay_lines.push(PayLine {
            category: PayCategory::Overtime150,
            hours: tier1_hours,
            multiplier: WORKDAY_TIER_1_MULTIPLIER,
            rate,
            amount: tier1_hours * rate,
        });
    }

    let tier2_hours = (hours - WORKDAY_TIER_1_HOURS).max(Decimal::ZERO);
    if tier2_hours > Decimal::ZERO {
        let rate = hourly_rate * WORKDAY_TIER_2_MULTIPLIER;
        pay_lines.push(PayLine {
            category: PayCategory::Overtime200,
            hours: tier2_hours,
            multiplier: WORKDAY_TIER_2_MULTIPLIER,
            rate,
            amount: tier2_hours * rate,
        });
    }

    pay_lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    const RATE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

    // ==========================================================================
    // WO-001: zero hours produce no lines
    // ==========================================================================
    #[test]
    fn test_wo_001_zero_hours_no_lines() {
        assert!(calculate_workday_overtime(Decimal::ZERO, RATE).is_empty());
    }

    // ==========================================================================
    // WO-002: a fraction of the first hour pays 150% only
    // ==========================================================================
    #[test]
    fn test_wo_002_half_hour_first_tier_only() {
        let lines = calculate_workday_overtime(dec("0.5"), RATE);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].category, PayCategory::Overtime150);
        assert_eq!(lines[0].hours, dec("0.5"));
        assert_eq!(lines[0].amount, dec("7500"));
    }

    // ==========================================================================
    // WO-003: exactly one hour stays in tier 1 (boundary belongs below)
    // ==========================================================================
    #[test]
    fn test_wo_003_one_hour_boundary_is_tier_1() {
        let lines = calculate_workday_overtime(Decimal::ONE, RATE);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].category, PayCategory::Overtime150);
        assert_eq!(lines[0].amount, dec("15000"));
    }

    // ==========================================================================
    // WO-004: beyond one hour the excess pays 200%
    // ==========================================================================
    #[test]
    fn test_wo_004_two_hours_split_across_tiers() {
        let lines = calculate_workday_overtime(dec("2"), RATE);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].amount, dec("15000")); // 1h * 10000 * 1.5
        assert_eq!(lines[1].amount, dec("20000")); // 1h * 10000 * 2.0
    }

    #[test]
    fn test_fractional_second_tier() {
        let lines = calculate_workday_overtime(dec("1.5"), RATE);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].hours, dec("0.5"));
        assert_eq!(lines[1].amount, dec("10000"));
    }

    #[test]
    fn test_line_hours_sum_to_input() {
        for hours in ["0.5", "1", "1.5", "3", "10"] {
            let hours = dec(hours);
            let total: Decimal = calculate_workday_overtime(hours, RATE)
                .iter()
                .map(|l| l.hours)
                .sum();
            assert_eq!(total, hours);
        }
    }

    #[test]
    fn test_multipliers_recorded_on_lines() {
        let lines = calculate_workday_overtime(dec("3"), RATE);
        assert_eq!(lines[0].multiplier, dec("1.5"));
        assert_eq!(lines[1].multiplier, dec("2"));
    }
}
