//! Holiday and rest-day overtime rate calculation.
//!
//! ## Rate structure
//!
//! **Holiday overtime is calculated in three tiers:**
//! - First 7 hours: 200%
//! - The 8th hour: 300%
//! - Beyond 8 hours: 400%
//!
//! The jump to 300% at the 8th hour is a discontinuity relative to
//! extending the 200% tier: 8 hours pay strictly more than `8 × rate × 2`.
//! A partial 8th hour (7 < hours < 8) is paid pro-rata at 300% so the
//! function stays monotonic in hours.

use rust_decimal::Decimal;

use crate::models::{PayCategory, PayLine};

/// The threshold in hours for tier 1 holiday overtime.
pub const HOLIDAY_TIER_1_HOURS: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// The threshold in hours at which tier 3 begins.
pub const HOLIDAY_TIER_2_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Multiplier for the first seven hours of holiday overtime (200%).
pub const HOLIDAY_TIER_1_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Multiplier for the eighth hour of holiday overtime (300%).
pub const HOLIDAY_TIER_2_MULTIPLIER: Decimal = Decimal::from_parts(3, 0, 0, false, 0);

/// Multiplier for holiday overtime beyond the eighth hour (400%).
pub const HOLIDAY_TIER_3_MULTIPLIER: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Calculates holiday overtime pay lines at tiered rates.
///
/// The caller is responsible for validating that `hours` is non-negative
/// (see [`crate::calculation::calculate_overtime_pay`]); zero hours return
/// no lines.
///
/// # Returns
///
/// 0-3 [`PayLine`]s in tier order. The sum of the line hours equals
/// `hours`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::calculate_holiday_overtime;
/// use overtime_engine::models::PayCategory;
/// use rust_decimal::Decimal;
///
/// let rate = Decimal::from(10_000);
/// let lines = calculate_holiday_overtime(Decimal::from(9), rate);
///
/// assert_eq!(lines.len(), 3);
/// assert_eq!(lines[0].amount, Decimal::from(140_000)); // 7h at 200%
/// assert_eq!(lines[1].amount, Decimal::from(30_000));  // 1h at 300%
/// assert_eq!(lines[2].amount, Decimal::from(40_000));  // 1h at 400%
/// ```
pub fn calculate_holiday_overtime(hours: Decimal, hourly_rate: Decimal) -> Vec<PayLine> {
    let mut pay_lines = Vec::new();

    let tier1_hours = hours.min(HOLIDAY_TIER_1_HOURS);
    if tier1_hours > Decimal::ZERO {
        let rate = hourly_rate * HOLIDAY_TIER_1_MULTIPLIER;
        pay_lines.push(PayLine {
            category: PayCategory::Holiday200,
            hours: tier1_hours,
            multiplier: HOLIDAY_TIER_1_MULTIPLIER,
            rate,
            amount: tier1_hours * rate,
        });
    }

    // The 8th hour, or whatever fraction of it was worked.
    let tier2_hours = (hours.min(HOLIDAY_TIER_2_HOURS) - HOLIDAY_TIER_1_HOURS).max(Decimal::ZERO);
    if tier2_hours > Decimal::ZERO {
        let rate = hourly_rate * HOLIDAY_TIER_2_MULTIPLIER;
        pay_lines.push(PayLine {
            category: PayCategory::Holiday300,
            hours: tier2_hours,
            multiplier: HOLIDAY_TIER_2_MULTIPLIER,
            rate,
            amount: tier2_hours * rate,
        });
    }

    let tier3_hours = (hours - HOLIDAY_TIER_2_HOURS).max(Decimal::ZERO);
    if tier3_hours > Decimal::ZERO {
        let rate = hourly_rate * HOLIDAY_TIER_3_MULTIPLIER;
        pay_lines.push(PayLine {
            category: PayCategory::Holiday400,
            hours: tier3_hours,
            multiplier: HOLIDAY_TIER_3_MULTIPLIER,
            rate,
            amount: tier3_hours * rate,
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

    fn total(lines: &[PayLine]) -> Decimal {
        lines.iter().map(|l| l.amount).sum()
    }

    // ==========================================================================
    // HO-001: zero hours produce no lines
    // ==========================================================================
    #[test]
    fn test_ho_001_zero_hours_no_lines() {
        assert!(calculate_holiday_overtime(Decimal::ZERO, RATE).is_empty());
    }

    // ==========================================================================
    // HO-002: up to seven hours pay 200% flat
    // ==========================================================================
    #[test]
    fn test_ho_002_seven_hours_single_tier() {
        let lines = calculate_holiday_overtime(dec("7"), RATE);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].category, PayCategory::Holiday200);
        assert_eq!(lines[0].amount, dec("140000"));
    }

    // ==========================================================================
    // HO-003: the 8th hour jumps to 300%
    // ==========================================================================
    #[test]
    fn test_ho_003_eighth_hour_at_300() {
        let lines = calculate_holiday_overtime(dec("8"), RATE);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].amount, dec("140000")); // 7h * 200%
        assert_eq!(lines[1].category, PayCategory::Holiday300);
        assert_eq!(lines[1].hours, Decimal::ONE);
        assert_eq!(lines[1].amount, dec("30000"));
    }

    // ==========================================================================
    // HO-004: 8 hours differ from extending the 200% tier (discontinuity)
    // ==========================================================================
    #[test]
    fn test_ho_004_discontinuity_at_eight_hours() {
        let actual = total(&calculate_holiday_overtime(dec("8"), RATE));
        let linear_extension = dec("8") * RATE * HOLIDAY_TIER_1_MULTIPLIER;
        assert_eq!(actual, dec("170000"));
        assert_ne!(actual, linear_extension);
        assert!(actual > linear_extension);
    }

    // ==========================================================================
    // HO-005: past eight hours the excess pays 400%
    // ==========================================================================
    #[test]
    fn test_ho_005_nine_hours_adds_400_tier() {
        let lines = calculate_holiday_overtime(dec("9"), RATE);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].category, PayCategory::Holiday400);
        assert_eq!(lines[2].hours, Decimal::ONE);
        assert_eq!(total(&lines), dec("210000"));
    }

    #[test]
    fn test_partial_eighth_hour_prorated_at_300() {
        let lines = calculate_holiday_overtime(dec("7.5"), RATE);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].category, PayCategory::Holiday300);
        assert_eq!(lines[1].hours, dec("0.5"));
        assert_eq!(total(&lines), dec("155000"));
    }

    #[test]
    fn test_below_seven_hours_is_proportional() {
        let lines = calculate_holiday_overtime(dec("3.5"), RATE);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].amount, dec("70000"));
    }

    #[test]
    fn test_line_hours_sum_to_input() {
        for hours in ["0.5", "7", "7.5", "8", "9", "12"] {
            let hours = dec(hours);
            let sum: Decimal = calculate_holiday_overtime(hours, RATE)
                .iter()
                .map(|l| l.hours)
                .sum();
            assert_eq!(sum, hours);
        }
    }

    #[test]
    fn test_monotonic_across_tier_boundaries() {
        let mut previous = Decimal::ZERO;
        for quarter_hours in 1..=48 {
            let hours = Decimal::new(quarter_hours * 25, 2);
            let pay = total(&calculate_holiday_overtime(hours, RATE));
            assert!(pay > previous, "pay should increase at {} hours", hours);
            previous = pay;
        }
    }
}
