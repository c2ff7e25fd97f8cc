//! Pay calculation result types.
//!
//! A calculation produces an [`OvertimePayResult`]: a total plus one
//! [`PayLine`] per overtime tier that was reached, so callers can show how
//! the amount decomposes. Monthly aggregation produces a [`MonthSummary`].
//! All amounts are derived values; nothing here is ever persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The overtime tier a pay line was computed under.
///
/// The numeric suffix is the multiplier in percent, matching how the
/// regulation text names the tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// First hour of workday overtime at 150%.
    Overtime150,
    /// Workday overtime beyond the first hour at 200%.
    Overtime200,
    /// First seven hours of holiday overtime at 200%.
    Holiday200,
    /// The eighth hour of holiday overtime at 300%.
    Holiday300,
    /// Holiday overtime beyond the eighth hour at 400%.
    Holiday400,
}

impl std::fmt::Display for PayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayCategory::Overtime150 => write!(f, "Workday overtime 150%"),
            PayCategory::Overtime200 => write!(f, "Workday overtime 200%"),
            PayCategory::Holiday200 => write!(f, "Holiday overtime 200%"),
            PayCategory::Holiday300 => write!(f, "Holiday overtime 300%"),
            PayCategory::Holiday400 => write!(f, "Holiday overtime 400%"),
        }
    }
}

/// One tier's worth of overtime pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The tier this line was computed under.
    pub category: PayCategory,
    /// Hours paid at this tier.
    pub hours: Decimal,
    /// The tier multiplier applied to the base hourly rate.
    pub multiplier: Decimal,
    /// The effective hourly rate (base hourly rate × multiplier).
    pub rate: Decimal,
    /// The line amount (hours × rate). Unrounded.
    pub amount: Decimal,
}

/// The result of one overtime pay calculation.
///
/// `total` always equals the sum of the line amounts; zero hours produce an
/// empty result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePayResult {
    /// The total pay for the entry. Unrounded.
    pub total: Decimal,
    /// Per-tier breakdown, in tier order.
    pub pay_lines: Vec<PayLine>,
}

impl OvertimePayResult {
    /// An empty result with zero total and no pay lines.
    pub fn zero() -> Self {
        Self {
            total: Decimal::ZERO,
            pay_lines: Vec::new(),
        }
    }
}

/// Aggregated overtime for one displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The summarized year.
    pub year: i32,
    /// The summarized month (1-12).
    pub month: u32,
    /// Number of days with an overtime record in the month.
    pub days_worked: usize,
    /// Sum of overtime hours across the month's records.
    pub total_hours: Decimal,
    /// Sum of overtime pay across the month's records. Unrounded.
    pub total_pay: Decimal,
}
