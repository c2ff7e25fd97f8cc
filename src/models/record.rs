//! Per-day overtime record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::day_key::DayKey;

/// One day's overtime entry.
///
/// A record with zero or negative hours is equivalent to "no entry" and is
/// never stored; the [`crate::store::RecordStore`] implementations enforce
/// that invariant. The `is_holiday` flag selects the holiday overtime tiers
/// regardless of what the calendar says for the date, so a user can override
/// the classifier (e.g. for a company-specific collective leave day).
///
/// # Example
///
/// ```
/// use overtime_engine::models::{DayKey, OvertimeRecord};
/// use rust_decimal::Decimal;
///
/// let record = OvertimeRecord {
///     day_key: DayKey::new(2025, 1, 5).unwrap(),
///     hours: Decimal::new(25, 1), // 2.5 hours
///     is_holiday: true,
/// };
/// assert_eq!(record.day_key.day(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeRecord {
    /// The day this record belongs to.
    pub day_key: DayKey,
    /// Overtime hours worked on the day. Positive; fractional hours allowed.
    pub hours: Decimal,
    /// Whether the holiday overtime tiers apply to this day.
    pub is_holiday: bool,
}

impl OvertimeRecord {
    /// Creates a record for the given day.
    pub fn new(day_key: DayKey, hours: Decimal, is_holiday: bool) -> Self {
        Self {
            day_key,
            hours,
            is_holiday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> OvertimeRecord {
        OvertimeRecord::new(
            DayKey::new(2025, 1, 5).unwrap(),
            Decimal::new(25, 1), // 2.5
            true,
        )
    }

    #[test]
    fn test_new_sets_fields() {
        let record = sample_record();
        assert_eq!(record.day_key, DayKey::new(2025, 1, 5).unwrap());
        assert_eq!(record.hours, Decimal::new(25, 1));
        assert!(record.is_holiday);
    }

    #[test]
    fn test_serialization() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"hours\":\"2.5\""));
        assert!(json.contains("\"is_holiday\":true"));

        let deserialized: OvertimeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }

    #[test]
    fn test_deserialization_rejects_invalid_day() {
        let json = r#"{
            "day_key": {"year": 2025, "month": 2, "day": 30},
            "hours": "2.0",
            "is_holiday": false
        }"#;
        let result: Result<OvertimeRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
