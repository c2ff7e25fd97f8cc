//! Structured per-day record key.
//!
//! Earlier revisions of this system keyed records by ad-hoc strings like
//! `"2025-1-5"` and `"2025-01-05"` interchangeably, which made lookups
//! format-sensitive. [`DayKey`] replaces that with a validated value type:
//! parsing accepts both forms, the canonical rendering is always
//! zero-padded `YYYY-MM-DD`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::days_in_month;
use crate::error::{EngineError, EngineResult};

/// A validated (year, month, day) key identifying one calendar day.
///
/// Construction goes through [`DayKey::new`] or [`DayKey::parse`], both of
/// which reject dates that do not exist on the calendar, so a `DayKey` in
/// hand always names a real date.
///
/// # Example
///
/// ```
/// use overtime_engine::models::DayKey;
///
/// let key = DayKey::new(2025, 1, 5).unwrap();
/// assert_eq!(key.to_string(), "2025-01-05");
///
/// // Bare and zero-padded forms parse to the same key.
/// assert_eq!(DayKey::parse("2025-1-5").unwrap(), key);
/// assert_eq!(DayKey::parse("2025-01-05").unwrap(), key);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DayKey {
    year: i32,
    month: u32,
    day: u32,
}

impl DayKey {
    /// Creates a key after validating that the date exists.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] if the month is outside 1-12 or
    /// the day is outside 1..=days-in-month for that year and month.
    pub fn new(year: i32, month: u32, day: u32) -> EngineResult<Self> {
        let valid = days_in_month(year, month).is_some_and(|days| day >= 1 && day <= days);
        if !valid {
            return Err(EngineError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Parses a `"{year}-{month}-{day}"` key string.
    ///
    /// Both zero-padded (`2025-01-05`) and bare (`2025-1-5`) components are
    /// accepted; the canonical form produced by [`fmt::Display`] is
    /// zero-padded.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedDateKey`] if the string does not
    /// split into three integer components, or [`EngineError::InvalidDate`]
    /// if the components do not name a real date.
    pub fn parse(key: &str) -> EngineResult<Self> {
        let malformed = || EngineError::MalformedDateKey {
            key: key.to_string(),
        };

        let mut parts = key.split('-');
        let (year, month, day) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(m), Some(d), None) => (
                i32::from_str(y).map_err(|_| malformed())?,
                u32::from_str(m).map_err(|_| malformed())?,
                u32::from_str(d).map_err(|_| malformed())?,
            ),
            _ => return Err(malformed()),
        };

        Self::new(year, month, day)
    }

    /// Creates a key from a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the day-of-month component (1-31).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns true if this key falls in the given year and month.
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }

    /// Converts the key to a [`NaiveDate`].
    pub fn to_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .expect("DayKey is validated on construction")
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for DayKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Deserialization goes through the validating constructor so a serialized
// payload cannot smuggle in a nonexistent date.
impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawDayKey {
            year: i32,
            month: u32,
            day: u32,
        }

        let raw = RawDayKey::deserialize(deserializer)?;
        DayKey::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_date() {
        let key = DayKey::new(2025, 1, 31).unwrap();
        assert_eq!(key.year(), 2025);
        assert_eq!(key.month(), 1);
        assert_eq!(key.day(), 31);
    }

    #[test]
    fn test_new_rejects_day_zero() {
        assert!(matches!(
            DayKey::new(2025, 1, 0),
            Err(EngineError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_new_rejects_day_past_month_end() {
        assert!(matches!(
            DayKey::new(2025, 4, 31),
            Err(EngineError::InvalidDate { .. })
        ));
        assert!(matches!(
            DayKey::new(2025, 2, 29),
            Err(EngineError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_new_accepts_leap_day() {
        assert!(DayKey::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_new_rejects_month_out_of_range() {
        assert!(DayKey::new(2025, 0, 1).is_err());
        assert!(DayKey::new(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse_zero_padded() {
        let key = DayKey::parse("2025-01-05").unwrap();
        assert_eq!(key, DayKey::new(2025, 1, 5).unwrap());
    }

    #[test]
    fn test_parse_bare_components() {
        let key = DayKey::parse("2025-1-5").unwrap();
        assert_eq!(key, DayKey::new(2025, 1, 5).unwrap());
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        assert!(matches!(
            DayKey::parse("2025-x-5"),
            Err(EngineError::MalformedDateKey { key }) if key == "2025-x-5"
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        assert!(matches!(
            DayKey::parse("2025-01"),
            Err(EngineError::MalformedDateKey { .. })
        ));
        assert!(matches!(
            DayKey::parse("2025-01-05-12"),
            Err(EngineError::MalformedDateKey { .. })
        ));
        assert!(matches!(
            DayKey::parse(""),
            Err(EngineError::MalformedDateKey { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_nonexistent_date() {
        assert!(matches!(
            DayKey::parse("2025-2-30"),
            Err(EngineError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_display_is_zero_padded() {
        let key = DayKey::new(2025, 1, 5).unwrap();
        assert_eq!(key.to_string(), "2025-01-05");
    }

    #[test]
    fn test_display_parse_round_trip() {
        let key = DayKey::new(2025, 12, 25).unwrap();
        assert_eq!(DayKey::parse(&key.to_string()).unwrap(), key);
    }

    #[test]
    fn test_from_str_trait() {
        let key: DayKey = "2025-08-17".parse().unwrap();
        assert_eq!(key, DayKey::new(2025, 8, 17).unwrap());
    }

    #[test]
    fn test_from_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
        let key = DayKey::from_date(date);
        assert_eq!(key.to_date(), date);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let earlier = DayKey::new(2025, 1, 31).unwrap();
        let later = DayKey::new(2025, 2, 1).unwrap();
        assert!(earlier < later);

        let next_year = DayKey::new(2026, 1, 1).unwrap();
        assert!(later < next_year);
    }

    #[test]
    fn test_in_month() {
        let key = DayKey::new(2025, 3, 15).unwrap();
        assert!(key.in_month(2025, 3));
        assert!(!key.in_month(2025, 4));
        assert!(!key.in_month(2024, 3));
    }

    #[test]
    fn test_serialization() {
        let key = DayKey::new(2025, 1, 5).unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "{\"year\":2025,\"month\":1,\"day\":5}");

        let deserialized: DayKey = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, key);
    }

    #[test]
    fn test_deserialization_rejects_invalid_date() {
        let json = "{\"year\":2025,\"month\":2,\"day\":30}";
        let result: Result<DayKey, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
