//! Process-wide wage settings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The wage settings that every pay calculation derives from.
///
/// Settings are not tied to any record: pay is always derived live from the
/// current settings, never stored with a frozen rate. Changing the settings
/// retroactively changes the displayed totals for past months, which is the
/// intended trade-off (no stale-rate bugs).
///
/// # Example
///
/// ```
/// use overtime_engine::models::Settings;
/// use rust_decimal::Decimal;
///
/// let settings = Settings::new(Decimal::from(2_436_886), 2).unwrap();
/// assert_eq!(settings.experience_years, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Monthly base salary in local currency. Must be positive.
    pub base_salary: Decimal,
    /// Years of tenure. Feeds the experience allowance step function.
    pub experience_years: u32,
}

impl Settings {
    /// Creates settings after validating the base salary.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] if `base_salary` is zero or
    /// negative.
    pub fn new(base_salary: Decimal, experience_years: u32) -> EngineResult<Self> {
        let settings = Self {
            base_salary,
            experience_years,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings.
    ///
    /// Public so callers that mutate the fields directly (e.g. after
    /// deserializing user input) can re-check the invariant.
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidArgument {
                field: "base_salary".to_string(),
                message: format!("must be positive, got {}", self.base_salary),
            });
        }
        Ok(())
    }
}
