//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! regulation metadata and holiday table from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calendar::{HolidayCalendar, NationalHoliday};
use crate::error::{EngineError, EngineResult};

use super::types::{HolidaysFile, RegulationMetadata};

/// Loads and provides access to the engine configuration.
///
/// # Directory structure
///
/// ```text
/// config/kep102/
/// ├── regulation.yaml  # Regulation metadata and supported year
/// └── holidays.yaml    # National holiday table for that year
/// ```
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use overtime_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/kep102")?;
///
/// let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// assert!(loader.calendar().contains(new_year));
/// # Ok::<(), overtime_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: RegulationMetadata,
    calendar: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or lists a holiday outside the declared year.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let regulation_path = path.join("regulation.yaml");
        let metadata = Self::load_yaml::<RegulationMetadata>(&regulation_path)?;

        let holidays_path = path.join("holidays.yaml");
        let holidays_file = Self::load_yaml::<HolidaysFile>(&holidays_path)?;

        let holidays = holidays_file
            .holidays
            .into_iter()
            .map(|entry| NationalHoliday {
                date: entry.date,
                name: entry.name,
            })
            .collect();

        let calendar = HolidayCalendar::new(metadata.year, holidays).map_err(|e| {
            EngineError::ConfigParseError {
                path: holidays_path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        info!(
            regulation = %metadata.code,
            year = metadata.year,
            holidays = calendar.len(),
            "Loaded engine configuration"
        );

        Ok(Self { metadata, calendar })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the regulation metadata.
    pub fn metadata(&self) -> &RegulationMetadata {
        &self.metadata
    }

    /// Returns the loaded holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("./config/kep102").unwrap();
        assert_eq!(loader.metadata().code, "KEP.102/MEN/VI/2004");
        assert_eq!(loader.metadata().year, 2025);
    }

    #[test]
    fn test_shipped_holiday_table() {
        let loader = ConfigLoader::load("./config/kep102").unwrap();
        let calendar = loader.calendar();

        assert_eq!(calendar.len(), 13);
        assert!(calendar.contains(make_date(2025, 1, 1))); // Tahun Baru Masehi
        assert!(calendar.contains(make_date(2025, 8, 17))); // Hari Kemerdekaan
        assert!(calendar.contains(make_date(2025, 12, 25))); // Hari Raya Natal
        assert!(!calendar.contains(make_date(2025, 1, 2)));
    }

    #[test]
    fn test_load_missing_directory() {
        let result = ConfigLoader::load("./config/does_not_exist");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_holiday_outside_year_rejected() {
        let dir = std::env::temp_dir().join(format!("overtime_config_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("regulation.yaml"),
            "code: \"TEST\"\nname: \"Test\"\nyear: 2025\nsource_url: \"http://example.com\"\n",
        )
        .unwrap();
        fs::write(
            dir.join("holidays.yaml"),
            "holidays:\n  - date: 2026-01-01\n    name: \"Stray\"\n",
        )
        .unwrap();

        let result = ConfigLoader::load(&dir);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));

        let _ = fs::remove_dir_all(&dir);
    }
}
