//! Configuration types for the overtime engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use serde::Deserialize;

/// Metadata about the overtime regulation the engine implements.
#[derive(Debug, Clone, Deserialize)]
pub struct RegulationMetadata {
    /// The regulation code (e.g., "KEP.102/MEN/VI/2004").
    pub code: String,
    /// The human-readable name of the regulation.
    pub name: String,
    /// The calendar year the shipped holiday table covers.
    pub year: i32,
    /// URL to the official regulation text.
    pub source_url: String,
}

/// One entry in the holiday table file.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The official name of the holiday.
    pub name: String,
}

/// Holiday table file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysFile {
    /// The listed national holidays.
    pub holidays: Vec<HolidayEntry>,
}
