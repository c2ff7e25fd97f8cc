//! Configuration loading for the Overtime Pay Calculation Engine.
//!
//! The engine loads two YAML files at startup: regulation metadata and the
//! national holiday table for the supported year.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidayEntry, HolidaysFile, RegulationMetadata};
