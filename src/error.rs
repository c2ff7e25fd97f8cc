//! Error types for the Overtime Pay Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during overtime calculation.

use thiserror::Error;

/// The main error type for the Overtime Pay Calculation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use overtime_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A numeric input violated the caller contract (negative hours,
    /// non-positive salary, and similar).
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The argument that was invalid.
        field: String,
        /// A description of what made the argument invalid.
        message: String,
    },

    /// A record-store key did not parse into year, month, and day integers.
    #[error("Malformed date key: '{key}'")]
    MalformedDateKey {
        /// The key that failed to parse.
        key: String,
    },

    /// A year/month/day combination does not name a real calendar date.
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year component.
        year: i32,
        /// The month component.
        month: u32,
        /// The day component.
        day: u32,
    },

    /// Reading or writing a persisted record store failed.
    #[error("Record store I/O error for '{path}': {message}")]
    StoreIo {
        /// The path of the store file.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
