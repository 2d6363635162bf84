//! Error types for the severance calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the severance calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use severance_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidDateOrder {
///     start_date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2022, 5, 1).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Start date 2023-05-01 is after end date 2022-05-01"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The employment start date is after the end date.
    #[error("Start date {start_date} is after end date {end_date}")]
    InvalidDateOrder {
        /// The offending start date.
        start_date: NaiveDate,
        /// The offending end date.
        end_date: NaiveDate,
    },

    /// The employment end date is in the future.
    #[error("End date {end_date} is later than the current date {today}")]
    FutureEndDate {
        /// The offending end date.
        end_date: NaiveDate,
        /// The reference date the end date was checked against.
        today: NaiveDate,
    },

    /// A dismissal calculation was requested without dismissal details.
    #[error("Dismissal details missing: {message}")]
    MissingDismissalDetails {
        /// A description of what was missing.
        message: String,
    },

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

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
