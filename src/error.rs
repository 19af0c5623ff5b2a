//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can occur while building a payroll run.
//! The calculations themselves are infallible; only construction and
//! configuration loading can fail.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/roster.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/roster.yaml");
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
        /// The path (or embedded source name) that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee '{name}' field '{field}': {message}")]
    InvalidEmployee {
        /// The employee name.
        name: String,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The reporting period is not a calendar month (month outside 1..=12
    /// or year outside the supported range).
    #[error("Invalid reporting period {month}/{year}: not a supported calendar month")]
    InvalidReportingPeriod {
        /// The offending month.
        month: u32,
        /// The year of the period.
        year: i32,
    },

    /// Two roster entries share a name, which would misattribute sales.
    #[error("Duplicate employee name in roster: {name}")]
    DuplicateEmployee {
        /// The repeated name.
        name: String,
    },

    /// A name referenced by the sales team is not on the roster.
    #[error("Employee not found in roster: {name}")]
    EmployeeNotFound {
        /// The missing name.
        name: String,
    },

    /// A sales team entry is not a salesperson.
    #[error("Employee '{name}' is not a salesperson")]
    NotASalesperson {
        /// The employee name.
        name: String,
    },

    /// A sales amount was negative.
    #[error("Negative sales amount {amount} recorded for '{name}'")]
    NegativeSales {
        /// The employee name.
        name: String,
        /// The rejected amount.
        amount: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
