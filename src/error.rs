//! Error types for the CPF Contribution Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during contribution calculation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{AgeBand, EmployeeType};

/// The main error type for the CPF Contribution Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use cpf_engine::error::EngineError;
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

    /// Payroll input data was invalid or internally inconsistent.
    ///
    /// A below-threshold salary is reported here rather than computed as a
    /// zero contribution, so callers cannot mistake "exempt" for
    /// "computed-as-zero".
    #[error("Invalid payroll data in field '{field}': {message}")]
    InvalidPayrollData {
        /// The payroll field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No contribution rate record exists for the given criteria.
    ///
    /// This is always fatal to the calculation; the engine never falls back
    /// to a zero or prior-tier rate.
    #[error("CPF rate not found for {classification} / {age_band} on date {date}")]
    RateNotFound {
        /// The employee classification the lookup was for.
        classification: EmployeeType,
        /// The age band the lookup was for.
        age_band: AgeBand,
        /// The date for which the rate was requested.
        date: NaiveDate,
    },

    /// No account allocation ratios are configured for the given age band.
    #[error("Account allocation ratios not found for age band {age_band}")]
    AllocationNotFound {
        /// The age band with no configured allocation.
        age_band: AgeBand,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Returns a stable machine-readable code for this error.
    ///
    /// The same codes are used in batch reports and API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                "CONFIG_ERROR"
            }
            EngineError::InvalidPayrollData { .. } => "INVALID_PAYROLL_DATA",
            EngineError::RateNotFound { .. } => "RATE_NOT_FOUND",
            EngineError::AllocationNotFound { .. } => "ALLOCATION_NOT_FOUND",
            EngineError::CalculationError { .. } => "CALCULATION_ERROR",
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
