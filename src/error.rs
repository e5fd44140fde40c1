//! Error types for the driver salary service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while serving salary aggregates.

use thiserror::Error;

/// The main error type for the driver salary service.
///
/// All operations in the service return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use driver_salary::error::SalaryError;
///
/// let error = SalaryError::validation("Month and year are required");
/// assert_eq!(error.to_string(), "Month and year are required");
/// ```
#[derive(Debug, Error)]
pub enum SalaryError {
    /// A request parameter was missing or malformed.
    ///
    /// Reported to the caller as a `400` with the message verbatim.
    #[error("{message}")]
    Validation {
        /// A description of what made the request invalid.
        message: String,
    },

    /// The data store returned a fault.
    ///
    /// Logged server-side; reported to the caller as an opaque `500`.
    #[error("Data store error: {message}")]
    Store {
        /// A description of the underlying store fault.
        message: String,
    },

    /// A service configuration value could not be interpreted.
    #[error("Invalid configuration value for {key}: {message}")]
    Config {
        /// The configuration key that was invalid.
        key: String,
        /// A description of what made the value invalid.
        message: String,
    },
}

impl SalaryError {
    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        SalaryError::Validation {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for SalaryError {
    fn from(error: sqlx::Error) -> Self {
        SalaryError::Store {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return SalaryError.
pub type SalaryResult<T> = Result<T, SalaryError>;
