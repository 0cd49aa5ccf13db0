//! # Error Types
//!
//! Structured error types for elec_core. Every calculator validates its
//! input and reports problems through [`CalcError`] rather than letting
//! a division by zero turn into an infinite or NaN result.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::errors::{CalcError, CalcResult};
//!
//! fn validate_load(load_w: f64) -> CalcResult<()> {
//!     if load_w <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "load_w".to_string(),
//!             value: load_w.to_string(),
//!             reason: "Load must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for elec_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative, out of range, zero divisor, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing from a form
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Not enough known values to derive the rest (Ohm's law)
    #[error("Insufficient or invalid input for {calculator}: {reason}")]
    InsufficientInput { calculator: String, reason: String },

    /// Calculator identifier not recognised
    #[error("Unknown calculator: {name}")]
    UnknownCalculator { name: String },

    /// Enumerated option (color band, tolerance, mode) not recognised
    #[error("Unknown option for '{field}': {value}")]
    UnknownOption { field: String, value: String },

    /// Settings file could not be read or parsed
    #[error("Settings error in '{path}': {reason}")]
    SettingsError { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an InsufficientInput error
    pub fn insufficient_input(calculator: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InsufficientInput {
            calculator: calculator.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownOption error
    pub fn unknown_option(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::UnknownOption {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a SettingsError
    pub fn settings_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::SettingsError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if the user can fix the inputs and try again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::InsufficientInput { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::InsufficientInput { .. } => "INSUFFICIENT_INPUT",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::UnknownOption { .. } => "UNKNOWN_OPTION",
            CalcError::SettingsError { .. } => "SETTINGS_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Reject negative, NaN and infinite values.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be a finite, non-negative number",
        ));
    }
    Ok(())
}

/// Reject anything that cannot be used as a divisor.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Value must be greater than zero",
        ));
    }
    Ok(())
}

/// Reject a computed value that overflowed to infinity or NaN.
pub(crate) fn require_finite_result(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Result is too large to represent",
        ));
    }
    Ok(())
}

/// Round a sizing ratio up to a whole count.
pub(crate) fn whole_count(field: &str, value: f64) -> CalcResult<u32> {
    let count = value.ceil();
    if !count.is_finite() || count < 0.0 || count > u32::MAX as f64 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Count is too large to represent",
        ));
    }
    Ok(count as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("load_w", "0", "Load must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::insufficient_input("Ohm's Law", "need two values").error_code(),
            "INSUFFICIENT_INPUT"
        );
    }

    #[test]
    fn test_insufficient_input_message() {
        let error = CalcError::insufficient_input("Ohm's Law", "enter at least two known values");
        assert_eq!(
            error.to_string(),
            "Insufficient or invalid input for Ohm's Law: enter at least two known values"
        );
        assert!(error.is_recoverable());
        assert!(!CalcError::settings_error("a.toml", "bad").is_recoverable());
    }

    #[test]
    fn test_validators() {
        assert!(require_non_negative("v", 0.0).is_ok());
        assert!(require_non_negative("v", -1.0).is_err());
        assert!(require_non_negative("v", f64::NAN).is_err());
        assert!(require_positive("v", 0.0).is_err());
        assert!(require_positive("v", f64::INFINITY).is_err());
        assert!(require_positive("v", 0.5).is_ok());
    }

    #[test]
    fn test_result_must_be_finite() {
        assert!(require_finite_result("bill_amount", 1260.0).is_ok());
        let err = require_finite_result("bill_amount", f64::INFINITY).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(require_finite_result("r", f64::NAN).is_err());
    }

    #[test]
    fn test_whole_count() {
        assert_eq!(whole_count("panels", 6.67).unwrap(), 7);
        assert_eq!(whole_count("panels", 5.0).unwrap(), 5);
        assert_eq!(whole_count("panels", 0.0).unwrap(), 0);
        assert_eq!(whole_count("panels", u32::MAX as f64).unwrap(), u32::MAX);
        assert!(whole_count("panels", u32::MAX as f64 + 1.0).is_err());
        assert!(whole_count("panels", 1e12).is_err());
        assert!(whole_count("panels", f64::INFINITY).is_err());
        assert!(whole_count("panels", f64::NAN).is_err());
    }
}
