//! # Error Types
//!
//! Structured error types for volt_core. Every calculator failure is data:
//! errors are returned as values at the formula-module boundary, never
//! raised across it, so the presentation layer can render them inline.
//!
//! ## Example
//!
//! ```rust
//! use volt_core::errors::{VoltError, VoltResult};
//!
//! fn validate_frequency(hz: f64) -> VoltResult<()> {
//!     if hz <= 0.0 {
//!         return Err(VoltError::invalid_input(
//!             "frequency_hz",
//!             hz.to_string(),
//!             "Frequency must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for volt_core operations
pub type VoltResult<T> = Result<T, VoltError>;

/// Structured error type for calculation and storage operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by API consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum VoltError {
    /// An input value is invalid (out of range, non-numeric, wrong sign)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A physical or logical constraint was violated during calculation
    /// (division by zero in a derived formula, Vout >= Vin, etc.)
    #[error("Calculation failed: {calculation} - {reason}")]
    CalculationFailed { calculation: String, reason: String },

    /// No wire gauge in the table satisfies the required ampacity
    #[error(
        "No suitable gauge: {required_amps} A required, largest available carries {best_available_amps} A"
    )]
    GaugeNotFound {
        required_amps: f64,
        best_available_amps: f64,
    },

    /// Storage backend error (read, write, lock)
    #[error("Storage error: {operation} on '{key}' - {reason}")]
    StorageError {
        operation: String,
        key: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl VoltError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        VoltError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        VoltError::MissingField {
            field: field.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        VoltError::CalculationFailed {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Create a StorageError
    pub fn storage_error(
        operation: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        VoltError::StorageError {
            operation: operation.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            VoltError::InvalidInput { .. } => "INVALID_INPUT",
            VoltError::MissingField { .. } => "MISSING_FIELD",
            VoltError::CalculationFailed { .. } => "CALCULATION_FAILED",
            VoltError::GaugeNotFound { .. } => "GAUGE_NOT_FOUND",
            VoltError::StorageError { .. } => "STORAGE_ERROR",
            VoltError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for VoltError {
    fn from(err: serde_json::Error) -> Self {
        VoltError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = VoltError::invalid_input("voltage_v", "-5", "Voltage cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: VoltError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(VoltError::missing_field("vin").error_code(), "MISSING_FIELD");
        assert_eq!(
            VoltError::calculation_failed("ohm", "current cannot be zero").error_code(),
            "CALCULATION_FAILED"
        );
        let gauge = VoltError::GaugeNotFound {
            required_amps: 200.0,
            best_available_amps: 150.0,
        };
        assert_eq!(gauge.error_code(), "GAUGE_NOT_FOUND");
    }

    #[test]
    fn test_display_messages() {
        let error = VoltError::calculation_failed("voltage_divider", "Vout must be less than Vin");
        assert!(error.to_string().contains("Vout must be less than Vin"));
    }
}
