//! # Input Validation
//!
//! Numeric input validation applied before any formula runs. Raw text from
//! the presentation layer passes through [`validate_number`] with a
//! [`NumberRule`] describing the accepted range; calculators only ever see
//! finite, range-checked values.
//!
//! Also provides the voltage/current safety advisories shown next to inputs
//! (high-voltage and high-current warnings). Advisories never block a
//! calculation.
//!
//! ## Example
//!
//! ```rust
//! use volt_core::validation::{validate_number, NumberRule};
//!
//! let rule = NumberRule::default().forbid_zero();
//! assert_eq!(validate_number("current_a", "2.5", &rule).unwrap(), 2.5);
//! assert!(validate_number("current_a", "0", &rule).is_err());
//! assert!(validate_number("current_a", "abc", &rule).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{VoltError, VoltResult};

/// Range rule for a numeric input field.
///
/// Defaults match the common calculator case: non-negative, unbounded
/// above, zero allowed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NumberRule {
    /// Minimum accepted value (inclusive)
    pub min: f64,
    /// Maximum accepted value (inclusive), unbounded when `None`
    pub max: Option<f64>,
    /// Whether exactly zero is accepted
    pub allow_zero: bool,
}

impl Default for NumberRule {
    fn default() -> Self {
        NumberRule {
            min: 0.0,
            max: None,
            allow_zero: true,
        }
    }
}

impl NumberRule {
    /// Set the minimum accepted value
    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Set the maximum accepted value
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Reject exactly-zero values
    pub fn forbid_zero(mut self) -> Self {
        self.allow_zero = false;
        self
    }
}

/// Validate a raw textual input against a [`NumberRule`].
///
/// Checks run in a fixed order: required, numeric/finite, zero,
/// minimum, maximum. The first failing check produces the error.
pub fn validate_number(field: &str, raw: &str, rule: &NumberRule) -> VoltResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(VoltError::missing_field(field));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| VoltError::invalid_input(field, trimmed, "Only numbers allowed"))?;
    if !value.is_finite() {
        return Err(VoltError::invalid_input(field, trimmed, "Only numbers allowed"));
    }

    if !rule.allow_zero && value == 0.0 {
        return Err(VoltError::invalid_input(field, trimmed, "Value cannot be zero"));
    }
    if value < rule.min {
        return Err(VoltError::invalid_input(
            field,
            trimmed,
            format!("Minimum: {}", rule.min),
        ));
    }
    if let Some(max) = rule.max {
        if value > max {
            return Err(VoltError::invalid_input(
                field,
                trimmed,
                format!("Maximum: {}", max),
            ));
        }
    }

    Ok(value)
}

/// Safety classification for voltage/current magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SafetyLevel {
    /// Within ordinary working limits
    Normal,
    /// Elevated - extra precautions advised
    Caution,
    /// Dangerous magnitude - flagged prominently
    Danger,
}

impl SafetyLevel {
    /// Advisory text for non-normal levels
    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            SafetyLevel::Normal => None,
            SafetyLevel::Caution => Some("Elevated level - use adequate protection"),
            SafetyLevel::Danger => Some("DANGER - magnitude exceeds safe working limits"),
        }
    }
}

/// Classify a voltage magnitude: > 1000 V is dangerous, > 600 V elevated.
pub fn check_voltage(voltage_v: f64) -> SafetyLevel {
    if voltage_v > 1000.0 {
        SafetyLevel::Danger
    } else if voltage_v > 600.0 {
        SafetyLevel::Caution
    } else {
        SafetyLevel::Normal
    }
}

/// Classify a current magnitude: > 100 A is dangerous, > 30 A elevated.
pub fn check_current(current_a: f64) -> SafetyLevel {
    if current_a > 100.0 {
        SafetyLevel::Danger
    } else if current_a > 30.0 {
        SafetyLevel::Caution
    } else {
        SafetyLevel::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_number() {
        let rule = NumberRule::default();
        assert_eq!(validate_number("v", "12.5", &rule).unwrap(), 12.5);
        assert_eq!(validate_number("v", "  3 ", &rule).unwrap(), 3.0);
        assert_eq!(validate_number("v", "0", &rule).unwrap(), 0.0);
    }

    #[test]
    fn test_required() {
        let rule = NumberRule::default();
        let err = validate_number("v", "", &rule).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert!(validate_number("v", "   ", &rule).is_err());
    }

    #[test]
    fn test_not_a_number() {
        let rule = NumberRule::default();
        assert!(validate_number("v", "abc", &rule).is_err());
        assert!(validate_number("v", "1.2.3", &rule).is_err());
        assert!(validate_number("v", "inf", &rule).is_err());
        assert!(validate_number("v", "NaN", &rule).is_err());
    }

    #[test]
    fn test_zero_forbidden() {
        let rule = NumberRule::default().forbid_zero();
        assert!(validate_number("i", "0", &rule).is_err());
        assert!(validate_number("i", "0.0", &rule).is_err());
        assert_eq!(validate_number("i", "0.1", &rule).unwrap(), 0.1);
    }

    #[test]
    fn test_range() {
        let rule = NumberRule::default().min(1.0).max(100.0);
        assert!(validate_number("f", "0.5", &rule).is_err());
        assert!(validate_number("f", "101", &rule).is_err());
        assert_eq!(validate_number("f", "60", &rule).unwrap(), 60.0);
        assert_eq!(validate_number("f", "1", &rule).unwrap(), 1.0);
        assert_eq!(validate_number("f", "100", &rule).unwrap(), 100.0);
    }

    #[test]
    fn test_negative_below_default_min() {
        let rule = NumberRule::default();
        assert!(validate_number("r", "-4", &rule).is_err());
    }

    #[test]
    fn test_zero_check_precedes_min() {
        // 0 with forbid_zero and min 5: the zero message fires first
        let rule = NumberRule::default().min(5.0).forbid_zero();
        let err = validate_number("i", "0", &rule).unwrap_err();
        assert!(err.to_string().contains("cannot be zero"));
    }

    #[test]
    fn test_safety_levels() {
        assert_eq!(check_voltage(120.0), SafetyLevel::Normal);
        assert_eq!(check_voltage(601.0), SafetyLevel::Caution);
        assert_eq!(check_voltage(1001.0), SafetyLevel::Danger);
        assert_eq!(check_current(10.0), SafetyLevel::Normal);
        assert_eq!(check_current(31.0), SafetyLevel::Caution);
        assert_eq!(check_current(101.0), SafetyLevel::Danger);
        assert!(SafetyLevel::Normal.advisory().is_none());
        assert!(SafetyLevel::Danger.advisory().is_some());
    }
}
