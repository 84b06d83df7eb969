//! # Ohm's Law Calculator
//!
//! Solves V = I·R for whichever of the three quantities is missing.
//! Exactly two of the three inputs must be provided; with fewer or more
//! knowns the module returns `Ok(None)` and the caller decides how to
//! prompt the user.
//!
//! ## Example
//!
//! ```rust
//! use volt_core::calculators::ohm::{calculate, OhmInput, OhmQuantity};
//!
//! let input = OhmInput {
//!     voltage_v: Some(12.0),
//!     current_a: Some(2.0),
//!     resistance_ohm: None,
//! };
//!
//! let solution = calculate(&input).unwrap().unwrap();
//! assert_eq!(solution.solved, OhmQuantity::Resistance);
//! assert_eq!(solution.value, 6.0);
//! assert_eq!(solution.display(), "6.00");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{VoltError, VoltResult};
use crate::units::{Amperes, Ohms, Volts};

/// Input for the Ohm's law calculator. `None` marks the unknown quantity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OhmInput {
    /// Voltage in volts, if known
    pub voltage_v: Option<f64>,
    /// Current in amperes, if known
    pub current_a: Option<f64>,
    /// Resistance in ohms, if known
    pub resistance_ohm: Option<f64>,
}

/// Which quantity a solution solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OhmQuantity {
    Voltage,
    Current,
    Resistance,
}

/// A solved Ohm's law quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhmSolution {
    /// The quantity that was computed
    pub solved: OhmQuantity,
    /// Numeric value at full precision
    pub value: f64,
}

impl OhmSolution {
    /// Unit symbol for the solved quantity
    pub fn unit(&self) -> &'static str {
        match self.solved {
            OhmQuantity::Voltage => "V",
            OhmQuantity::Current => "A",
            OhmQuantity::Resistance => "Ω",
        }
    }

    /// Human-readable label for the solved quantity
    pub fn label(&self) -> &'static str {
        match self.solved {
            OhmQuantity::Voltage => "Voltage",
            OhmQuantity::Current => "Current",
            OhmQuantity::Resistance => "Resistance",
        }
    }

    /// Fixed-precision display string. Currents show three decimals,
    /// voltages and resistances two. Display-only; `value` keeps full
    /// precision.
    pub fn display(&self) -> String {
        match self.solved {
            OhmQuantity::Current => format!("{:.3}", self.value),
            _ => format!("{:.2}", self.value),
        }
    }
}

/// Solve Ohm's law for the missing quantity.
///
/// Negative inputs are rejected. Division by zero (I = 0 when solving R,
/// R = 0 when solving I) is an explicit error. Anything other than exactly
/// two known values yields `Ok(None)`.
pub fn calculate(input: &OhmInput) -> VoltResult<Option<OhmSolution>> {
    let provided = [input.voltage_v, input.current_a, input.resistance_ohm];
    if provided.iter().flatten().any(|v| *v < 0.0) {
        return Err(VoltError::calculation_failed(
            "ohm",
            "Negative values not allowed",
        ));
    }

    if let (Some(v), Some(i)) = (input.voltage_v, input.current_a) {
        if input.resistance_ohm.is_some() {
            return Ok(None); // all three known, nothing to solve
        }
        if i == 0.0 {
            return Err(VoltError::calculation_failed("ohm", "Current cannot be zero"));
        }
        return Ok(Some(OhmSolution {
            solved: OhmQuantity::Resistance,
            value: (Volts(v) / Amperes(i)).value(),
        }));
    }

    if let (Some(v), Some(r)) = (input.voltage_v, input.resistance_ohm) {
        if r == 0.0 {
            return Err(VoltError::calculation_failed(
                "ohm",
                "Resistance cannot be zero",
            ));
        }
        return Ok(Some(OhmSolution {
            solved: OhmQuantity::Current,
            value: (Volts(v) / Ohms(r)).value(),
        }));
    }

    if let (Some(i), Some(r)) = (input.current_a, input.resistance_ohm) {
        return Ok(Some(OhmSolution {
            solved: OhmQuantity::Voltage,
            value: (Amperes(i) * Ohms(r)).value(),
        }));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(v: Option<f64>, i: Option<f64>, r: Option<f64>) -> OhmInput {
        OhmInput {
            voltage_v: v,
            current_a: i,
            resistance_ohm: r,
        }
    }

    #[test]
    fn test_solve_resistance() {
        let sol = calculate(&known(Some(12.0), Some(2.0), None))
            .unwrap()
            .unwrap();
        assert_eq!(sol.solved, OhmQuantity::Resistance);
        assert_eq!(sol.value, 6.0);
        assert_eq!(sol.unit(), "Ω");
        assert_eq!(sol.display(), "6.00");
    }

    #[test]
    fn test_solve_current() {
        let sol = calculate(&known(Some(9.0), None, Some(470.0)))
            .unwrap()
            .unwrap();
        assert_eq!(sol.solved, OhmQuantity::Current);
        assert!((sol.value - 9.0 / 470.0).abs() < 1e-12);
        assert_eq!(sol.display(), "0.019");
    }

    #[test]
    fn test_solve_voltage() {
        let sol = calculate(&known(None, Some(0.5), Some(220.0)))
            .unwrap()
            .unwrap();
        assert_eq!(sol.solved, OhmQuantity::Voltage);
        assert_eq!(sol.value, 110.0);
        assert_eq!(sol.label(), "Voltage");
    }

    #[test]
    fn test_zero_divisors() {
        assert!(calculate(&known(Some(5.0), Some(0.0), None)).is_err());
        assert!(calculate(&known(Some(5.0), None, Some(0.0))).is_err());
        // I = 0 while solving V is fine: V = 0
        let sol = calculate(&known(None, Some(0.0), Some(100.0)))
            .unwrap()
            .unwrap();
        assert_eq!(sol.value, 0.0);
    }

    #[test]
    fn test_negative_rejected() {
        let err = calculate(&known(Some(-1.0), Some(2.0), None)).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert!(calculate(&known(None, Some(-0.5), Some(10.0))).is_err());
    }

    #[test]
    fn test_under_and_over_determined() {
        assert!(calculate(&known(Some(5.0), None, None)).unwrap().is_none());
        assert!(calculate(&known(None, None, None)).unwrap().is_none());
        assert!(calculate(&known(Some(5.0), Some(1.0), Some(5.0)))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_round_trip_identities() {
        // Solve R from V, I; then I from V, R must return the original I
        let r = calculate(&known(Some(24.0), Some(1.5), None))
            .unwrap()
            .unwrap()
            .value;
        let i = calculate(&known(Some(24.0), None, Some(r)))
            .unwrap()
            .unwrap()
            .value;
        assert!((i - 1.5).abs() < 1e-9);

        let v = calculate(&known(None, Some(1.5), Some(r)))
            .unwrap()
            .unwrap()
            .value;
        assert!((v - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_serialization() {
        let input = known(Some(12.0), None, Some(6.0));
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: OhmInput = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.voltage_v, Some(12.0));
        assert_eq!(roundtrip.current_a, None);
    }
}
