//! # LED Series-Resistor Calculator
//!
//! Sizes the current-limiting resistor for an LED:
//! R = (Vin − Vled) / I and the power it dissipates, P = (Vin − Vled) · I.
//! The drive current is entered in milliamperes, matching datasheets.
//!
//! ## Example
//!
//! ```rust
//! use volt_core::calculators::led::{calculate, LedInput};
//!
//! let input = LedInput { supply_v: 5.0, forward_v: 2.0, current_ma: 20.0 };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.resistance_ohm, 150.0);
//! assert!((result.power_w - 0.06).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{VoltError, VoltResult};
use crate::units::{Amperes, Milliamperes, Volts};

/// Input for the LED resistor calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedInput {
    /// Supply voltage in volts
    pub supply_v: f64,
    /// LED forward voltage in volts
    pub forward_v: f64,
    /// Desired LED current in milliamperes
    pub current_ma: f64,
}

impl LedInput {
    /// Validate physical sense: finite, non-negative, nonzero current,
    /// supply above the forward drop.
    pub fn validate(&self) -> VoltResult<()> {
        let values = [self.supply_v, self.forward_v, self.current_ma];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(VoltError::calculation_failed(
                "led_resistor",
                "Invalid input, only numbers allowed",
            ));
        }
        if values.iter().any(|v| *v < 0.0) {
            return Err(VoltError::calculation_failed(
                "led_resistor",
                "Negative values not allowed",
            ));
        }
        if self.current_ma == 0.0 {
            return Err(VoltError::calculation_failed(
                "led_resistor",
                "Current cannot be zero",
            ));
        }
        if self.forward_v >= self.supply_v {
            return Err(VoltError::calculation_failed(
                "led_resistor",
                "Vin must exceed Vled",
            ));
        }
        Ok(())
    }
}

/// Resistor value and dissipation for an LED circuit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedResult {
    /// Series resistance in ohms
    pub resistance_ohm: f64,
    /// Power dissipated by the resistor in watts
    pub power_w: f64,
}

impl LedResult {
    /// Display string for the resistance (two decimals)
    pub fn resistance_display(&self) -> String {
        format!("{:.2}", self.resistance_ohm)
    }

    /// Display string for the power (three decimals)
    pub fn power_display(&self) -> String {
        format!("{:.3}", self.power_w)
    }
}

/// Calculate the series resistor and its dissipation.
pub fn calculate(input: &LedInput) -> VoltResult<LedResult> {
    input.validate()?;

    let current: Amperes = Milliamperes(input.current_ma).into();
    let drop = Volts(input.supply_v - input.forward_v);

    Ok(LedResult {
        resistance_ohm: (drop / current).value(),
        power_w: (drop * current).value(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::led_preset;

    #[test]
    fn test_reference_values() {
        let result = calculate(&LedInput {
            supply_v: 5.0,
            forward_v: 2.0,
            current_ma: 20.0,
        })
        .unwrap();
        assert_eq!(result.resistance_ohm, 150.0);
        assert!((result.power_w - 0.06).abs() < 1e-12);
        assert_eq!(result.resistance_display(), "150.00");
        assert_eq!(result.power_display(), "0.060");
    }

    #[test]
    fn test_preset_driven_input() {
        let red = led_preset("red").unwrap();
        let result = calculate(&LedInput {
            supply_v: 9.0,
            forward_v: red.forward_v,
            current_ma: red.default_current_ma,
        })
        .unwrap();
        // (9 - 1.8) / 0.02 = 360 Ω
        assert!((result.resistance_ohm - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_current() {
        let err = calculate(&LedInput {
            supply_v: 5.0,
            forward_v: 2.0,
            current_ma: 0.0,
        })
        .unwrap_err();
        assert!(err.to_string().contains("cannot be zero"));
    }

    #[test]
    fn test_forward_voltage_too_high() {
        assert!(calculate(&LedInput {
            supply_v: 3.0,
            forward_v: 3.2,
            current_ma: 20.0,
        })
        .is_err());
        // equal is also rejected: no headroom to drive current
        assert!(calculate(&LedInput {
            supply_v: 3.2,
            forward_v: 3.2,
            current_ma: 20.0,
        })
        .is_err());
    }

    #[test]
    fn test_negative_and_non_finite() {
        assert!(calculate(&LedInput {
            supply_v: -5.0,
            forward_v: 2.0,
            current_ma: 20.0,
        })
        .is_err());
        assert!(calculate(&LedInput {
            supply_v: f64::NAN,
            forward_v: 2.0,
            current_ma: 20.0,
        })
        .is_err());
    }
}
