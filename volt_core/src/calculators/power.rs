//! # Power (Watt's Law) Calculator
//!
//! Solves the four-variable network P, V, I, R using the identities
//! P = V·I, P = I²·R and P = V²/R. Given two knowns the applicable
//! identity is chosen by a fixed first-match priority:
//!
//! V&I → P, then I&R → P, then V&R → P, then P&I → V, then P&R → V,
//! then P&V → I.
//!
//! The priority is part of the compatible behavior: when more than two
//! quantities are provided, the earliest matching pair fires. With this
//! order the sqrt-form identities I = √(P/R) and R = P/I² can never be
//! reached and are intentionally absent.

use serde::{Deserialize, Serialize};

use crate::errors::{VoltError, VoltResult};

/// Input for the power calculator. `None` marks unknown quantities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerInput {
    /// Power in watts, if known
    pub power_w: Option<f64>,
    /// Voltage in volts, if known
    pub voltage_v: Option<f64>,
    /// Current in amperes, if known
    pub current_a: Option<f64>,
    /// Resistance in ohms, if known
    pub resistance_ohm: Option<f64>,
}

/// Which quantity a solution solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerQuantity {
    Power,
    Voltage,
    Current,
}

/// A solved power-network quantity.
#[derive(Debug, Clone, Serialize)]
pub struct PowerSolution {
    /// The quantity that was computed
    pub solved: PowerQuantity,
    /// Numeric value at full precision
    pub value: f64,
    /// The identity that fired, e.g. "P = V·I"
    pub formula: &'static str,
}

impl PowerSolution {
    /// Unit symbol for the solved quantity
    pub fn unit(&self) -> &'static str {
        match self.solved {
            PowerQuantity::Power => "W",
            PowerQuantity::Voltage => "V",
            PowerQuantity::Current => "A",
        }
    }

    /// Human-readable label for the solved quantity
    pub fn label(&self) -> &'static str {
        match self.solved {
            PowerQuantity::Power => "Power",
            PowerQuantity::Voltage => "Voltage",
            PowerQuantity::Current => "Current",
        }
    }
}

/// Solve the power network for the first pair of knowns in priority order.
///
/// Negative inputs are rejected, and zero divisors in the firing identity
/// (I = 0 for V = P/I, R = 0 for P = V²/R, V = 0 for I = P/V) are explicit
/// errors rather than propagated infinities. No applicable pair yields
/// `Ok(None)`.
pub fn calculate(input: &PowerInput) -> VoltResult<Option<PowerSolution>> {
    let provided = [
        input.power_w,
        input.voltage_v,
        input.current_a,
        input.resistance_ohm,
    ];
    if provided.iter().flatten().any(|v| *v < 0.0) {
        return Err(VoltError::calculation_failed(
            "power",
            "Negative values not allowed",
        ));
    }

    if let (Some(v), Some(i)) = (input.voltage_v, input.current_a) {
        return Ok(Some(PowerSolution {
            solved: PowerQuantity::Power,
            value: v * i,
            formula: "P = V·I",
        }));
    }

    if let (Some(i), Some(r)) = (input.current_a, input.resistance_ohm) {
        return Ok(Some(PowerSolution {
            solved: PowerQuantity::Power,
            value: i * i * r,
            formula: "P = I²·R",
        }));
    }

    if let (Some(v), Some(r)) = (input.voltage_v, input.resistance_ohm) {
        if r == 0.0 {
            return Err(VoltError::calculation_failed(
                "power",
                "Resistance cannot be zero",
            ));
        }
        return Ok(Some(PowerSolution {
            solved: PowerQuantity::Power,
            value: v * v / r,
            formula: "P = V²/R",
        }));
    }

    if let (Some(p), Some(i)) = (input.power_w, input.current_a) {
        if i == 0.0 {
            return Err(VoltError::calculation_failed(
                "power",
                "Current cannot be zero",
            ));
        }
        return Ok(Some(PowerSolution {
            solved: PowerQuantity::Voltage,
            value: p / i,
            formula: "V = P/I",
        }));
    }

    if let (Some(p), Some(r)) = (input.power_w, input.resistance_ohm) {
        return Ok(Some(PowerSolution {
            solved: PowerQuantity::Voltage,
            value: (p * r).sqrt(),
            formula: "V = √(P·R)",
        }));
    }

    if let (Some(p), Some(v)) = (input.power_w, input.voltage_v) {
        if v == 0.0 {
            return Err(VoltError::calculation_failed(
                "power",
                "Voltage cannot be zero",
            ));
        }
        return Ok(Some(PowerSolution {
            solved: PowerQuantity::Current,
            value: p / v,
            formula: "I = P/V",
        }));
    }

    Ok(None)
}
