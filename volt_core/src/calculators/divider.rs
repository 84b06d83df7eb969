//! # Voltage Divider Calculator
//!
//! Solves the resistive divider Vout = Vin·R2/(R1+R2) for whichever of the
//! four quantities is missing. Exactly one unknown is solved; any other
//! combination returns `Ok(None)`.

use serde::{Deserialize, Serialize};

use crate::errors::{VoltError, VoltResult};

/// Input for the voltage-divider calculator. `None` marks the unknown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DividerInput {
    /// Input voltage in volts, if known
    pub vin_v: Option<f64>,
    /// Output voltage in volts, if known
    pub vout_v: Option<f64>,
    /// Upper resistor in ohms, if known
    pub r1_ohm: Option<f64>,
    /// Lower resistor in ohms, if known
    pub r2_ohm: Option<f64>,
}

/// Which quantity a solution solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DividerQuantity {
    Vin,
    Vout,
    R1,
    R2,
}

/// A solved divider quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DividerSolution {
    /// The quantity that was computed
    pub solved: DividerQuantity,
    /// Numeric value at full precision
    pub value: f64,
}

impl DividerSolution {
    /// Unit symbol for the solved quantity
    pub fn unit(&self) -> &'static str {
        match self.solved {
            DividerQuantity::Vin | DividerQuantity::Vout => "V",
            DividerQuantity::R1 | DividerQuantity::R2 => "Ω",
        }
    }

    /// Human-readable label for the solved quantity
    pub fn label(&self) -> &'static str {
        match self.solved {
            DividerQuantity::Vin => "Input voltage",
            DividerQuantity::Vout => "Output voltage",
            DividerQuantity::R1 => "Resistance R1",
            DividerQuantity::R2 => "Resistance R2",
        }
    }

    /// Fixed-precision display string: voltages three decimals,
    /// resistances two. Display-only rounding.
    pub fn display(&self) -> String {
        match self.solved {
            DividerQuantity::Vin | DividerQuantity::Vout => format!("{:.3}", self.value),
            DividerQuantity::R1 | DividerQuantity::R2 => format!("{:.2}", self.value),
        }
    }
}

/// Solve the divider for the single missing quantity.
///
/// Checks, in order: non-finite provided values, negatives, Vout >= Vin
/// when both voltages are known. Each solve branch guards its own divisor.
pub fn calculate(input: &DividerInput) -> VoltResult<Option<DividerSolution>> {
    let provided = [input.vin_v, input.vout_v, input.r1_ohm, input.r2_ohm];

    if provided.iter().flatten().any(|v| !v.is_finite()) {
        return Err(VoltError::calculation_failed(
            "voltage_divider",
            "Invalid input, only numbers allowed",
        ));
    }
    if provided.iter().flatten().any(|v| *v < 0.0) {
        return Err(VoltError::calculation_failed(
            "voltage_divider",
            "Negative values not allowed",
        ));
    }
    if let (Some(vin), Some(vout)) = (input.vin_v, input.vout_v) {
        if vout >= vin {
            return Err(VoltError::calculation_failed(
                "voltage_divider",
                "Vout must be less than Vin",
            ));
        }
    }

    match (input.vin_v, input.vout_v, input.r1_ohm, input.r2_ohm) {
        (Some(vin), None, Some(r1), Some(r2)) => {
            if r1 + r2 == 0.0 {
                return Err(VoltError::calculation_failed(
                    "voltage_divider",
                    "R1 + R2 cannot be zero",
                ));
            }
            Ok(Some(DividerSolution {
                solved: DividerQuantity::Vout,
                value: vin * (r2 / (r1 + r2)),
            }))
        }
        (None, Some(vout), Some(r1), Some(r2)) => {
            if r2 == 0.0 {
                return Err(VoltError::calculation_failed(
                    "voltage_divider",
                    "R2 cannot be zero",
                ));
            }
            Ok(Some(DividerSolution {
                solved: DividerQuantity::Vin,
                value: vout * (r1 + r2) / r2,
            }))
        }
        (Some(vin), Some(vout), None, Some(r2)) => {
            if vout == 0.0 {
                return Err(VoltError::calculation_failed(
                    "voltage_divider",
                    "Vout cannot be zero",
                ));
            }
            Ok(Some(DividerSolution {
                solved: DividerQuantity::R1,
                value: r2 * (vin - vout) / vout,
            }))
        }
        (Some(vin), Some(vout), Some(r1), None) => {
            // vout < vin already guaranteed above, so vin - vout > 0
            Ok(Some(DividerSolution {
                solved: DividerQuantity::R2,
                value: vout * r1 / (vin - vout),
            }))
        }
        _ => Ok(None),
    }
}
