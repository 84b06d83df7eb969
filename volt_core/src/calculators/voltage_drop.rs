//! # Voltage Drop Calculator
//!
//! Resistive voltage drop over a conductor run:
//! drop = L·ρ·I/A with the effective length doubled for single-phase
//! (out and back) or scaled by √3 for three-phase. The percentage drop is
//! classified against the 3 % / 5 % electrical-code limits, and the
//! maximum current that keeps the run within 3 % is derived.
//!
//! ## Example
//!
//! ```rust
//! use volt_core::calculators::voltage_drop::{calculate, DropStatus, Phase, VoltageDropInput};
//! use volt_core::materials::ConductorMaterial;
//!
//! let input = VoltageDropInput {
//!     current_a: 20.0,
//!     distance_m: 50.0,
//!     voltage_v: 220.0,
//!     material: ConductorMaterial::Copper,
//!     area_mm2: 2.5,
//!     phase: Phase::Single,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.drop_v - 13.76).abs() < 1e-9);
//! assert_eq!(result.status, DropStatus::NonCompliant);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{VoltError, VoltResult};
use crate::materials::ConductorMaterial;
use crate::units::{Meters, SquareMillimeters};

/// Supply phase configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Single-phase: round-trip length, L×2
    Single,
    /// Three-phase: L×√3
    Three,
}

impl Phase {
    /// Effective conductor length for a one-way distance
    pub fn total_length(&self, distance_m: f64) -> f64 {
        match self {
            Phase::Single => distance_m * 2.0,
            Phase::Three => distance_m * 3f64.sqrt(),
        }
    }
}

/// Input for the voltage-drop calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoltageDropInput {
    /// Load current in amperes
    pub current_a: f64,
    /// One-way circuit distance in meters
    pub distance_m: f64,
    /// Source voltage in volts
    pub voltage_v: f64,
    /// Conductor material
    pub material: ConductorMaterial,
    /// Conductor cross-section in mm²
    pub area_mm2: f64,
    /// Phase configuration
    pub phase: Phase,
}

impl VoltageDropInput {
    /// Validate input parameters (all strictly positive).
    pub fn validate(&self) -> VoltResult<()> {
        for (field, value) in [
            ("current_a", self.current_a),
            ("distance_m", self.distance_m),
            ("voltage_v", self.voltage_v),
            ("area_mm2", self.area_mm2),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(VoltError::invalid_input(
                    field,
                    value.to_string(),
                    "Value must be positive",
                ));
            }
        }
        Ok(())
    }
}

/// Compliance classification against the 3 % / 5 % drop limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropStatus {
    /// Below 3 %: within code
    Compliant,
    /// 3 % to 5 %: acceptable but worth upsizing
    Marginal,
    /// 5 % or more: unacceptable
    NonCompliant,
}

impl DropStatus {
    /// Classify a percentage drop
    pub fn classify(percentage: f64) -> Self {
        if percentage < 3.0 {
            DropStatus::Compliant
        } else if percentage < 5.0 {
            DropStatus::Marginal
        } else {
            DropStatus::NonCompliant
        }
    }

    /// Fixed advisory message for the classification
    pub fn advisory(&self) -> &'static str {
        match self {
            DropStatus::Compliant => "Within the electrical-code drop limit",
            DropStatus::Marginal => "At the acceptable limit, consider a larger cross-section",
            DropStatus::NonCompliant => "Unacceptable, increase the conductor cross-section",
        }
    }
}

/// Results from the voltage-drop calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoltageDropResult {
    /// Effective conductor length in meters
    pub total_length_m: f64,
    /// Absolute drop in volts
    pub drop_v: f64,
    /// Drop as a percentage of the source voltage
    pub percentage: f64,
    /// Compliance classification
    pub status: DropStatus,
    /// Maximum current keeping the drop at 3 %, in amperes
    pub max_current_a: f64,
}

/// Run the voltage-drop calculation.
pub fn calculate(input: &VoltageDropInput) -> VoltResult<VoltageDropResult> {
    input.validate()?;

    let total_length_m = input.phase.total_length(input.distance_m);
    let resistance = input
        .material
        .resistance(Meters(total_length_m), SquareMillimeters(input.area_mm2));

    let drop_v = resistance.value() * input.current_a;
    let percentage = drop_v / input.voltage_v * 100.0;

    Ok(VoltageDropResult {
        total_length_m,
        drop_v,
        percentage,
        status: DropStatus::classify(percentage),
        max_current_a: input.voltage_v * 0.03 / resistance.value(),
    })
}
