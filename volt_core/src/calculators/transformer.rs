//! # Transformer Calculator
//!
//! Practical single-phase transformer sizing: turns ratio, winding
//! currents, apparent power, core cross-section from the empirical
//! `A = k·√S` rule, and turns-per-volt from the general EMF equation
//! `N/V = 10⁸ / (4.44·f·B·A)` with A converted from cm² to m².
//!
//! All guards live in [`TransformerInput::validate`]; the arithmetic
//! itself never divides by zero once validation passes.

use serde::{Deserialize, Serialize};

use crate::errors::{VoltError, VoltResult};
use crate::materials::CoreMaterial;

/// Input for the transformer calculator.
///
/// ## JSON Example
///
/// ```json
/// {
///   "primary_v": 120.0,
///   "secondary_v": 12.0,
///   "power_w": 50.0,
///   "efficiency": 0.95,
///   "frequency_hz": 60.0,
///   "core": "Silicon"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformerInput {
    /// Primary voltage in volts
    pub primary_v: f64,
    /// Secondary voltage in volts
    pub secondary_v: f64,
    /// Rated power in watts
    pub power_w: f64,
    /// Efficiency η, in (0, 1]
    pub efficiency: f64,
    /// Line frequency in hertz
    pub frequency_hz: f64,
    /// Core material (sets flux density B and area constant k)
    pub core: CoreMaterial,
}

impl TransformerInput {
    /// Create an input with the customary defaults: η = 0.95, 60 Hz,
    /// silicon-steel core.
    pub fn new(primary_v: f64, secondary_v: f64, power_w: f64) -> Self {
        TransformerInput {
            primary_v,
            secondary_v,
            power_w,
            efficiency: 0.95,
            frequency_hz: 60.0,
            core: CoreMaterial::Silicon,
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> VoltResult<()> {
        if !(self.primary_v.is_finite() && self.primary_v > 0.0) {
            return Err(VoltError::invalid_input(
                "primary_v",
                self.primary_v.to_string(),
                "Primary voltage must be positive",
            ));
        }
        if !(self.secondary_v.is_finite() && self.secondary_v > 0.0) {
            return Err(VoltError::invalid_input(
                "secondary_v",
                self.secondary_v.to_string(),
                "Secondary voltage must be positive",
            ));
        }
        if !(self.power_w.is_finite() && self.power_w > 0.0) {
            return Err(VoltError::invalid_input(
                "power_w",
                self.power_w.to_string(),
                "Power must be positive",
            ));
        }
        if !(self.efficiency.is_finite() && self.efficiency > 0.0 && self.efficiency <= 1.0) {
            return Err(VoltError::invalid_input(
                "efficiency",
                self.efficiency.to_string(),
                "Efficiency must be in (0, 1]",
            ));
        }
        if !(self.frequency_hz.is_finite() && self.frequency_hz > 0.0) {
            return Err(VoltError::invalid_input(
                "frequency_hz",
                self.frequency_hz.to_string(),
                "Frequency must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from the transformer calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformerResult {
    /// Turns ratio Np/Ns = Vp/Vs
    pub turns_ratio: f64,
    /// Primary current in amperes, Ip = P/(Vp·η)
    pub primary_current_a: f64,
    /// Secondary current in amperes, Is = P/(Vs·η)
    pub secondary_current_a: f64,
    /// Apparent power in VA, S = P/η
    pub apparent_power_va: f64,
    /// Core cross-section in cm², A = k·√S
    pub core_area_cm2: f64,
    /// Turns per volt from the EMF equation
    pub turns_per_volt: f64,
    /// Primary winding turns
    pub primary_turns: f64,
    /// Secondary winding turns
    pub secondary_turns: f64,
    /// Estimated losses in watts, P·(1−η)
    pub power_loss_w: f64,
    /// Core-area constant k used
    pub core_constant: f64,
    /// Flux density B in Tesla used
    pub flux_density_t: f64,
    /// Efficiency as a percentage
    pub efficiency_pct: f64,
}

/// Run the transformer sizing calculation.
pub fn calculate(input: &TransformerInput) -> VoltResult<TransformerResult> {
    input.validate()?;

    let b = input.core.flux_density_t();
    let k = input.core.core_constant();

    let turns_ratio = input.primary_v / input.secondary_v;
    let primary_current_a = input.power_w / (input.primary_v * input.efficiency);
    let secondary_current_a = input.power_w / (input.secondary_v * input.efficiency);
    let apparent_power_va = input.power_w / input.efficiency;

    let core_area_cm2 = apparent_power_va.sqrt() * k;
    let area_m2 = core_area_cm2 / 10_000.0;
    let turns_per_volt = 1e8 / (4.44 * input.frequency_hz * b * area_m2);

    Ok(TransformerResult {
        turns_ratio,
        primary_current_a,
        secondary_current_a,
        apparent_power_va,
        core_area_cm2,
        turns_per_volt,
        primary_turns: input.primary_v * turns_per_volt,
        secondary_turns: input.secondary_v * turns_per_volt,
        power_loss_w: input.power_w * (1.0 - input.efficiency),
        core_constant: k,
        flux_density_t: b,
        efficiency_pct: input.efficiency * 100.0,
    })
}
