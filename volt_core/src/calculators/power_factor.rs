//! # Power Factor Calculator
//!
//! The AC power triangle (real P, reactive Q, apparent S) from either
//! P & S or P & Q, plus capacitor-bank sizing for power-factor correction.
//!
//! Correction preconditions are enforced at the boundary: the desired
//! power factor must exceed the current one, both in (0, 1].

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::errors::{VoltError, VoltResult};
use crate::units::{Farads, Microfarads};

/// The resolved AC power triangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerTriangle {
    /// Real power in watts
    pub real_w: f64,
    /// Apparent power in VA
    pub apparent_va: f64,
    /// Reactive power in VAR
    pub reactive_var: f64,
    /// Power factor P/S, in [0, 1]
    pub power_factor: f64,
    /// Phase angle in degrees, acos(pf)
    pub angle_deg: f64,
}

/// Resolve the triangle from real and apparent power.
///
/// Requires S > 0 and P ≤ S (the real component can never exceed the
/// apparent magnitude).
pub fn from_apparent(real_w: f64, apparent_va: f64) -> VoltResult<PowerTriangle> {
    if !(real_w.is_finite() && real_w >= 0.0) {
        return Err(VoltError::invalid_input(
            "real_w",
            real_w.to_string(),
            "Real power must be non-negative",
        ));
    }
    if !(apparent_va.is_finite() && apparent_va > 0.0) {
        return Err(VoltError::invalid_input(
            "apparent_va",
            apparent_va.to_string(),
            "Apparent power must be positive",
        ));
    }
    if real_w > apparent_va {
        return Err(VoltError::calculation_failed(
            "power_factor",
            "Real power cannot exceed apparent power",
        ));
    }

    let power_factor = real_w / apparent_va;
    Ok(PowerTriangle {
        real_w,
        apparent_va,
        reactive_var: (apparent_va * apparent_va - real_w * real_w).sqrt(),
        power_factor,
        angle_deg: power_factor.acos() * 180.0 / PI,
    })
}

/// Resolve the triangle from real and reactive power.
pub fn from_reactive(real_w: f64, reactive_var: f64) -> VoltResult<PowerTriangle> {
    if !(real_w.is_finite() && real_w >= 0.0) {
        return Err(VoltError::invalid_input(
            "real_w",
            real_w.to_string(),
            "Real power must be non-negative",
        ));
    }
    if !(reactive_var.is_finite() && reactive_var >= 0.0) {
        return Err(VoltError::invalid_input(
            "reactive_var",
            reactive_var.to_string(),
            "Reactive power must be non-negative",
        ));
    }
    let apparent_va = (real_w * real_w + reactive_var * reactive_var).sqrt();
    if apparent_va == 0.0 {
        return Err(VoltError::calculation_failed(
            "power_factor",
            "Apparent power is zero",
        ));
    }

    let power_factor = real_w / apparent_va;
    Ok(PowerTriangle {
        real_w,
        apparent_va,
        reactive_var,
        power_factor,
        angle_deg: power_factor.acos() * 180.0 / PI,
    })
}

/// Capacitor bank sizing for power-factor correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapacitorBank {
    /// Reactive power the bank must supply, in VAR
    pub reactive_power_var: f64,
    /// Same, in kVAR
    pub kvar: f64,
    /// Required capacitance in microfarads
    pub capacitance_uf: f64,
}

/// Size the correction bank: Qc = P·(tan φ₁ − tan φ₂), C = Qc/(2πfV²).
///
/// The desired power factor must be strictly greater than the current one;
/// both must lie in (0, 1]. Power, voltage, and frequency must be positive.
pub fn correction_bank(
    real_w: f64,
    current_pf: f64,
    desired_pf: f64,
    voltage_v: f64,
    frequency_hz: f64,
) -> VoltResult<CapacitorBank> {
    for (field, value) in [
        ("real_w", real_w),
        ("voltage_v", voltage_v),
        ("frequency_hz", frequency_hz),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(VoltError::invalid_input(
                field,
                value.to_string(),
                "Value must be positive",
            ));
        }
    }
    for (field, pf) in [("current_pf", current_pf), ("desired_pf", desired_pf)] {
        if !(pf.is_finite() && pf > 0.0 && pf <= 1.0) {
            return Err(VoltError::invalid_input(
                field,
                pf.to_string(),
                "Power factor must be in (0, 1]",
            ));
        }
    }
    if desired_pf <= current_pf {
        return Err(VoltError::calculation_failed(
            "power_factor_correction",
            "Desired power factor must exceed the current one",
        ));
    }

    let phi1 = current_pf.acos();
    let phi2 = desired_pf.acos();
    let reactive_power_var = real_w * (phi1.tan() - phi2.tan());
    let capacitance: Microfarads =
        Farads(reactive_power_var / (2.0 * PI * frequency_hz * voltage_v * voltage_v)).into();

    Ok(CapacitorBank {
        reactive_power_var,
        kvar: reactive_power_var / 1000.0,
        capacitance_uf: capacitance.value(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_triangle() {
        // P=800, S=1000 → pf=0.8, Q=600, angle≈36.87°
        let triangle = from_apparent(800.0, 1000.0).unwrap();
        assert!((triangle.power_factor - 0.8).abs() < 1e-12);
        assert!((triangle.reactive_var - 600.0).abs() < 1e-9);
        assert!((triangle.angle_deg - 36.8699).abs() < 1e-3);
    }

    #[test]
    fn test_from_reactive_matches() {
        let from_s = from_apparent(800.0, 1000.0).unwrap();
        let from_q = from_reactive(800.0, 600.0).unwrap();
        assert!((from_q.apparent_va - 1000.0).abs() < 1e-9);
        assert!((from_q.power_factor - from_s.power_factor).abs() < 1e-12);
        assert!((from_q.angle_deg - from_s.angle_deg).abs() < 1e-9);
    }

    #[test]
    fn test_unity_power_factor() {
        let triangle = from_apparent(1000.0, 1000.0).unwrap();
        assert_eq!(triangle.power_factor, 1.0);
        assert!(triangle.angle_deg.abs() < 1e-9);
        assert!(triangle.reactive_var.abs() < 1e-9);
    }

    #[test]
    fn test_real_exceeding_apparent() {
        assert!(from_apparent(1100.0, 1000.0).is_err());
        assert!(from_apparent(800.0, 0.0).is_err());
        assert!(from_reactive(0.0, 0.0).is_err());
    }

    #[test]
    fn test_correction_bank_reference() {
        // 10 kW load, 0.7 → 0.95 at 220 V / 60 Hz
        let bank = correction_bank(10_000.0, 0.7, 0.95, 220.0, 60.0).unwrap();
        let expected_q = 10_000.0 * ((0.7f64).acos().tan() - (0.95f64).acos().tan());
        assert!((bank.reactive_power_var - expected_q).abs() < 1e-6);
        assert!((bank.kvar - expected_q / 1000.0).abs() < 1e-9);

        let expected_c = expected_q / (2.0 * PI * 60.0 * 220.0 * 220.0) * 1e6;
        assert!((bank.capacitance_uf - expected_c).abs() < 1e-6);
    }

    #[test]
    fn test_correction_precondition() {
        // desired must exceed current
        assert!(correction_bank(1000.0, 0.9, 0.9, 220.0, 60.0).is_err());
        assert!(correction_bank(1000.0, 0.95, 0.8, 220.0, 60.0).is_err());
        // power factors outside (0, 1]
        assert!(correction_bank(1000.0, 0.0, 0.9, 220.0, 60.0).is_err());
        assert!(correction_bank(1000.0, 0.7, 1.1, 220.0, 60.0).is_err());
        // positive scalars
        assert!(correction_bank(0.0, 0.7, 0.9, 220.0, 60.0).is_err());
        assert!(correction_bank(1000.0, 0.7, 0.9, 0.0, 60.0).is_err());
        assert!(correction_bank(1000.0, 0.7, 0.9, 220.0, 0.0).is_err());
    }

    #[test]
    fn test_correction_to_unity() {
        let bank = correction_bank(5000.0, 0.8, 1.0, 380.0, 50.0).unwrap();
        // tan(acos(1)) = 0, so the bank supplies all reactive power
        let expected_q = 5000.0 * (0.8f64).acos().tan();
        assert!((bank.reactive_power_var - expected_q).abs() < 1e-6);
    }
}
