//! # Wire-Size Calculator
//!
//! Selects the smallest standard AWG gauge whose derated ampacity covers a
//! required current, and estimates the voltage drop of the selected gauge
//! over a run. Also exposes the AWG ↔ mm² conversion table with
//! nearest-match lookup in the mm² → AWG direction.
//!
//! When no gauge in the table can carry the required current the selection
//! fails with an explicit [`VoltError::GaugeNotFound`] instead of silently
//! under-rating the conductor.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{VoltError, VoltResult};
use crate::materials::ConductorMaterial;
use crate::units::{Meters, SquareMillimeters};

/// One row of the standard gauge table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WireGauge {
    /// AWG designation
    pub awg: &'static str,
    /// Conductor diameter in mm
    pub diameter_mm: f64,
    /// Cross-sectional area in mm²
    pub area_mm2: f64,
    /// Base ampacity for copper, in amperes
    pub ampacity_a: f64,
    /// Continuous max-current rating for copper, in amperes
    pub max_current_a: f64,
}

/// Standard gauges available for selection, smallest conductor first.
pub static AWG_TABLE: &[WireGauge] = &[
    WireGauge { awg: "18", diameter_mm: 1.02, area_mm2: 0.823, ampacity_a: 14.0, max_current_a: 3.0 },
    WireGauge { awg: "16", diameter_mm: 1.29, area_mm2: 1.31, ampacity_a: 18.0, max_current_a: 5.0 },
    WireGauge { awg: "14", diameter_mm: 1.63, area_mm2: 2.08, ampacity_a: 25.0, max_current_a: 15.0 },
    WireGauge { awg: "12", diameter_mm: 2.05, area_mm2: 3.31, ampacity_a: 30.0, max_current_a: 20.0 },
    WireGauge { awg: "10", diameter_mm: 2.59, area_mm2: 5.26, ampacity_a: 40.0, max_current_a: 30.0 },
    WireGauge { awg: "8", diameter_mm: 3.26, area_mm2: 8.37, ampacity_a: 55.0, max_current_a: 40.0 },
    WireGauge { awg: "6", diameter_mm: 4.11, area_mm2: 13.3, ampacity_a: 75.0, max_current_a: 55.0 },
    WireGauge { awg: "4", diameter_mm: 5.19, area_mm2: 21.2, ampacity_a: 95.0, max_current_a: 70.0 },
    WireGauge { awg: "2", diameter_mm: 6.54, area_mm2: 33.6, ampacity_a: 130.0, max_current_a: 95.0 },
    WireGauge { awg: "1/0", diameter_mm: 8.25, area_mm2: 53.5, ampacity_a: 150.0, max_current_a: 120.0 },
];

/// AWG → mm² conversion entries. Extends [`AWG_TABLE`] with the heavy
/// gauges that are convertible but not selectable.
static AWG_AREAS: Lazy<Vec<(&'static str, f64)>> = Lazy::new(|| {
    let mut areas: Vec<(&'static str, f64)> =
        AWG_TABLE.iter().map(|g| (g.awg, g.area_mm2)).collect();
    areas.extend([("2/0", 67.4), ("3/0", 85.0), ("4/0", 107.2)]);
    areas
});

static AWG_AREA_INDEX: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| AWG_AREAS.iter().copied().collect());

/// A selected gauge with material-corrected ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireSelection {
    /// AWG designation of the selected gauge
    pub awg: String,
    /// Conductor diameter in mm
    pub diameter_mm: f64,
    /// Cross-sectional area in mm²
    pub area_mm2: f64,
    /// Ampacity after material derating, in amperes
    pub ampacity_a: f64,
    /// Continuous rating after material derating, in amperes
    pub max_current_a: f64,
    /// Estimated round-trip voltage drop over the run, in volts
    pub voltage_drop_v: f64,
    /// Conductor material
    pub material: ConductorMaterial,
}

impl WireSelection {
    /// Short recommendation line for display
    pub fn recommendation(&self) -> String {
        format!("Gauge {} AWG {}", self.awg, self.material.name())
    }
}

/// Select the smallest gauge whose derated ampacity covers `current_a`,
/// estimating its drop over a single-phase run of `length_m` meters.
pub fn select_gauge(
    current_a: f64,
    material: ConductorMaterial,
    length_m: f64,
) -> VoltResult<WireSelection> {
    if !(current_a.is_finite() && current_a > 0.0) {
        return Err(VoltError::invalid_input(
            "current_a",
            current_a.to_string(),
            "Current must be positive",
        ));
    }
    if !(length_m.is_finite() && length_m > 0.0) {
        return Err(VoltError::invalid_input(
            "length_m",
            length_m.to_string(),
            "Length must be positive",
        ));
    }

    let factor = material.ampacity_factor();
    let gauge = AWG_TABLE
        .iter()
        .find(|g| g.ampacity_a * factor >= current_a)
        .ok_or_else(|| {
            let best = AWG_TABLE.last().map(|g| g.ampacity_a * factor).unwrap_or(0.0);
            VoltError::GaugeNotFound {
                required_amps: current_a,
                best_available_amps: best,
            }
        })?;

    // round trip, single-phase
    let voltage_drop_v = material
        .resistance(Meters(2.0 * length_m), SquareMillimeters(gauge.area_mm2))
        .value()
        * current_a;

    Ok(WireSelection {
        awg: gauge.awg.to_string(),
        diameter_mm: gauge.diameter_mm,
        area_mm2: gauge.area_mm2,
        ampacity_a: gauge.ampacity_a * factor,
        max_current_a: gauge.max_current_a * factor,
        voltage_drop_v,
        material,
    })
}

/// Exact AWG → mm² lookup.
pub fn awg_to_mm2(awg: &str) -> Option<f64> {
    AWG_AREA_INDEX.get(awg).copied()
}

/// Nearest-match mm² → AWG lookup by minimal absolute area difference.
pub fn mm2_to_awg(area_mm2: f64) -> Option<&'static str> {
    if !area_mm2.is_finite() {
        return None;
    }
    AWG_AREAS
        .iter()
        .min_by(|a, b| {
            (a.1 - area_mm2)
                .abs()
                .total_cmp(&(b.1 - area_mm2).abs())
        })
        .map(|(awg, _)| *awg)
}
