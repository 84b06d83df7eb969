//! # Material Data
//!
//! Physical constants shared across calculators: conductor resistivities
//! and ampacity derating, transformer core-material properties, and the
//! LED forward-voltage presets.
//!
//! Resistivities are in Ω·mm²/m so that `ρ·L/A` with length in meters and
//! cross-section in mm² yields ohms directly.

use serde::{Deserialize, Serialize};

use crate::units::{Meters, Ohms, SquareMillimeters};

/// Conductor material for wire sizing and voltage-drop calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConductorMaterial {
    Copper,
    Aluminum,
}

impl ConductorMaterial {
    /// Resistivity in Ω·mm²/m
    pub fn resistivity(&self) -> f64 {
        match self {
            ConductorMaterial::Copper => 0.0172,
            ConductorMaterial::Aluminum => 0.0282,
        }
    }

    /// Ampacity correction factor relative to copper.
    ///
    /// Aluminum carries roughly 61% of the current of copper at the same
    /// gauge, so table ampacities are multiplied by this factor.
    pub fn ampacity_factor(&self) -> f64 {
        match self {
            ConductorMaterial::Copper => 1.0,
            ConductorMaterial::Aluminum => 0.61,
        }
    }

    /// DC resistance of a conductor run, R = ρ·L/A
    pub fn resistance(&self, length: Meters, area: SquareMillimeters) -> Ohms {
        Ohms(self.resistivity() * length.value() / area.value())
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            ConductorMaterial::Copper => "Copper",
            ConductorMaterial::Aluminum => "Aluminum",
        }
    }
}

impl Default for ConductorMaterial {
    fn default() -> Self {
        ConductorMaterial::Copper
    }
}

/// Transformer core material.
///
/// Each material carries a working flux density B (Tesla) and an empirical
/// core-area constant k used in the practical sizing formula
/// `A = k·√S` (cm², S in VA).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreMaterial {
    /// Silicon steel laminations (1.2 T)
    Silicon,
    /// Grain-oriented steel (1.6 T)
    GrainOriented,
    /// Ferrite (0.3 T)
    Ferrite,
    /// Soft iron (1.0 T)
    SoftIron,
}

impl CoreMaterial {
    /// Working flux density in Tesla
    pub fn flux_density_t(&self) -> f64 {
        match self {
            CoreMaterial::Silicon => 1.2,
            CoreMaterial::GrainOriented => 1.6,
            CoreMaterial::Ferrite => 0.3,
            CoreMaterial::SoftIron => 1.0,
        }
    }

    /// Empirical core-area constant k
    pub fn core_constant(&self) -> f64 {
        match self {
            CoreMaterial::Silicon => 0.7,
            CoreMaterial::GrainOriented => 0.6,
            CoreMaterial::Ferrite => 1.2,
            CoreMaterial::SoftIron => 0.8,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            CoreMaterial::Silicon => "Silicon steel",
            CoreMaterial::GrainOriented => "Grain-oriented steel",
            CoreMaterial::Ferrite => "Ferrite",
            CoreMaterial::SoftIron => "Soft iron",
        }
    }
}

impl Default for CoreMaterial {
    fn default() -> Self {
        CoreMaterial::Silicon
    }
}

/// Typical forward voltage and drive current for a common LED color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LedPreset {
    /// Preset identifier ("red", "blue", ...)
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Typical forward voltage in volts
    pub forward_v: f64,
    /// Typical drive current in milliamperes
    pub default_current_ma: f64,
}

/// Common LED presets, usable as defaults in the series-resistor calculator.
pub const LED_PRESETS: &[LedPreset] = &[
    LedPreset { id: "red", name: "Red", forward_v: 1.8, default_current_ma: 20.0 },
    LedPreset { id: "green", name: "Green", forward_v: 2.1, default_current_ma: 20.0 },
    LedPreset { id: "yellow", name: "Yellow", forward_v: 2.0, default_current_ma: 20.0 },
    LedPreset { id: "blue", name: "Blue", forward_v: 3.2, default_current_ma: 20.0 },
    LedPreset { id: "white", name: "White", forward_v: 3.2, default_current_ma: 20.0 },
    LedPreset { id: "ir", name: "Infrared", forward_v: 1.2, default_current_ma: 50.0 },
];

/// Look up an LED preset by identifier.
pub fn led_preset(id: &str) -> Option<&'static LedPreset> {
    LED_PRESETS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistivity() {
        assert_eq!(ConductorMaterial::Copper.resistivity(), 0.0172);
        assert_eq!(ConductorMaterial::Aluminum.resistivity(), 0.0282);
    }

    #[test]
    fn test_ampacity_factor() {
        assert_eq!(ConductorMaterial::Copper.ampacity_factor(), 1.0);
        assert_eq!(ConductorMaterial::Aluminum.ampacity_factor(), 0.61);
    }

    #[test]
    fn test_conductor_resistance() {
        // 100 m of 2.5 mm² copper: 0.0172 × 100 / 2.5 = 0.688 Ω
        let r = ConductorMaterial::Copper.resistance(Meters(100.0), SquareMillimeters(2.5));
        assert!((r.value() - 0.688).abs() < 1e-12);
    }

    #[test]
    fn test_core_constants() {
        assert_eq!(CoreMaterial::Silicon.flux_density_t(), 1.2);
        assert_eq!(CoreMaterial::Silicon.core_constant(), 0.7);
        assert_eq!(CoreMaterial::GrainOriented.flux_density_t(), 1.6);
        assert_eq!(CoreMaterial::Ferrite.core_constant(), 1.2);
        assert_eq!(CoreMaterial::SoftIron.flux_density_t(), 1.0);
    }

    #[test]
    fn test_led_presets() {
        let red = led_preset("red").unwrap();
        assert_eq!(red.forward_v, 1.8);
        assert_eq!(red.default_current_ma, 20.0);
        let ir = led_preset("ir").unwrap();
        assert_eq!(ir.default_current_ma, 50.0);
        assert!(led_preset("ultraviolet").is_none());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ConductorMaterial::Aluminum).unwrap();
        assert_eq!(json, "\"Aluminum\"");
        let core: CoreMaterial = serde_json::from_str("\"Ferrite\"").unwrap();
        assert_eq!(core, CoreMaterial::Ferrite);
    }
}
