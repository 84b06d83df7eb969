//! # Electrical Calculators
//!
//! This module contains the ten formula modules. Each calculation follows
//! the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` / `*Solution` - Calculation results (JSON-serializable)
//! - `calculate(input) -> VoltResult<...>` - Pure calculation function
//!
//! Solver-style calculators (Ohm, power, divider) return
//! `VoltResult<Option<_>>`: errors are physical/logical violations, `None`
//! means the input combination does not determine a single unknown.
//!
//! ## Available Calculators
//!
//! - [`ohm`] - Ohm's law (solve V, I or R)
//! - [`power`] - Watt's law four-variable network
//! - [`resistor`] - Color-code decoding and series/parallel networks
//! - [`divider`] - Resistive voltage divider
//! - [`led`] - LED series resistor
//! - [`transformer`] - Single-phase transformer sizing
//! - [`capacitor`] - Capacitor banks and reactance
//! - [`power_factor`] - Power triangle and correction banks
//! - [`voltage_drop`] - Conductor voltage drop with code compliance
//! - [`wire_size`] - AWG gauge selection and conversions

pub mod capacitor;
pub mod divider;
pub mod led;
pub mod ohm;
pub mod power;
pub mod power_factor;
pub mod resistor;
pub mod transformer;
pub mod voltage_drop;
pub mod wire_size;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use divider::{DividerInput, DividerSolution};
pub use led::{LedInput, LedResult};
pub use ohm::{OhmInput, OhmSolution};
pub use power::{PowerInput, PowerSolution};
pub use transformer::{TransformerInput, TransformerResult};
pub use voltage_drop::{VoltageDropInput, VoltageDropResult};
pub use wire_size::WireSelection;

/// Identifier for every calculator in the suite.
///
/// Used as the `calculator` category on history records and for menu
/// lookups in front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Calculator {
    Ohm,
    Power,
    Resistor,
    VoltageDivider,
    LedResistor,
    Transformer,
    Capacitor,
    PowerFactor,
    VoltageDrop,
    WireSize,
}

impl Calculator {
    /// All calculators, in menu order
    pub const ALL: [Calculator; 10] = [
        Calculator::Ohm,
        Calculator::Power,
        Calculator::Resistor,
        Calculator::VoltageDivider,
        Calculator::LedResistor,
        Calculator::Transformer,
        Calculator::Capacitor,
        Calculator::PowerFactor,
        Calculator::VoltageDrop,
        Calculator::WireSize,
    ];

    /// Display name, used verbatim on history records
    pub fn display_name(&self) -> &'static str {
        match self {
            Calculator::Ohm => "Ohm's Law",
            Calculator::Power => "Power",
            Calculator::Resistor => "Resistance",
            Calculator::VoltageDivider => "Voltage Divider",
            Calculator::LedResistor => "LED Resistor",
            Calculator::Transformer => "Transformer",
            Calculator::Capacitor => "Capacitor",
            Calculator::PowerFactor => "Power Factor",
            Calculator::VoltageDrop => "Voltage Drop",
            Calculator::WireSize => "Wire Size",
        }
    }

    /// Look a calculator up by its display name
    pub fn from_name(name: &str) -> Option<Calculator> {
        static BY_NAME: Lazy<HashMap<&'static str, Calculator>> = Lazy::new(|| {
            Calculator::ALL
                .iter()
                .map(|c| (c.display_name(), *c))
                .collect()
        });
        BY_NAME.get(name).copied()
    }
}
