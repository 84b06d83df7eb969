//! # Capacitor Calculator
//!
//! Combined capacitance for parallel and series banks, and capacitive
//! reactance Xc = 1/(2πfC). Capacitance for the reactance calculation is
//! entered in microfarads and converted internally.
//!
//! Like the network helpers in the resistor module these are permissive:
//! invalid entries are filtered rather than rejected, and an impossible
//! reactance (zero/negative C or f) yields `None`.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::units::{Farads, Microfarads};

/// How a capacitor bank is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Connection {
    Parallel,
    Series,
}

/// Combined capacitance of a bank.
#[derive(Debug, Clone, Serialize)]
pub struct CapacitorTotal {
    /// Total capacitance, same unit as the inputs
    pub total: f64,
    /// How the bank is wired
    pub connection: Connection,
    /// The formula applied, for report display
    pub formula: &'static str,
}

/// Combine capacitances in parallel (sum) or series (reciprocal of the
/// reciprocal sum). Non-positive and non-finite entries are ignored; with
/// no valid entries the result is `None`.
pub fn combine(values: &[f64], connection: Connection) -> Option<CapacitorTotal> {
    let valid: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| v.is_finite() && *v > 0.0)
        .collect();
    if valid.is_empty() {
        return None;
    }

    let total = match connection {
        Connection::Parallel => valid.iter().sum(),
        Connection::Series => {
            let reciprocal_sum: f64 = valid.iter().map(|v| 1.0 / v).sum();
            if reciprocal_sum > 0.0 {
                1.0 / reciprocal_sum
            } else {
                0.0
            }
        }
    };

    Some(CapacitorTotal {
        total,
        connection,
        formula: match connection {
            Connection::Parallel => "Ct = C₁ + C₂ + C₃ + ...",
            Connection::Series => "1/Ct = 1/C₁ + 1/C₂ + 1/C₃ + ...",
        },
    })
}

/// Capacitive reactance at a given frequency.
#[derive(Debug, Clone, Serialize)]
pub struct Reactance {
    /// Reactance in ohms
    pub ohms: f64,
    /// The formula applied, for report display
    pub formula: &'static str,
}

/// Xc = 1/(2πfC) with capacitance in microfarads. Returns `None` when
/// either the capacitance or the frequency is not a positive finite number.
pub fn reactance(capacitance_uf: f64, frequency_hz: f64) -> Option<Reactance> {
    if !(capacitance_uf.is_finite() && frequency_hz.is_finite()) {
        return None;
    }
    if !(capacitance_uf > 0.0 && frequency_hz > 0.0) {
        return None;
    }
    let c: Farads = Microfarads(capacitance_uf).into();
    Some(Reactance {
        ohms: 1.0 / (2.0 * PI * frequency_hz * c.value()),
        formula: "Xc = 1 / (2πfC)",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_sum() {
        let total = combine(&[10.0, 22.0, 47.0], Connection::Parallel).unwrap();
        assert_eq!(total.total, 79.0);
        assert_eq!(total.connection, Connection::Parallel);
    }

    #[test]
    fn test_series_reciprocal() {
        let total = combine(&[100.0, 100.0], Connection::Series).unwrap();
        assert!((total.total - 50.0).abs() < 1e-9);

        let three = combine(&[10.0, 20.0, 30.0], Connection::Series).unwrap();
        assert!((three.total - 1.0 / (0.1 + 0.05 + 1.0 / 30.0)).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_entries_filtered() {
        let total = combine(&[10.0, 0.0, -5.0, f64::NAN, 22.0], Connection::Parallel).unwrap();
        assert_eq!(total.total, 32.0);
        assert!(combine(&[0.0, -1.0], Connection::Series).is_none());
        assert!(combine(&[], Connection::Parallel).is_none());
    }

    #[test]
    fn test_reactance_reference() {
        // 100 µF at 60 Hz: Xc = 1/(2π·60·1e-4) ≈ 26.526 Ω
        let xc = reactance(100.0, 60.0).unwrap();
        assert!((xc.ohms - 26.5258).abs() < 1e-3);
        assert_eq!(xc.formula, "Xc = 1 / (2πfC)");
    }

    #[test]
    fn test_reactance_rejects_non_positive() {
        assert!(reactance(0.0, 60.0).is_none());
        assert!(reactance(-10.0, 60.0).is_none());
        assert!(reactance(100.0, 0.0).is_none());
        assert!(reactance(100.0, -60.0).is_none());
        assert!(reactance(f64::NAN, 60.0).is_none());
    }

    #[test]
    fn test_reactance_rejects_infinite() {
        // an infinite C or f would otherwise yield a degenerate Xc of 0
        assert!(reactance(f64::INFINITY, 60.0).is_none());
        assert!(reactance(100.0, f64::INFINITY).is_none());
        assert!(reactance(100.0, f64::NAN).is_none());
    }

    #[test]
    fn test_reactance_falls_with_frequency() {
        let low = reactance(10.0, 50.0).unwrap();
        let high = reactance(10.0, 5000.0).unwrap();
        assert!(high.ohms < low.ohms);
    }
}
