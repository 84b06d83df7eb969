//! # Unit Types
//!
//! Lightweight newtype wrappers for the electrical quantities the formula
//! modules work with. Inputs and results stay as plain `f64` fields with
//! unit-suffixed names (`current_ma`, `capacitance_uf`); these types make
//! the conversion sites and the core identities explicit, and JSON
//! serialization stays a bare number.
//!
//! Cross-dimension operators encode Ohm's and Watt's laws at the type
//! level: `Volts / Amperes = Ohms`, `Volts / Ohms = Amperes`,
//! `Amperes · Ohms = Volts`, `Volts · Amperes = Watts`.
//!
//! ## Example
//!
//! ```rust
//! use volt_core::units::{Amperes, Milliamperes, Ohms, Volts};
//!
//! let i: Amperes = Milliamperes(20.0).into();
//! assert_eq!(i.0, 0.02);
//!
//! let r: Ohms = Volts(12.0) / Amperes(2.0);
//! assert_eq!(r.0, 6.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Voltage in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Resistance in ohms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ohms(pub f64);

/// Power in watts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watts(pub f64);

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amperes(pub f64);

/// Current in milliamperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Milliamperes(pub f64);

impl From<Milliamperes> for Amperes {
    fn from(ma: Milliamperes) -> Self {
        Amperes(ma.0 / 1000.0)
    }
}

impl From<Amperes> for Milliamperes {
    fn from(a: Amperes) -> Self {
        Milliamperes(a.0 * 1000.0)
    }
}

/// Capacitance in farads
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Farads(pub f64);

/// Capacitance in microfarads
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Microfarads(pub f64);

impl From<Microfarads> for Farads {
    fn from(uf: Microfarads) -> Self {
        Farads(uf.0 * 1e-6)
    }
}

impl From<Farads> for Microfarads {
    fn from(f: Farads) -> Self {
        Microfarads(f.0 * 1e6)
    }
}

/// Conductor cross-section in mm²
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareMillimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

// Ohm's and Watt's laws as typed operators

impl Div<Amperes> for Volts {
    type Output = Ohms;
    fn div(self, rhs: Amperes) -> Ohms {
        Ohms(self.0 / rhs.0)
    }
}

impl Div<Ohms> for Volts {
    type Output = Amperes;
    fn div(self, rhs: Ohms) -> Amperes {
        Amperes(self.0 / rhs.0)
    }
}

impl Mul<Ohms> for Amperes {
    type Output = Volts;
    fn mul(self, rhs: Ohms) -> Volts {
        Volts(self.0 * rhs.0)
    }
}

impl Mul<Amperes> for Volts {
    type Output = Watts;
    fn mul(self, rhs: Amperes) -> Watts {
        Watts(self.0 * rhs.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Volts);
impl_arithmetic!(Amperes);
impl_arithmetic!(Milliamperes);
impl_arithmetic!(Ohms);
impl_arithmetic!(Watts);
impl_arithmetic!(Farads);
impl_arithmetic!(Microfarads);
impl_arithmetic!(SquareMillimeters);
impl_arithmetic!(Meters);
