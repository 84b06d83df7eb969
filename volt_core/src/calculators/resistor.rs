//! # Resistor Color Code & Networks
//!
//! Two independent pieces:
//!
//! - **Band decoding**: 4-, 5- and 6-band color codes to nominal resistance.
//!   Four bands carry two significant digits, five and six bands carry
//!   three; the next band is the decimal multiplier, then tolerance, and a
//!   six-band code adds a temperature coefficient. Tolerance and tempco are
//!   descriptive and never change the nominal value.
//! - **Network totals**: series sum and parallel reciprocal-sum over a list
//!   of resistances. Parallel filters out non-positive entries before
//!   summing.
//!
//! ## Example
//!
//! ```rust
//! use volt_core::calculators::resistor::{decode_bands, BandColor};
//!
//! // yellow violet red gold = 4.7 kΩ ±5%
//! let value = decode_bands(&[
//!     BandColor::Yellow,
//!     BandColor::Violet,
//!     BandColor::Red,
//!     BandColor::Gold,
//! ]).unwrap();
//! assert_eq!(value.ohms, 4700.0);
//! assert_eq!(value.tolerance_pct, 5.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{VoltError, VoltResult};

/// A resistor color band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
    Gold,
    Silver,
}

impl BandColor {
    /// Significant-digit value, `None` for gold/silver
    pub fn digit(&self) -> Option<u32> {
        match self {
            BandColor::Black => Some(0),
            BandColor::Brown => Some(1),
            BandColor::Red => Some(2),
            BandColor::Orange => Some(3),
            BandColor::Yellow => Some(4),
            BandColor::Green => Some(5),
            BandColor::Blue => Some(6),
            BandColor::Violet => Some(7),
            BandColor::Gray => Some(8),
            BandColor::White => Some(9),
            BandColor::Gold | BandColor::Silver => None,
        }
    }

    /// Decimal multiplier exponent (gold −1, silver −2)
    pub fn multiplier_exp(&self) -> i32 {
        match self {
            BandColor::Gold => -1,
            BandColor::Silver => -2,
            // digit colors multiply by 10^digit
            other => other.digit().unwrap_or(0) as i32,
        }
    }

    /// Tolerance in percent, `None` for colors without a tolerance meaning
    pub fn tolerance_pct(&self) -> Option<f64> {
        match self {
            BandColor::Brown => Some(1.0),
            BandColor::Red => Some(2.0),
            BandColor::Green => Some(0.5),
            BandColor::Blue => Some(0.25),
            BandColor::Violet => Some(0.1),
            BandColor::Gray => Some(0.05),
            BandColor::Gold => Some(5.0),
            BandColor::Silver => Some(10.0),
            _ => None,
        }
    }

    /// Temperature coefficient in ppm/°C for sixth-band colors
    pub fn temp_coefficient_ppm(&self) -> Option<u32> {
        match self {
            BandColor::Brown => Some(100),
            BandColor::Red => Some(50),
            BandColor::Orange => Some(15),
            BandColor::Yellow => Some(25),
            BandColor::Blue => Some(10),
            BandColor::Violet => Some(5),
            _ => None,
        }
    }
}

/// Decoded nominal value of a color-banded resistor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistorValue {
    /// Nominal resistance in ohms
    pub ohms: f64,
    /// Tolerance in percent
    pub tolerance_pct: f64,
    /// Temperature coefficient in ppm/°C (6-band codes only)
    pub temp_coefficient_ppm: Option<u32>,
}

/// Decode a 4-, 5- or 6-band color code into a nominal resistance.
pub fn decode_bands(bands: &[BandColor]) -> VoltResult<ResistorValue> {
    let (digit_count, has_tempco) = match bands.len() {
        4 => (2, false),
        5 => (3, false),
        6 => (3, true),
        n => {
            return Err(VoltError::invalid_input(
                "bands",
                n.to_string(),
                "A color code has 4, 5 or 6 bands",
            ))
        }
    };

    let mut significant: u32 = 0;
    for (idx, band) in bands[..digit_count].iter().enumerate() {
        let digit = band.digit().ok_or_else(|| {
            VoltError::invalid_input(
                "bands",
                format!("{:?}", band),
                format!("Band {} must be a digit color", idx + 1),
            )
        })?;
        significant = significant * 10 + digit;
    }

    let multiplier = 10f64.powi(bands[digit_count].multiplier_exp());

    let tolerance_band = bands[digit_count + 1];
    let tolerance_pct = tolerance_band.tolerance_pct().ok_or_else(|| {
        VoltError::invalid_input(
            "bands",
            format!("{:?}", tolerance_band),
            "Not a valid tolerance color",
        )
    })?;

    let temp_coefficient_ppm = if has_tempco {
        let tcr_band = bands[5];
        Some(tcr_band.temp_coefficient_ppm().ok_or_else(|| {
            VoltError::invalid_input(
                "bands",
                format!("{:?}", tcr_band),
                "Not a valid temperature-coefficient color",
            )
        })?)
    } else {
        None
    };

    Ok(ResistorValue {
        ohms: significant as f64 * multiplier,
        tolerance_pct,
        temp_coefficient_ppm,
    })
}

/// Total resistance of resistors in series: plain sum, 0 for an empty list.
pub fn calculate_series(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Total resistance of resistors in parallel.
///
/// Non-positive entries are excluded before summing reciprocals; if no
/// valid entries remain the total is 0.
pub fn calculate_parallel(values: &[f64]) -> f64 {
    let reciprocal_sum: f64 = values.iter().filter(|v| **v > 0.0).map(|v| 1.0 / v).sum();
    if reciprocal_sum == 0.0 {
        0.0
    } else {
        1.0 / reciprocal_sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BandColor::*;

    #[test]
    fn test_four_band_decode() {
        // brown black red gold = 1 kΩ ±5%
        let value = decode_bands(&[Brown, Black, Red, Gold]).unwrap();
        assert_eq!(value.ohms, 1000.0);
        assert_eq!(value.tolerance_pct, 5.0);
        assert!(value.temp_coefficient_ppm.is_none());
    }

    #[test]
    fn test_five_band_decode() {
        // brown black black brown brown = 1 kΩ ±1%
        let value = decode_bands(&[Brown, Black, Black, Brown, Brown]).unwrap();
        assert_eq!(value.ohms, 1000.0);
        assert_eq!(value.tolerance_pct, 1.0);
    }

    #[test]
    fn test_six_band_decode() {
        // orange orange black black brown red = 330 Ω ±1% 50 ppm
        let value = decode_bands(&[Orange, Orange, Black, Black, Brown, Red]).unwrap();
        assert_eq!(value.ohms, 330.0);
        assert_eq!(value.temp_coefficient_ppm, Some(50));
    }

    #[test]
    fn test_fractional_multipliers() {
        // yellow violet gold gold = 4.7 Ω ±5%
        let value = decode_bands(&[Yellow, Violet, Gold, Gold]).unwrap();
        assert!((value.ohms - 4.7).abs() < 1e-9);
        // green blue silver silver = 0.56 Ω ±10%
        let value = decode_bands(&[Green, Blue, Silver, Silver]).unwrap();
        assert!((value.ohms - 0.56).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_band_counts() {
        assert!(decode_bands(&[Brown, Black, Red]).is_err());
        assert!(decode_bands(&[Brown; 7]).is_err());
        assert!(decode_bands(&[]).is_err());
    }

    #[test]
    fn test_invalid_digit_band() {
        // gold cannot be a significant digit
        assert!(decode_bands(&[Gold, Black, Red, Gold]).is_err());
    }

    #[test]
    fn test_invalid_tolerance_band() {
        // black carries no tolerance meaning
        assert!(decode_bands(&[Brown, Black, Red, Black]).is_err());
    }

    #[test]
    fn test_invalid_tempco_band() {
        assert!(decode_bands(&[Brown, Black, Black, Brown, Brown, White]).is_err());
    }

    #[test]
    fn test_series() {
        assert_eq!(calculate_series(&[]), 0.0);
        assert_eq!(calculate_series(&[100.0, 220.0, 330.0]), 650.0);
    }

    #[test]
    fn test_parallel() {
        assert_eq!(calculate_parallel(&[]), 0.0);
        // two equal resistors halve
        assert!((calculate_parallel(&[100.0, 100.0]) - 50.0).abs() < 1e-9);
        let three = calculate_parallel(&[10.0, 20.0, 30.0]);
        assert!((three - 1.0 / (0.1 + 0.05 + 1.0 / 30.0)).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_filters_non_positive() {
        let with_junk = calculate_parallel(&[100.0, 0.0, -50.0, 100.0]);
        let clean = calculate_parallel(&[100.0, 100.0]);
        assert_eq!(with_junk, clean);
        assert_eq!(calculate_parallel(&[0.0, -1.0]), 0.0);
    }
}
