//! # Resistor Color-Code Decoder
//!
//! Decodes a three-band resistor (two significant digits plus a
//! multiplier) and appends the tolerance label:
//!
//! ```text
//! value = (digit1 * 10 + digit2) * 10^multiplier
//! ```
//!
//! Every combination of the ten band colors is valid, so decoding
//! cannot fail.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::resistor::{calculate, BandColor, ResistorInput, Tolerance};
//!
//! let input = ResistorInput {
//!     first_band: BandColor::Yellow,
//!     second_band: BandColor::Violet,
//!     multiplier_band: BandColor::Red,
//!     tolerance: Tolerance::Five,
//! };
//! let result = calculate(&input);
//! assert_eq!(result.resistance_ohms, 4700);
//! assert_eq!(result.display, "4.70 kΩ ±5");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::errors::CalcError;
use crate::report::CalculatorReport;
use crate::units::{format_resistance, Unit};

// ============================================================================
// Band Colors
// ============================================================================

/// Resistor band color, ordered by digit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
}

impl BandColor {
    /// All colors in digit order (black = 0 ... white = 9)
    pub const ALL: [BandColor; 10] = [
        BandColor::Black,
        BandColor::Brown,
        BandColor::Red,
        BandColor::Orange,
        BandColor::Yellow,
        BandColor::Green,
        BandColor::Blue,
        BandColor::Violet,
        BandColor::Grey,
        BandColor::White,
    ];

    /// Digit (or power-of-ten exponent) encoded by this color
    pub fn digit(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            BandColor::Black => "black",
            BandColor::Brown => "brown",
            BandColor::Red => "red",
            BandColor::Orange => "orange",
            BandColor::Yellow => "yellow",
            BandColor::Green => "green",
            BandColor::Blue => "blue",
            BandColor::Violet => "violet",
            BandColor::Grey => "grey",
            BandColor::White => "white",
        }
    }
}

impl std::fmt::Display for BandColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BandColor {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        // "gray" is the common US spelling
        let lower = if lower == "gray" { "grey".to_string() } else { lower };
        BandColor::ALL
            .iter()
            .copied()
            .find(|c| c.name() == lower)
            .ok_or_else(|| CalcError::unknown_option("band_color", s))
    }
}

// ============================================================================
// Tolerance
// ============================================================================

/// Tolerance band. Display-only, never used in the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tolerance {
    #[serde(rename = "±1")]
    One,
    #[serde(rename = "±2")]
    Two,
    #[serde(rename = "±5")]
    Five,
    #[serde(rename = "±10")]
    Ten,
}

impl Tolerance {
    pub const ALL: [Tolerance; 4] = [Tolerance::One, Tolerance::Two, Tolerance::Five, Tolerance::Ten];

    pub fn label(&self) -> &'static str {
        match self {
            Tolerance::One => "±1",
            Tolerance::Two => "±2",
            Tolerance::Five => "±5",
            Tolerance::Ten => "±10",
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            Tolerance::One => 1,
            Tolerance::Two => 2,
            Tolerance::Five => 5,
            Tolerance::Ten => 10,
        }
    }
}

impl std::fmt::Display for Tolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Tolerance {
    type Err = CalcError;

    /// Accepts "±5", "5", "5%" or "+-5"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .trim_start_matches('±')
            .trim_start_matches("+-")
            .trim_end_matches('%');
        Tolerance::ALL
            .iter()
            .copied()
            .find(|t| t.percent().to_string() == digits)
            .ok_or_else(|| CalcError::unknown_option("tolerance", s))
    }
}

// ============================================================================
// Input / Result
// ============================================================================

/// Input for the resistor decoder.
///
/// ## JSON Example
///
/// ```json
/// {
///   "first_band": "brown",
///   "second_band": "black",
///   "multiplier_band": "red",
///   "tolerance": "±5"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResistorInput {
    pub first_band: BandColor,
    pub second_band: BandColor,
    pub multiplier_band: BandColor,
    pub tolerance: Tolerance,
}

impl Default for ResistorInput {
    fn default() -> Self {
        ResistorInput {
            first_band: BandColor::Black,
            second_band: BandColor::Black,
            multiplier_band: BandColor::Black,
            tolerance: Tolerance::One,
        }
    }
}

/// Decoded resistance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistorResult {
    /// Exact value in ohms; the largest code (white/white/white) is 99e9
    pub resistance_ohms: u64,
    pub tolerance: Tolerance,
    /// Scaled value with tolerance, e.g. "4.70 kΩ ±5"
    pub display: String,
}

impl ResistorResult {
    pub fn to_report(&self) -> CalculatorReport {
        CalculatorReport::new(
            CalculatorKind::Resistor,
            format!("Resistance = {}", self.display),
        )
        .with_field("resistance_ohms", "Resistance", self.resistance_ohms as f64, Unit::Ohm)
        .with_field("tolerance_percent", "Tolerance", self.tolerance.percent() as f64, Unit::Percent)
    }
}

/// Decode the color bands.
pub fn calculate(input: &ResistorInput) -> ResistorResult {
    let significant = input.first_band.digit() as u64 * 10 + input.second_band.digit() as u64;
    let resistance_ohms = significant * 10u64.pow(input.multiplier_band.digit() as u32);

    tracing::debug!(
        first = %input.first_band,
        second = %input.second_band,
        multiplier = %input.multiplier_band,
        resistance_ohms,
        "decoded resistor"
    );

    ResistorResult {
        resistance_ohms,
        tolerance: input.tolerance,
        display: format!("{} {}", format_resistance(resistance_ohms as f64), input.tolerance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands(a: BandColor, b: BandColor, m: BandColor) -> ResistorInput {
        ResistorInput {
            first_band: a,
            second_band: b,
            multiplier_band: m,
            tolerance: Tolerance::Five,
        }
    }

    #[test]
    fn test_all_band_combinations() {
        for a in BandColor::ALL {
            for b in BandColor::ALL {
                for m in BandColor::ALL {
                    let result = calculate(&bands(a, b, m));
                    let expected = (10 * a.digit() as u64 + b.digit() as u64) * 10u64.pow(m.digit() as u32);
                    assert_eq!(result.resistance_ohms, expected);
                }
            }
        }
    }

    #[test]
    fn test_zero_ohm() {
        let result = calculate(&bands(BandColor::Black, BandColor::Black, BandColor::Brown));
        assert_eq!(result.resistance_ohms, 0);
        assert_eq!(result.display, "0.00 Ω ±5");
    }

    #[test]
    fn test_scale_selection() {
        // 47 * 10 = 470 Ω
        let ohms = calculate(&bands(BandColor::Yellow, BandColor::Violet, BandColor::Brown));
        assert_eq!(ohms.display, "470.00 Ω ±5");

        // 10 * 100 = 1 kΩ
        let kilo = calculate(&bands(BandColor::Brown, BandColor::Black, BandColor::Red));
        assert_eq!(kilo.display, "1.00 kΩ ±5");

        // 22 * 10^5 = 2.2 MΩ
        let mega = calculate(&bands(BandColor::Red, BandColor::Red, BandColor::Green));
        assert_eq!(mega.display, "2.20 MΩ ±5");
    }

    #[test]
    fn test_white_multiplier_is_megaohms() {
        let result = calculate(&bands(BandColor::Brown, BandColor::Black, BandColor::White));
        assert_eq!(result.resistance_ohms, 10_000_000_000);
        assert!(result.display.ends_with("MΩ ±5"));
        assert_eq!(result.display, "10000.00 MΩ ±5");
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!("Violet".parse::<BandColor>().unwrap(), BandColor::Violet);
        assert_eq!("gray".parse::<BandColor>().unwrap(), BandColor::Grey);
        assert!("pink".parse::<BandColor>().is_err());
    }

    #[test]
    fn test_tolerance_parsing() {
        assert_eq!("±10".parse::<Tolerance>().unwrap(), Tolerance::Ten);
        assert_eq!("2%".parse::<Tolerance>().unwrap(), Tolerance::Two);
        assert_eq!("+-1".parse::<Tolerance>().unwrap(), Tolerance::One);
        assert!("3".parse::<Tolerance>().is_err());
    }

    #[test]
    fn test_report() {
        let report = calculate(&bands(BandColor::Brown, BandColor::Black, BandColor::Red)).to_report();
        assert_eq!(report.headline, "Resistance = 1.00 kΩ ±5");
        assert_eq!(report.value("resistance_ohms"), Some(1000.0));
    }

    #[test]
    fn test_serialization() {
        let input = bands(BandColor::Grey, BandColor::Red, BandColor::Orange);
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"grey\""));
        assert!(json.contains("\"±5\""));
    }
}
