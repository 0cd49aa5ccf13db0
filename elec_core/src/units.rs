//! # Unit Types
//!
//! Every scalar a calculator reports is tagged with a [`Unit`] so the
//! front ends can print it without knowing which calculator produced it.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::units::{Quantity, Unit, format_resistance};
//!
//! let drop = Quantity::new(0.5667, Unit::Volt);
//! assert_eq!(drop.unit.symbol(), "V");
//!
//! assert_eq!(format_resistance(4700.0), "4.70 kΩ");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Unit Tags
// ============================================================================

/// Physical (or display) unit attached to a reported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Volt,
    Ampere,
    Ohm,
    Watt,
    Kilowatt,
    WattHour,
    KilowattHour,
    Hour,
    SquareMillimeter,
    Meter,
    Foot,
    LitersPerMinute,
    Horsepower,
    KiloVoltAmpere,
    Percent,
    /// Money in the configured currency (symbol supplied at render time)
    Currency,
    /// Whole number of items (panels, batteries, wires)
    Count,
    Dimensionless,
}

impl Unit {
    /// Short symbol used after a number. Empty for counts, currency and
    /// dimensionless values.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Volt => "V",
            Unit::Ampere => "A",
            Unit::Ohm => "Ω",
            Unit::Watt => "W",
            Unit::Kilowatt => "kW",
            Unit::WattHour => "Wh",
            Unit::KilowattHour => "kWh",
            Unit::Hour => "h",
            Unit::SquareMillimeter => "mm²",
            Unit::Meter => "m",
            Unit::Foot => "ft",
            Unit::LitersPerMinute => "L/min",
            Unit::Horsepower => "HP",
            Unit::KiloVoltAmpere => "kVA",
            Unit::Percent => "%",
            Unit::Currency | Unit::Count | Unit::Dimensionless => "",
        }
    }

    /// Decimal places used when displaying values of this unit
    pub fn display_precision(&self) -> usize {
        match self {
            Unit::Count => 0,
            Unit::Ampere => 4,
            _ => 2,
        }
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// A value with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Format for display. `currency_symbol` is only used for [`Unit::Currency`].
    pub fn display(&self, currency_symbol: &str) -> String {
        let precision = self.unit.display_precision();
        match self.unit {
            Unit::Currency => format!("{}{:.*}", currency_symbol, precision, self.value),
            Unit::Percent => format!("{:.*}%", precision, self.value),
            Unit::Count | Unit::Dimensionless => format!("{:.*}", precision, self.value),
            unit => format!("{:.*} {}", precision, self.value, unit.symbol()),
        }
    }
}

// ============================================================================
// Resistance Scaling
// ============================================================================

/// Scale a resistance into Ω, kΩ or MΩ (thresholds 1e3 and 1e6), two decimals.
pub fn format_resistance(ohms: f64) -> String {
    if ohms >= 1e6 {
        format!("{:.2} MΩ", ohms / 1e6)
    } else if ohms >= 1e3 {
        format!("{:.2} kΩ", ohms / 1e3)
    } else {
        format!("{:.2} Ω", ohms)
    }
}

/// Convert watt-hours to kilowatt-hours (billing units)
pub fn wh_to_kwh(wh: f64) -> f64 {
    wh / 1000.0
}
