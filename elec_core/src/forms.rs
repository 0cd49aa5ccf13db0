//! # Form Schemas
//!
//! Describes the numeric fields each calculator asks for: label, unit,
//! default and allowed range. The front ends build their forms from
//! these lists and own the edited values; calculators only ever see a
//! finished [`FieldValues`] map turned into a typed input.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::CalculatorKind;
//! use elec_core::calculations::bill::BillInput;
//! use elec_core::forms::FieldValues;
//!
//! let mut values = FieldValues::defaults_for(CalculatorKind::Bill);
//! values.set("hours_per_day", 8.0);
//!
//! let input = BillInput::from_values(&values).unwrap();
//! assert_eq!(input.load_w, 1000.0);
//! assert_eq!(input.hours_per_day, 8.0);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calculations::{battery, bill, motor, ohms_law, pump, solar, voltage_drop, wiring, CalculatorKind};
use crate::errors::{CalcError, CalcResult};
use crate::units::Unit;

/// One numeric form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Key used in [`FieldValues`] and JSON
    pub key: &'static str,
    pub label: &'static str,
    pub unit: Unit,
    pub default: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Increment for sliders/spinners
    pub step: f64,
}

impl FieldSpec {
    /// Label with unit suffix, e.g. "Load (W)"
    pub fn label_with_unit(&self) -> String {
        match self.unit.symbol() {
            "" => self.label.to_string(),
            symbol => format!("{} ({})", self.label, symbol),
        }
    }

    /// Check a value against the field's range
    pub fn check(&self, value: f64) -> CalcResult<()> {
        if !value.is_finite() {
            return Err(CalcError::invalid_input(self.key, value.to_string(), "Value must be a number"));
        }
        if let Some(min) = self.min {
            if value < min {
                return Err(CalcError::invalid_input(
                    self.key,
                    value.to_string(),
                    format!("{} must be at least {}", self.label, min),
                ));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(CalcError::invalid_input(
                    self.key,
                    value.to_string(),
                    format!("{} must be at most {}", self.label, max),
                ));
            }
        }
        Ok(())
    }

    /// Parse user text for this field
    pub fn parse(&self, text: &str) -> CalcResult<f64> {
        let value: f64 = text.trim().parse().map_err(|_| {
            CalcError::invalid_input(self.key, text, format!("{} must be a number", self.label))
        })?;
        self.check(value)?;
        Ok(value)
    }
}

/// Numeric fields for a calculator (empty for the resistor decoder and
/// the troubleshooting guide).
pub fn fields_for(kind: CalculatorKind) -> &'static [FieldSpec] {
    match kind {
        CalculatorKind::Resistor | CalculatorKind::Troubleshooting => &[],
        CalculatorKind::OhmsLaw => ohms_law::FIELDS,
        CalculatorKind::Bill => bill::FIELDS,
        CalculatorKind::Solar => solar::FIELDS,
        CalculatorKind::Pump => pump::FIELDS,
        CalculatorKind::Wiring => wiring::FIELDS,
        CalculatorKind::VoltageDrop => voltage_drop::FIELDS,
        CalculatorKind::Battery => battery::FIELDS,
        CalculatorKind::Motor => motor::FIELDS,
    }
}

/// Edited numeric values keyed by field key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, f64>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values pre-filled with each field's default
    pub fn defaults_for(kind: CalculatorKind) -> Self {
        let mut values = Self::new();
        for spec in fields_for(kind) {
            values.set(spec.key, spec.default);
        }
        values
    }

    pub fn set(&mut self, key: &str, value: f64) {
        self.0.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Get a value or fail with `MissingField`
    pub fn require(&self, key: &str) -> CalcResult<f64> {
        self.get(key).ok_or_else(|| CalcError::missing_field(key))
    }

    /// Value if present, otherwise the given fallback
    pub fn get_or(&self, key: &str, fallback: f64) -> f64 {
        self.get(key).unwrap_or(fallback)
    }

    /// Check every present value against the calculator's ranges
    pub fn check_ranges(&self, kind: CalculatorKind) -> CalcResult<()> {
        for spec in fields_for(kind) {
            if let Some(value) = self.get(spec.key) {
                spec.check(value)?;
            }
        }
        Ok(())
    }
}
