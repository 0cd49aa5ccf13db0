//! # Voltage Drop Calculator
//!
//! Drop along a copper run using the single-conductor approximation:
//!
//! ```text
//! drop    = ρ * length * current / area      (ρ = 0.017 Ω·mm²/m)
//! percent = drop / voltage * 100
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::errors::{require_non_negative, require_positive, CalcResult};
use crate::forms::{FieldSpec, FieldValues};
use crate::report::CalculatorReport;
use crate::units::Unit;

/// Resistivity of copper in Ω·mm²/m
pub const COPPER_RESISTIVITY: f64 = 0.017;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "length_m", label: "Wire Length", unit: Unit::Meter, default: 10.0, min: Some(0.0), max: None, step: 1.0 },
    FieldSpec { key: "current_a", label: "Current", unit: Unit::Ampere, default: 5.0, min: Some(0.0), max: None, step: 0.5 },
    FieldSpec { key: "voltage_v", label: "Voltage", unit: Unit::Volt, default: 230.0, min: Some(1.0), max: None, step: 1.0 },
    FieldSpec { key: "area_mm2", label: "Wire Area", unit: Unit::SquareMillimeter, default: 1.5, min: Some(0.1), max: None, step: 0.5 },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoltageDropInput {
    pub length_m: f64,
    pub current_a: f64,
    /// System voltage the percentage is taken against
    pub voltage_v: f64,
    /// Conductor cross-section
    pub area_mm2: f64,
}

impl Default for VoltageDropInput {
    fn default() -> Self {
        VoltageDropInput {
            length_m: 10.0,
            current_a: 5.0,
            voltage_v: 230.0,
            area_mm2: 1.5,
        }
    }
}

impl VoltageDropInput {
    pub fn from_values(values: &FieldValues) -> CalcResult<Self> {
        Ok(VoltageDropInput {
            length_m: values.require("length_m")?,
            current_a: values.require("current_a")?,
            voltage_v: values.require("voltage_v")?,
            area_mm2: values.require("area_mm2")?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("length_m", self.length_m)?;
        require_non_negative("current_a", self.current_a)?;
        require_positive("voltage_v", self.voltage_v)?;
        require_positive("area_mm2", self.area_mm2)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoltageDropResult {
    pub drop_v: f64,
    pub drop_percent: f64,
}

impl VoltageDropResult {
    pub fn to_report(&self) -> CalculatorReport {
        CalculatorReport::new(
            CalculatorKind::VoltageDrop,
            format!("Voltage Drop = {:.2} V ({:.2}%)", self.drop_v, self.drop_percent),
        )
        .with_field("drop_v", "Voltage Drop", self.drop_v, Unit::Volt)
        .with_field("drop_percent", "Drop", self.drop_percent, Unit::Percent)
    }
}

pub fn calculate(input: &VoltageDropInput) -> CalcResult<VoltageDropResult> {
    input.validate()?;

    let drop_v = COPPER_RESISTIVITY * input.length_m * input.current_a / input.area_mm2;
    let drop_percent = drop_v / input.voltage_v * 100.0;

    tracing::debug!(drop_v, drop_percent, "computed voltage drop");

    Ok(VoltageDropResult { drop_v, drop_percent })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run() {
        let result = calculate(&VoltageDropInput::default()).unwrap();
        assert!((result.drop_v - 0.566_666).abs() < 1e-5);
        assert!((result.drop_percent - 0.246_376).abs() < 1e-5);
        assert_eq!(result.to_report().headline, "Voltage Drop = 0.57 V (0.25%)");
    }

    #[test]
    fn test_thicker_wire_halves_drop() {
        let thin = calculate(&VoltageDropInput::default()).unwrap();
        let thick = calculate(&VoltageDropInput { area_mm2: 3.0, ..Default::default() }).unwrap();
        assert!((thin.drop_v - 2.0 * thick.drop_v).abs() < 1e-12);
    }

    #[test]
    fn test_zero_area_rejected() {
        let input = VoltageDropInput { area_mm2: 0.0, ..Default::default() };
        assert!(calculate(&input).is_err());
    }
}
