//! # Motor / Transformer Sizer
//!
//! Apparent-power rating needed to deliver a real load at a given
//! efficiency: `kVA = load_kW / (efficiency_% / 100)`.

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::errors::{require_non_negative, CalcError, CalcResult};
use crate::forms::{FieldSpec, FieldValues};
use crate::report::CalculatorReport;
use crate::units::Unit;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "load_kw", label: "Load", unit: Unit::Kilowatt, default: 5.0, min: Some(0.0), max: None, step: 0.5 },
    FieldSpec { key: "efficiency_percent", label: "Efficiency", unit: Unit::Percent, default: 80.0, min: Some(1.0), max: Some(100.0), step: 1.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorInput {
    pub load_kw: f64,
    /// Efficiency in percent (0-100]
    pub efficiency_percent: f64,
}

impl Default for MotorInput {
    fn default() -> Self {
        MotorInput {
            load_kw: 5.0,
            efficiency_percent: 80.0,
        }
    }
}

impl MotorInput {
    pub fn from_values(values: &FieldValues) -> CalcResult<Self> {
        Ok(MotorInput {
            load_kw: values.require("load_kw")?,
            efficiency_percent: values.require("efficiency_percent")?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("load_kw", self.load_kw)?;
        if !self.efficiency_percent.is_finite() || self.efficiency_percent <= 0.0 || self.efficiency_percent > 100.0 {
            return Err(CalcError::invalid_input(
                "efficiency_percent",
                self.efficiency_percent.to_string(),
                "Efficiency must be greater than 0 and at most 100%",
            ));
        }
        Ok(())
    }

    /// Efficiency as a fraction
    pub fn efficiency(&self) -> f64 {
        self.efficiency_percent / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotorResult {
    pub rating_kva: f64,
}

impl MotorResult {
    pub fn to_report(&self) -> CalculatorReport {
        CalculatorReport::new(
            CalculatorKind::Motor,
            format!("Approx Transformer / Motor Rating = {:.2} kVA", self.rating_kva),
        )
        .with_field("rating_kva", "Rating", self.rating_kva, Unit::KiloVoltAmpere)
    }
}

pub fn calculate(input: &MotorInput) -> CalcResult<MotorResult> {
    input.validate()?;

    let rating_kva = input.load_kw / input.efficiency();
    tracing::debug!(load_kw = input.load_kw, rating_kva, "sized motor/transformer");

    Ok(MotorResult { rating_kva })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rating() {
        let result = calculate(&MotorInput::default()).unwrap();
        assert!((result.rating_kva - 6.25).abs() < 1e-9);
        assert_eq!(result.to_report().headline, "Approx Transformer / Motor Rating = 6.25 kVA");
    }

    #[test]
    fn test_efficiency_bounds() {
        assert!(calculate(&MotorInput { efficiency_percent: 0.0, ..Default::default() }).is_err());
        assert!(calculate(&MotorInput { efficiency_percent: 120.0, ..Default::default() }).is_err());
        let ideal = calculate(&MotorInput { efficiency_percent: 100.0, ..Default::default() }).unwrap();
        assert_eq!(ideal.rating_kva, 5.0);
    }
}
