//! # Battery Backup Estimator
//!
//! Runtime of a battery at constant load: `hours = capacity_Wh / load_W`.
//! A zero load is rejected rather than reported as infinite runtime.

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::errors::{require_non_negative, require_positive, CalcResult};
use crate::forms::{FieldSpec, FieldValues};
use crate::report::CalculatorReport;
use crate::units::Unit;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "capacity_wh", label: "Battery Capacity", unit: Unit::WattHour, default: 2000.0, min: Some(0.0), max: None, step: 100.0 },
    FieldSpec { key: "load_w", label: "Load", unit: Unit::Watt, default: 500.0, min: Some(1.0), max: None, step: 50.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatteryInput {
    pub capacity_wh: f64,
    pub load_w: f64,
}

impl Default for BatteryInput {
    fn default() -> Self {
        BatteryInput {
            capacity_wh: 2000.0,
            load_w: 500.0,
        }
    }
}

impl BatteryInput {
    pub fn from_values(values: &FieldValues) -> CalcResult<Self> {
        Ok(BatteryInput {
            capacity_wh: values.require("capacity_wh")?,
            load_w: values.require("load_w")?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("capacity_wh", self.capacity_wh)?;
        require_positive("load_w", self.load_w)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatteryResult {
    pub backup_hours: f64,
}

impl BatteryResult {
    pub fn to_report(&self) -> CalculatorReport {
        CalculatorReport::new(
            CalculatorKind::Battery,
            format!("Approx Backup Time = {:.2} hours", self.backup_hours),
        )
        .with_field("backup_hours", "Backup Time", self.backup_hours, Unit::Hour)
    }
}

pub fn calculate(input: &BatteryInput) -> CalcResult<BatteryResult> {
    if let Err(err) = input.validate() {
        tracing::debug!(load_w = input.load_w, "battery backup rejected: {}", err);
        return Err(err);
    }

    let backup_hours = input.capacity_wh / input.load_w;
    tracing::debug!(backup_hours, "estimated backup time");

    Ok(BatteryResult { backup_hours })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_backup() {
        let result = calculate(&BatteryInput::default()).unwrap();
        assert_eq!(result.backup_hours, 4.0);
        assert_eq!(result.to_report().headline, "Approx Backup Time = 4.00 hours");
    }

    #[test]
    fn test_zero_load_is_an_error() {
        let input = BatteryInput { load_w: 0.0, ..Default::default() };
        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, crate::CalcError::InvalidInput { ref field, .. } if field == "load_w"));
    }
}
