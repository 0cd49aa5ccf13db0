//! # Solar System Sizer
//!
//! Panel and battery counts for an off-grid load. Both counts round up
//! so a partial unit becomes a whole one:
//!
//! ```text
//! panels    = ceil(total_load_W / panel_W)
//! batteries = ceil(total_load_W * backup_h / battery_Wh)
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::errors::{require_finite_result, require_non_negative, require_positive, whole_count, CalcResult};
use crate::forms::{FieldSpec, FieldValues};
use crate::report::CalculatorReport;
use crate::units::Unit;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "total_load_w", label: "Total Load", unit: Unit::Watt, default: 2000.0, min: Some(0.0), max: None, step: 100.0 },
    FieldSpec { key: "backup_hours", label: "Backup Hours", unit: Unit::Hour, default: 5.0, min: Some(0.0), max: None, step: 1.0 },
    FieldSpec { key: "panel_w", label: "Panel Wattage", unit: Unit::Watt, default: 300.0, min: Some(1.0), max: None, step: 10.0 },
    FieldSpec { key: "battery_wh", label: "Battery Capacity", unit: Unit::WattHour, default: 2000.0, min: Some(1.0), max: None, step: 100.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarInput {
    pub total_load_w: f64,
    pub backup_hours: f64,
    /// Rated output of one panel
    pub panel_w: f64,
    /// Usable capacity of one battery
    pub battery_wh: f64,
}

impl Default for SolarInput {
    fn default() -> Self {
        SolarInput {
            total_load_w: 2000.0,
            backup_hours: 5.0,
            panel_w: 300.0,
            battery_wh: 2000.0,
        }
    }
}

impl SolarInput {
    pub fn from_values(values: &FieldValues) -> CalcResult<Self> {
        Ok(SolarInput {
            total_load_w: values.require("total_load_w")?,
            backup_hours: values.require("backup_hours")?,
            panel_w: values.require("panel_w")?,
            battery_wh: values.require("battery_wh")?,
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("total_load_w", self.total_load_w)?;
        require_non_negative("backup_hours", self.backup_hours)?;
        require_positive("panel_w", self.panel_w)?;
        require_positive("battery_wh", self.battery_wh)?;
        Ok(())
    }

    /// Energy the battery bank must store
    pub fn backup_energy_wh(&self) -> f64 {
        self.total_load_w * self.backup_hours
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarResult {
    pub panels: u32,
    pub batteries: u32,
    pub backup_energy_wh: f64,
}

impl SolarResult {
    pub fn to_report(&self) -> CalculatorReport {
        CalculatorReport::new(
            CalculatorKind::Solar,
            format!("Panels ≈ {}, Batteries ≈ {}", self.panels, self.batteries),
        )
        .with_field("panels", "Panels", self.panels as f64, Unit::Count)
        .with_field("batteries", "Batteries", self.batteries as f64, Unit::Count)
        .with_field("backup_energy_wh", "Backup Energy", self.backup_energy_wh, Unit::WattHour)
    }
}

pub fn calculate(input: &SolarInput) -> CalcResult<SolarResult> {
    input.validate()?;

    let backup_energy_wh = input.backup_energy_wh();
    require_finite_result("backup_energy_wh", backup_energy_wh)?;
    let panels = whole_count("panels", input.total_load_w / input.panel_w)?;
    let batteries = whole_count("batteries", backup_energy_wh / input.battery_wh)?;

    tracing::debug!(total_load_w = input.total_load_w, panels, batteries, "sized solar system");

    Ok(SolarResult {
        panels,
        batteries,
        backup_energy_wh,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizing() {
        let result = calculate(&SolarInput::default()).unwrap();
        // 2000 / 300 = 6.67 -> 7
        assert_eq!(result.panels, 7);
        // 2000 * 5 / 2000 = 5 exactly
        assert_eq!(result.batteries, 5);
        assert_eq!(result.to_report().headline, "Panels ≈ 7, Batteries ≈ 5");
    }

    #[test]
    fn test_partial_battery_rounds_up() {
        let input = SolarInput { backup_hours: 5.5, ..Default::default() };
        assert_eq!(calculate(&input).unwrap().batteries, 6);
    }

    #[test]
    fn test_zero_panel_rating_rejected() {
        let input = SolarInput { panel_w: 0.0, ..Default::default() };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unrepresentable_counts_rejected() {
        let input = SolarInput { total_load_w: 1e10, panel_w: 1.0, ..Default::default() };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("panels"));

        let input = SolarInput { battery_wh: 1e-320, ..Default::default() };
        let err = calculate(&input).unwrap_err();
        assert!(err.to_string().contains("batteries"));
    }
}
