//! # Wiring & Circuit-Breaker Sizer
//!
//! Load current, MCB rating and copper cross-section for a single
//! appliance circuit.
//!
//! ```text
//! current = watts / volts
//! mcb     = ceil(current * 1.25)
//! wire    = 1.5 mm² up to 10 A, 2.5 mm² up to 20 A, 4 mm² above
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::errors::{require_non_negative, require_positive, whole_count, CalcError, CalcResult};
use crate::forms::{FieldSpec, FieldValues};
use crate::report::CalculatorReport;
use crate::units::Unit;

/// Breaker headroom over continuous load current
pub const MCB_SAFETY_FACTOR: f64 = 1.25;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "appliance_w", label: "Appliance Wattage", unit: Unit::Watt, default: 1000.0, min: Some(0.0), max: None, step: 100.0 },
    FieldSpec { key: "supply_v", label: "Supply Voltage", unit: Unit::Volt, default: 230.0, min: Some(1.0), max: None, step: 1.0 },
    FieldSpec { key: "wire_count", label: "Number of Wires", unit: Unit::Count, default: 1.0, min: Some(1.0), max: Some(3.0), step: 1.0 },
];

/// Standard copper conductor sizes offered by the sizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireSize {
    #[serde(rename = "1.5mm²")]
    Mm1_5,
    #[serde(rename = "2.5mm²")]
    Mm2_5,
    #[serde(rename = "4mm²")]
    Mm4,
}

impl WireSize {
    /// Smallest size for the load current
    pub fn for_current(current_a: f64) -> Self {
        if current_a <= 10.0 {
            WireSize::Mm1_5
        } else if current_a <= 20.0 {
            WireSize::Mm2_5
        } else {
            WireSize::Mm4
        }
    }

    pub fn area_mm2(&self) -> f64 {
        match self {
            WireSize::Mm1_5 => 1.5,
            WireSize::Mm2_5 => 2.5,
            WireSize::Mm4 => 4.0,
        }
    }
}

impl std::fmt::Display for WireSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} mm²", self.area_mm2())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WiringInput {
    pub appliance_w: f64,
    pub supply_v: f64,
    /// Conductors in the run (1-3). Reported back, not used in sizing.
    pub wire_count: u8,
}

impl Default for WiringInput {
    fn default() -> Self {
        WiringInput {
            appliance_w: 1000.0,
            supply_v: 230.0,
            wire_count: 1,
        }
    }
}

impl WiringInput {
    pub fn from_values(values: &FieldValues) -> CalcResult<Self> {
        let wire_count = values.require("wire_count")?;
        if wire_count.fract() != 0.0 || !(1.0..=3.0).contains(&wire_count) {
            return Err(CalcError::invalid_input(
                "wire_count",
                wire_count.to_string(),
                "Number of wires must be 1, 2 or 3",
            ));
        }
        Ok(WiringInput {
            appliance_w: values.require("appliance_w")?,
            supply_v: values.require("supply_v")?,
            wire_count: wire_count as u8,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("appliance_w", self.appliance_w)?;
        require_positive("supply_v", self.supply_v)?;
        if !(1..=3).contains(&self.wire_count) {
            return Err(CalcError::invalid_input(
                "wire_count",
                self.wire_count.to_string(),
                "Number of wires must be 1, 2 or 3",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WiringResult {
    pub current_a: f64,
    pub mcb_rating_a: u32,
    pub wire_size: WireSize,
    pub wire_count: u8,
}

impl WiringResult {
    pub fn to_report(&self) -> CalculatorReport {
        CalculatorReport::new(
            CalculatorKind::Wiring,
            format!(
                "Estimated Current = {:.2} A, Recommended MCB = {} A, Suggested Wire Size = {}",
                self.current_a, self.mcb_rating_a, self.wire_size
            ),
        )
        .with_field("current_a", "Estimated Current", self.current_a, Unit::Ampere)
        .with_field("mcb_rating_a", "Recommended MCB", self.mcb_rating_a as f64, Unit::Ampere)
        .with_field("wire_size_mm2", "Suggested Wire Size", self.wire_size.area_mm2(), Unit::SquareMillimeter)
        .with_field("wire_count", "Number of Wires", self.wire_count as f64, Unit::Count)
    }
}

pub fn calculate(input: &WiringInput) -> CalcResult<WiringResult> {
    input.validate()?;

    let current_a = input.appliance_w / input.supply_v;
    let mcb_rating_a = whole_count("mcb_rating_a", current_a * MCB_SAFETY_FACTOR)?;
    let wire_size = WireSize::for_current(current_a);

    tracing::debug!(current_a, mcb_rating_a, %wire_size, "sized circuit");

    Ok(WiringResult {
        current_a,
        mcb_rating_a,
        wire_size,
        wire_count: input.wire_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_circuit() {
        let result = calculate(&WiringInput::default()).unwrap();
        // 1000 / 230 = 4.35 A, * 1.25 = 5.43 -> 6 A
        assert!((result.current_a - 4.3478).abs() < 1e-3);
        assert_eq!(result.mcb_rating_a, 6);
        assert_eq!(result.wire_size, WireSize::Mm1_5);
    }

    #[test]
    fn test_wire_tiers() {
        assert_eq!(WireSize::for_current(10.0), WireSize::Mm1_5);
        assert_eq!(WireSize::for_current(10.01), WireSize::Mm2_5);
        assert_eq!(WireSize::for_current(20.0), WireSize::Mm2_5);
        assert_eq!(WireSize::for_current(20.5), WireSize::Mm4);
    }

    #[test]
    fn test_heater_circuit() {
        let input = WiringInput { appliance_w: 3000.0, ..Default::default() };
        let result = calculate(&input).unwrap();
        // 13.04 A * 1.25 = 16.3 -> 17 A
        assert_eq!(result.mcb_rating_a, 17);
        assert_eq!(result.wire_size, WireSize::Mm2_5);
    }

    #[test]
    fn test_zero_voltage_rejected() {
        let input = WiringInput { supply_v: 0.0, ..Default::default() };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_wire_count_from_values() {
        let mut values = FieldValues::defaults_for(CalculatorKind::Wiring);
        values.set("wire_count", 2.0);
        assert_eq!(WiringInput::from_values(&values).unwrap().wire_count, 2);
        values.set("wire_count", 4.0);
        assert!(WiringInput::from_values(&values).is_err());
        values.set("wire_count", 1.5);
        assert!(WiringInput::from_values(&values).is_err());
    }

    #[test]
    fn test_huge_load_rejected() {
        let input = WiringInput { appliance_w: 1e12, supply_v: 1.0, ..Default::default() };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("mcb_rating_a"));
    }

    #[test]
    fn test_wire_size_display() {
        assert_eq!(WireSize::Mm1_5.to_string(), "1.5 mm²");
        assert_eq!(WireSize::Mm4.to_string(), "4 mm²");
    }
}
