//! # Pump Power Estimator
//!
//! Submersible pump rating from well depth and flow. Depth picks a base
//! rating from a step table, which is then scaled by flow relative to
//! 50 L/min and rounded up to a whole horsepower.

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::errors::{require_non_negative, whole_count, CalcResult};
use crate::forms::{FieldSpec, FieldValues};
use crate::report::CalculatorReport;
use crate::units::Unit;

/// Flow the base ratings are quoted for
pub const REFERENCE_FLOW_LPM: f64 = 50.0;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "depth_ft", label: "Well Depth", unit: Unit::Foot, default: 100.0, min: Some(0.0), max: None, step: 10.0 },
    FieldSpec { key: "flow_lpm", label: "Required Flow", unit: Unit::LitersPerMinute, default: 50.0, min: Some(0.0), max: None, step: 5.0 },
];

/// Depth band of the well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthTier {
    /// Under 100 ft
    Shallow,
    /// 100 ft up to 200 ft
    Medium,
    /// 200 ft and deeper
    Deep,
}

impl DepthTier {
    pub fn from_depth(depth_ft: f64) -> Self {
        if depth_ft < 100.0 {
            DepthTier::Shallow
        } else if depth_ft < 200.0 {
            DepthTier::Medium
        } else {
            DepthTier::Deep
        }
    }

    /// Base rating at the reference flow
    pub fn base_hp(&self) -> f64 {
        match self {
            DepthTier::Shallow => 1.0,
            DepthTier::Medium => 2.0,
            DepthTier::Deep => 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PumpInput {
    pub depth_ft: f64,
    pub flow_lpm: f64,
}

impl Default for PumpInput {
    fn default() -> Self {
        PumpInput {
            depth_ft: 100.0,
            flow_lpm: 50.0,
        }
    }
}

impl PumpInput {
    pub fn from_values(values: &FieldValues) -> CalcResult<Self> {
        Ok(PumpInput {
            depth_ft: values.require("depth_ft")?,
            flow_lpm: values.require("flow_lpm")?,
        })
    }

    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("depth_ft", self.depth_ft)?;
        require_non_negative("flow_lpm", self.flow_lpm)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PumpResult {
    pub tier: DepthTier,
    pub base_hp: f64,
    /// Rounded-up rating to buy
    pub required_hp: u32,
}

impl PumpResult {
    pub fn to_report(&self) -> CalculatorReport {
        CalculatorReport::new(
            CalculatorKind::Pump,
            format!("Pump Required ≈ {} HP", self.required_hp),
        )
        .with_field("base_hp", "Base Rating", self.base_hp, Unit::Horsepower)
        .with_field("required_hp", "Required Rating", self.required_hp as f64, Unit::Horsepower)
    }
}

pub fn calculate(input: &PumpInput) -> CalcResult<PumpResult> {
    input.validate()?;

    let tier = DepthTier::from_depth(input.depth_ft);
    let base_hp = tier.base_hp();
    let required_hp = whole_count("required_hp", base_hp * input.flow_lpm / REFERENCE_FLOW_LPM)?;

    tracing::debug!(depth_ft = input.depth_ft, ?tier, required_hp, "estimated pump");

    Ok(PumpResult {
        tier,
        base_hp,
        required_hp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hp(depth_ft: f64, flow_lpm: f64) -> u32 {
        calculate(&PumpInput { depth_ft, flow_lpm }).unwrap().required_hp
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(DepthTier::from_depth(99.9), DepthTier::Shallow);
        assert_eq!(DepthTier::from_depth(100.0), DepthTier::Medium);
        assert_eq!(DepthTier::from_depth(199.9), DepthTier::Medium);
        assert_eq!(DepthTier::from_depth(200.0), DepthTier::Deep);
    }

    #[test]
    fn test_ratings() {
        // Default 100 ft is already in the 2 HP band
        assert_eq!(hp(100.0, 50.0), 2);
        assert_eq!(hp(50.0, 50.0), 1);
        assert_eq!(hp(250.0, 50.0), 5);
        // 1 HP * 60/50 = 1.2 -> 2
        assert_eq!(hp(50.0, 60.0), 2);
        // 5 HP * 25/50 = 2.5 -> 3
        assert_eq!(hp(300.0, 25.0), 3);
    }

    #[test]
    fn test_huge_flow_rejected() {
        let err = calculate(&PumpInput { depth_ft: 300.0, flow_lpm: 1e12 }).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("required_hp"));
    }

    #[test]
    fn test_headline() {
        let report = calculate(&PumpInput::default()).unwrap().to_report();
        assert_eq!(report.headline, "Pump Required ≈ 2 HP");
    }
}
