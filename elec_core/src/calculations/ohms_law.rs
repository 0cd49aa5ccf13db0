//! # Ohm's Law Solver
//!
//! Derives the unknown quantities of a circuit from the known ones.
//! A value of zero means "unknown".
//!
//! ## DC Resolution
//!
//! The DC solver walks an ordered decision list and applies only the
//! first rule whose two inputs are both non-zero:
//!
//! | # | Known   | Derived                  |
//! |---|---------|--------------------------|
//! | 1 | V, I    | R = V/I, P = V·I         |
//! | 2 | V, R    | I = V/R, P = V²/R        |
//! | 3 | I, R    | V = I·R, P = I²·R        |
//! | 4 | P, V    | I = P/V, R = V²/P        |
//! | 5 | P, I    | V = P/I, R = P/I²        |
//!
//! Inputs beyond the matching pair are carried through untouched, so an
//! over-specified circuit is not cross-checked.
//!
//! ## AC Resolution
//!
//! Both AC modes need V and I. Real power applies the power factor
//! (and √3 for three phase); R is reported as plain V/I.
//!
//! ## Example
//!
//! ```rust
//! use elec_core::calculations::ohms_law::{calculate, OhmsLawInput};
//!
//! let input = OhmsLawInput::dc(12.0, 0.0, 4.0, 0.0);
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.current_a, 3.0);
//! assert_eq!(result.power_w, 36.0);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::errors::{require_non_negative, CalcError, CalcResult};
use crate::forms::{FieldSpec, FieldValues};
use crate::report::{CalculatorReport, CurvePoint};
use crate::units::Unit;

/// Number of samples in the voltage-vs-current chart
pub const CURVE_POINTS: usize = 10;

/// Form fields. All default to 0 ("unknown") except the power factor.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "voltage_v", label: "Voltage", unit: Unit::Volt, default: 0.0, min: Some(0.0), max: None, step: 1.0 },
    FieldSpec { key: "current_a", label: "Current", unit: Unit::Ampere, default: 0.0, min: Some(0.0), max: None, step: 0.1 },
    FieldSpec { key: "resistance_ohm", label: "Resistance", unit: Unit::Ohm, default: 0.0, min: Some(0.0), max: None, step: 1.0 },
    FieldSpec { key: "power_w", label: "Power", unit: Unit::Watt, default: 0.0, min: Some(0.0), max: None, step: 1.0 },
    FieldSpec { key: "power_factor", label: "Power Factor (0-1)", unit: Unit::Dimensionless, default: 1.0, min: Some(0.0), max: Some(1.0), step: 0.01 },
];

// ============================================================================
// Mode
// ============================================================================

/// Circuit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OhmsLawMode {
    #[default]
    #[serde(rename = "DC")]
    Dc,
    #[serde(rename = "AC Single Phase")]
    AcSinglePhase,
    #[serde(rename = "AC Three Phase")]
    AcThreePhase,
}

impl OhmsLawMode {
    pub const ALL: [OhmsLawMode; 3] = [
        OhmsLawMode::Dc,
        OhmsLawMode::AcSinglePhase,
        OhmsLawMode::AcThreePhase,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            OhmsLawMode::Dc => "DC",
            OhmsLawMode::AcSinglePhase => "AC Single Phase",
            OhmsLawMode::AcThreePhase => "AC Three Phase",
        }
    }

    /// Whether the power factor field applies
    pub fn is_ac(&self) -> bool {
        !matches!(self, OhmsLawMode::Dc)
    }
}

impl std::fmt::Display for OhmsLawMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for OhmsLawMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "dc" => Ok(OhmsLawMode::Dc),
            "ac" | "ac single phase" | "single phase" | "ac1" | "1ph" => Ok(OhmsLawMode::AcSinglePhase),
            "ac three phase" | "three phase" | "ac3" | "3ph" => Ok(OhmsLawMode::AcThreePhase),
            _ => Err(CalcError::unknown_option("mode", s)),
        }
    }
}

// ============================================================================
// DC Rules
// ============================================================================

/// One entry of the DC decision list, named by its known pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DcRule {
    VoltageCurrent,
    VoltageResistance,
    CurrentResistance,
    PowerVoltage,
    PowerCurrent,
}

impl DcRule {
    /// Precedence order. The first applicable rule wins.
    pub const ORDER: [DcRule; 5] = [
        DcRule::VoltageCurrent,
        DcRule::VoltageResistance,
        DcRule::CurrentResistance,
        DcRule::PowerVoltage,
        DcRule::PowerCurrent,
    ];

    /// Whether both of this rule's known values are present
    pub fn applies(&self, v: f64, i: f64, r: f64, p: f64) -> bool {
        match self {
            DcRule::VoltageCurrent => v > 0.0 && i > 0.0,
            DcRule::VoltageResistance => v > 0.0 && r > 0.0,
            DcRule::CurrentResistance => i > 0.0 && r > 0.0,
            DcRule::PowerVoltage => p > 0.0 && v > 0.0,
            DcRule::PowerCurrent => p > 0.0 && i > 0.0,
        }
    }

    /// Apply the rule, returning (V, I, R, P)
    fn solve(&self, v: f64, i: f64, r: f64, p: f64) -> (f64, f64, f64, f64) {
        match self {
            DcRule::VoltageCurrent => (v, i, v / i, v * i),
            DcRule::VoltageResistance => (v, v / r, r, v.powi(2) / r),
            DcRule::CurrentResistance => (i * r, i, r, i.powi(2) * r),
            DcRule::PowerVoltage => (v, p / v, v.powi(2) / p, p),
            DcRule::PowerCurrent => (p / i, i, p / i.powi(2), p),
        }
    }
}

/// First rule in precedence order whose inputs are known
pub fn select_dc_rule(v: f64, i: f64, r: f64, p: f64) -> Option<DcRule> {
    DcRule::ORDER.iter().copied().find(|rule| rule.applies(v, i, r, p))
}

// ============================================================================
// Input / Result
// ============================================================================

/// Input for the Ohm's law solver. Zero means unknown.
///
/// ## JSON Example
///
/// ```json
/// {
///   "mode": "AC Single Phase",
///   "voltage_v": 230.0,
///   "current_a": 10.0,
///   "resistance_ohm": 0.0,
///   "power_w": 0.0,
///   "power_factor": 0.8
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhmsLawInput {
    #[serde(default)]
    pub mode: OhmsLawMode,
    #[serde(default)]
    pub voltage_v: f64,
    #[serde(default)]
    pub current_a: f64,
    #[serde(default)]
    pub resistance_ohm: f64,
    #[serde(default)]
    pub power_w: f64,
    /// Real/apparent power ratio, AC modes only
    #[serde(default = "default_power_factor")]
    pub power_factor: f64,
}

fn default_power_factor() -> f64 {
    1.0
}

impl Default for OhmsLawInput {
    fn default() -> Self {
        OhmsLawInput {
            mode: OhmsLawMode::Dc,
            voltage_v: 0.0,
            current_a: 0.0,
            resistance_ohm: 0.0,
            power_w: 0.0,
            power_factor: default_power_factor(),
        }
    }
}

impl OhmsLawInput {
    /// DC input from (V, I, R, P)
    pub fn dc(voltage_v: f64, current_a: f64, resistance_ohm: f64, power_w: f64) -> Self {
        OhmsLawInput {
            voltage_v,
            current_a,
            resistance_ohm,
            power_w,
            ..Default::default()
        }
    }

    /// AC input from V, I and power factor
    pub fn ac(mode: OhmsLawMode, voltage_v: f64, current_a: f64, power_factor: f64) -> Self {
        OhmsLawInput {
            mode,
            voltage_v,
            current_a,
            power_factor,
            ..Default::default()
        }
    }

    /// Build from form values. Absent fields count as unknown (0) and
    /// an absent power factor as 1.
    pub fn from_values(mode: OhmsLawMode, values: &FieldValues) -> Self {
        OhmsLawInput {
            mode,
            voltage_v: values.get_or("voltage_v", 0.0),
            current_a: values.get_or("current_a", 0.0),
            resistance_ohm: values.get_or("resistance_ohm", 0.0),
            power_w: values.get_or("power_w", 0.0),
            power_factor: values.get_or("power_factor", default_power_factor()),
        }
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("voltage_v", self.voltage_v)?;
        require_non_negative("current_a", self.current_a)?;
        require_non_negative("resistance_ohm", self.resistance_ohm)?;
        require_non_negative("power_w", self.power_w)?;
        if self.mode.is_ac() && !(0.0..=1.0).contains(&self.power_factor) {
            return Err(CalcError::invalid_input(
                "power_factor",
                self.power_factor.to_string(),
                "Power factor must be between 0 and 1",
            ));
        }
        Ok(())
    }
}

/// Resolved circuit values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhmsLawResult {
    pub mode: OhmsLawMode,
    pub voltage_v: f64,
    pub current_a: f64,
    /// V/I (AC modes ignore reactance)
    pub resistance_ohm: f64,
    /// Real power in AC modes
    pub power_w: f64,
    pub power_factor: f64,
    /// DC rule that fired; None for AC modes
    pub rule: Option<DcRule>,
    /// Voltage-vs-current samples for charting
    pub curve: Vec<CurvePoint>,
}

impl OhmsLawResult {
    /// Summary line in the form shown by the front ends
    pub fn headline(&self) -> String {
        match self.mode {
            OhmsLawMode::Dc => format!(
                "DC → V={:.2} V, I={:.4} A, R={:.2} Ω, P={:.2} W",
                self.voltage_v, self.current_a, self.resistance_ohm, self.power_w
            ),
            mode => format!(
                "{} → V={:.2} V, I={:.4} A, R={:.2} Ω, Real Power={:.2} W, PF={}",
                mode.display_name(),
                self.voltage_v,
                self.current_a,
                self.resistance_ohm,
                self.power_w,
                self.power_factor
            ),
        }
    }

    pub fn to_report(&self) -> CalculatorReport {
        let power_label = if self.mode.is_ac() { "Real Power" } else { "Power" };
        let mut report = CalculatorReport::new(CalculatorKind::OhmsLaw, self.headline())
            .with_field("voltage_v", "Voltage", self.voltage_v, Unit::Volt)
            .with_field("current_a", "Current", self.current_a, Unit::Ampere)
            .with_field("resistance_ohm", "Resistance", self.resistance_ohm, Unit::Ohm)
            .with_field("power_w", power_label, self.power_w, Unit::Watt);
        if self.mode.is_ac() {
            report = report.with_field("power_factor", "Power Factor", self.power_factor, Unit::Dimensionless);
        }
        report.with_chart(self.curve.clone())
    }
}

/// Sample V = R·I at 1/10 ... 10/10 of the resolved current.
///
/// Empty unless both voltage and current are known.
pub fn voltage_current_curve(voltage_v: f64, current_a: f64, resistance_ohm: f64) -> Vec<CurvePoint> {
    if !(voltage_v > 0.0 && current_a > 0.0) {
        return Vec::new();
    }
    (1..=CURVE_POINTS)
        .map(|step| {
            let current = current_a * step as f64 / CURVE_POINTS as f64;
            CurvePoint {
                current_a: current,
                voltage_v: resistance_ohm * current,
            }
        })
        .collect()
}

/// Resolve the unknown circuit values.
///
/// # Returns
///
/// * `Ok(OhmsLawResult)` - Resolved values plus chart samples
/// * `Err(CalcError::InsufficientInput)` - Not enough known values
/// * `Err(CalcError::InvalidInput)` - Negative value or power factor outside [0, 1]
pub fn calculate(input: &OhmsLawInput) -> CalcResult<OhmsLawResult> {
    input.validate()?;

    let (v, i, r, p) = (input.voltage_v, input.current_a, input.resistance_ohm, input.power_w);

    let (voltage_v, current_a, resistance_ohm, power_w, rule) = match input.mode {
        OhmsLawMode::Dc => {
            let rule = select_dc_rule(v, i, r, p).ok_or_else(|| {
                tracing::debug!(v, i, r, p, "no DC rule matches the known values");
                CalcError::insufficient_input(
                    CalculatorKind::OhmsLaw.display_name(),
                    "enter two known values (V+I, V+R, I+R, P+V or P+I)",
                )
            })?;
            let (v, i, r, p) = rule.solve(v, i, r, p);
            (v, i, r, p, Some(rule))
        }
        mode => {
            if !(v > 0.0 && i > 0.0) {
                tracing::debug!(v, i, %mode, "AC mode needs voltage and current");
                return Err(CalcError::insufficient_input(
                    CalculatorKind::OhmsLaw.display_name(),
                    "AC modes need both voltage and current",
                ));
            }
            let phase_factor = if mode == OhmsLawMode::AcThreePhase { 3f64.sqrt() } else { 1.0 };
            (v, i, v / i, phase_factor * v * i * input.power_factor, None)
        }
    };

    if ![voltage_v, current_a, resistance_ohm, power_w].iter().all(|x| x.is_finite()) {
        tracing::debug!(voltage_v, current_a, resistance_ohm, power_w, "ohm's law result overflowed");
        return Err(CalcError::insufficient_input(
            CalculatorKind::OhmsLaw.display_name(),
            "the known values are too far apart to resolve",
        ));
    }

    tracing::debug!(mode = %input.mode, ?rule, voltage_v, current_a, resistance_ohm, power_w, "resolved ohm's law");

    Ok(OhmsLawResult {
        mode: input.mode,
        voltage_v,
        current_a,
        resistance_ohm,
        power_w,
        power_factor: input.power_factor,
        rule,
        curve: voltage_current_curve(voltage_v, current_a, resistance_ohm),
    })
}
