//! # Electrical Calculations
//!
//! Each calculator lives in its own module and follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, `Default` = form defaults)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(&input) -> CalcResult<*Result>` - Pure calculation function
//! - `FIELDS` - Numeric form schema (see [`crate::forms`])
//!
//! Calculators never share state; every call depends only on its input.
//!
//! ## Available Calculations
//!
//! - [`resistor`] - Resistor color-code decoder
//! - [`ohms_law`] - Ohm's law solver (DC, AC single and three phase)
//! - [`bill`] - Monthly utility bill estimator
//! - [`solar`] - Solar panel and battery sizer
//! - [`pump`] - Pump horsepower estimator
//! - [`wiring`] - Circuit current, MCB and wire size
//! - [`voltage_drop`] - Copper run voltage drop
//! - [`battery`] - Battery backup time
//! - [`motor`] - Motor / transformer kVA sizing

pub mod battery;
pub mod bill;
pub mod motor;
pub mod ohms_law;
pub mod pump;
pub mod resistor;
pub mod solar;
pub mod voltage_drop;
pub mod wiring;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite_result, CalcError, CalcResult};
use crate::forms::FieldValues;
use crate::report::CalculatorReport;
use crate::settings::HubSettings;

// Re-export commonly used types
pub use battery::{BatteryInput, BatteryResult};
pub use bill::{BillInput, BillResult};
pub use motor::{MotorInput, MotorResult};
pub use ohms_law::{OhmsLawInput, OhmsLawMode, OhmsLawResult};
pub use pump::{PumpInput, PumpResult};
pub use resistor::{BandColor, ResistorInput, ResistorResult, Tolerance};
pub use solar::{SolarInput, SolarResult};
pub use voltage_drop::{VoltageDropInput, VoltageDropResult};
pub use wiring::{WiringInput, WiringResult};

/// Menu entries, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    Resistor,
    OhmsLaw,
    Bill,
    Solar,
    Pump,
    Wiring,
    VoltageDrop,
    Battery,
    Motor,
    Troubleshooting,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 10] = [
        CalculatorKind::Resistor,
        CalculatorKind::OhmsLaw,
        CalculatorKind::Bill,
        CalculatorKind::Solar,
        CalculatorKind::Pump,
        CalculatorKind::Wiring,
        CalculatorKind::VoltageDrop,
        CalculatorKind::Battery,
        CalculatorKind::Motor,
        CalculatorKind::Troubleshooting,
    ];

    /// Menu label
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculatorKind::Resistor => "Resistor Calculator",
            CalculatorKind::OhmsLaw => "Ohm's Law Calculator",
            CalculatorKind::Bill => "Light Bill Calculator",
            CalculatorKind::Solar => "Solar Designer",
            CalculatorKind::Pump => "Pump Estimator",
            CalculatorKind::Wiring => "Home Wiring & MCB",
            CalculatorKind::VoltageDrop => "Voltage Drop Calculator",
            CalculatorKind::Battery => "Battery Backup Calculator",
            CalculatorKind::Motor => "Motor / Transformer Sizing",
            CalculatorKind::Troubleshooting => "Troubleshooting Guide",
        }
    }

    /// Identifier used by the CLI and in JSON
    pub fn slug(&self) -> &'static str {
        match self {
            CalculatorKind::Resistor => "resistor",
            CalculatorKind::OhmsLaw => "ohms_law",
            CalculatorKind::Bill => "bill",
            CalculatorKind::Solar => "solar",
            CalculatorKind::Pump => "pump",
            CalculatorKind::Wiring => "wiring",
            CalculatorKind::VoltageDrop => "voltage_drop",
            CalculatorKind::Battery => "battery",
            CalculatorKind::Motor => "motor",
            CalculatorKind::Troubleshooting => "troubleshooting",
        }
    }

    /// Label of the button that triggers the calculation
    pub fn action_label(&self) -> &'static str {
        match self {
            CalculatorKind::Resistor => "Calculate Resistance",
            CalculatorKind::OhmsLaw => "Calculate Ohm's Law",
            CalculatorKind::Bill => "Calculate Bill",
            CalculatorKind::Solar => "Estimate Solar System",
            CalculatorKind::Pump => "Estimate Pump HP",
            CalculatorKind::Wiring => "Calculate MCB & Wire",
            CalculatorKind::VoltageDrop => "Calculate Voltage Drop",
            CalculatorKind::Battery => "Calculate Backup Time",
            CalculatorKind::Motor => "Estimate Motor / Transformer",
            CalculatorKind::Troubleshooting => "Show Guide",
        }
    }

    /// Resolve a CLI/JSON identifier ('-' and '_' both accepted)
    pub fn from_slug(slug: &str) -> CalcResult<Self> {
        let normalized = slug.trim().to_lowercase().replace('-', "_");
        CalculatorKind::ALL
            .iter()
            .copied()
            .find(|k| k.slug() == normalized)
            .ok_or_else(|| CalcError::UnknownCalculator { name: slug.to_string() })
    }

    /// Whether this entry computes anything (the guide is a static table)
    pub fn is_calculator(&self) -> bool {
        !matches!(self, CalculatorKind::Troubleshooting)
    }
}

impl std::fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for CalculatorKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorKind::from_slug(s)
    }
}

/// Input for any calculator.
///
/// ## JSON Example
///
/// ```json
/// { "calculator": "battery", "capacity_wh": 2000.0, "load_w": 500.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculatorInput {
    Resistor(ResistorInput),
    OhmsLaw(OhmsLawInput),
    Bill(BillInput),
    Solar(SolarInput),
    Pump(PumpInput),
    Wiring(WiringInput),
    VoltageDrop(VoltageDropInput),
    Battery(BatteryInput),
    Motor(MotorInput),
}

impl CalculatorInput {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculatorInput::Resistor(_) => CalculatorKind::Resistor,
            CalculatorInput::OhmsLaw(_) => CalculatorKind::OhmsLaw,
            CalculatorInput::Bill(_) => CalculatorKind::Bill,
            CalculatorInput::Solar(_) => CalculatorKind::Solar,
            CalculatorInput::Pump(_) => CalculatorKind::Pump,
            CalculatorInput::Wiring(_) => CalculatorKind::Wiring,
            CalculatorInput::VoltageDrop(_) => CalculatorKind::VoltageDrop,
            CalculatorInput::Battery(_) => CalculatorKind::Battery,
            CalculatorInput::Motor(_) => CalculatorKind::Motor,
        }
    }

    /// Build a numeric calculator's input from edited form values after
    /// checking each value against its field range. `mode` is only read
    /// by Ohm's law.
    pub fn from_form(kind: CalculatorKind, mode: OhmsLawMode, values: &FieldValues) -> CalcResult<Self> {
        values.check_ranges(kind)?;
        let input = match kind {
            CalculatorKind::OhmsLaw => CalculatorInput::OhmsLaw(OhmsLawInput::from_values(mode, values)),
            CalculatorKind::Bill => CalculatorInput::Bill(BillInput::from_values(values)?),
            CalculatorKind::Solar => CalculatorInput::Solar(SolarInput::from_values(values)?),
            CalculatorKind::Pump => CalculatorInput::Pump(PumpInput::from_values(values)?),
            CalculatorKind::Wiring => CalculatorInput::Wiring(WiringInput::from_values(values)?),
            CalculatorKind::VoltageDrop => CalculatorInput::VoltageDrop(VoltageDropInput::from_values(values)?),
            CalculatorKind::Battery => CalculatorInput::Battery(BatteryInput::from_values(values)?),
            CalculatorKind::Motor => CalculatorInput::Motor(MotorInput::from_values(values)?),
            CalculatorKind::Resistor | CalculatorKind::Troubleshooting => {
                return Err(CalcError::invalid_input("calculator", kind.slug(), "No numeric form"));
            }
        };
        Ok(input)
    }

    /// Parse a JSON document describing one calculation
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Run any calculator and render its report.
///
/// # Example
///
/// ```rust
/// use elec_core::calculations::{evaluate, CalculatorInput, BatteryInput};
/// use elec_core::settings::HubSettings;
///
/// let input = CalculatorInput::Battery(BatteryInput::default());
/// let report = evaluate(&input, &HubSettings::default()).unwrap();
/// assert_eq!(report.headline, "Approx Backup Time = 4.00 hours");
/// ```
pub fn evaluate(input: &CalculatorInput, settings: &HubSettings) -> CalcResult<CalculatorReport> {
    match render(input, settings) {
        Ok(report) => {
            tracing::debug!(calculator = input.kind().slug(), headline = %report.headline, "calculation complete");
            Ok(report)
        }
        Err(e) => {
            tracing::debug!(calculator = input.kind().slug(), code = e.error_code(), error = %e, "calculation rejected");
            Err(e)
        }
    }
}

fn render(input: &CalculatorInput, settings: &HubSettings) -> CalcResult<CalculatorReport> {
    let report = match input {
        CalculatorInput::Resistor(i) => resistor::calculate(i).to_report(),
        CalculatorInput::OhmsLaw(i) => ohms_law::calculate(i)?.to_report(),
        CalculatorInput::Bill(i) => bill::calculate(i)?.to_report(&settings.currency_symbol),
        CalculatorInput::Solar(i) => solar::calculate(i)?.to_report(),
        CalculatorInput::Pump(i) => pump::calculate(i)?.to_report(),
        CalculatorInput::Wiring(i) => wiring::calculate(i)?.to_report(),
        CalculatorInput::VoltageDrop(i) => voltage_drop::calculate(i)?.to_report(),
        CalculatorInput::Battery(i) => battery::calculate(i)?.to_report(),
        CalculatorInput::Motor(i) => motor::calculate(i)?.to_report(),
    };

    for field in &report.fields {
        require_finite_result(&field.key, field.quantity.value)?;
    }
    for point in report.chart.iter().flatten() {
        require_finite_result("chart", point.voltage_v)?;
    }
    Ok(report)
}
