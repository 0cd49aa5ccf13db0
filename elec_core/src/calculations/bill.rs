//! # Utility Bill Estimator
//!
//! Monthly energy use and cost for a constant load:
//!
//! ```text
//! units (kWh) = load_W * hours_per_day * 30 / 1000
//! bill        = units * rate_per_unit
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::errors::{require_finite_result, require_non_negative, CalcError, CalcResult};
use crate::forms::{FieldSpec, FieldValues};
use crate::report::CalculatorReport;
use crate::units::{wh_to_kwh, Unit};

/// Billing month length
pub const DAYS_PER_MONTH: f64 = 30.0;

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "load_w", label: "Load", unit: Unit::Watt, default: 1000.0, min: Some(1000.0), max: None, step: 100.0 },
    FieldSpec { key: "hours_per_day", label: "Hours per day", unit: Unit::Hour, default: 6.0, min: Some(1.0), max: Some(24.0), step: 1.0 },
    FieldSpec { key: "rate_per_unit", label: "Rate per Unit", unit: Unit::Currency, default: 7.0, min: Some(0.0), max: None, step: 0.5 },
];

/// Input for the bill estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillInput {
    /// Connected load in watts
    pub load_w: f64,
    /// Daily running hours (1-24)
    pub hours_per_day: f64,
    /// Tariff per kWh
    pub rate_per_unit: f64,
}

impl Default for BillInput {
    fn default() -> Self {
        BillInput {
            load_w: 1000.0,
            hours_per_day: 6.0,
            rate_per_unit: 7.0,
        }
    }
}

impl BillInput {
    pub fn from_values(values: &FieldValues) -> CalcResult<Self> {
        Ok(BillInput {
            load_w: values.require("load_w")?,
            hours_per_day: values.require("hours_per_day")?,
            rate_per_unit: values.require("rate_per_unit")?,
        })
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_non_negative("load_w", self.load_w)?;
        require_non_negative("hours_per_day", self.hours_per_day)?;
        if !(1.0..=24.0).contains(&self.hours_per_day) {
            return Err(CalcError::invalid_input(
                "hours_per_day",
                self.hours_per_day.to_string(),
                "Running hours must be between 1 and 24",
            ));
        }
        require_non_negative("rate_per_unit", self.rate_per_unit)?;
        Ok(())
    }
}

/// Monthly consumption and cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillResult {
    pub daily_kwh: f64,
    /// Billing units over a 30-day month
    pub units_kwh: f64,
    pub bill_amount: f64,
}

impl BillResult {
    pub fn to_report(&self, currency_symbol: &str) -> CalculatorReport {
        CalculatorReport::new(
            CalculatorKind::Bill,
            format!("Estimated Monthly Bill = {}{:.2}", currency_symbol, self.bill_amount),
        )
        .with_field("daily_kwh", "Daily Energy", self.daily_kwh, Unit::KilowattHour)
        .with_field("units_kwh", "Monthly Units", self.units_kwh, Unit::KilowattHour)
        .with_field("bill_amount", "Monthly Bill", self.bill_amount, Unit::Currency)
    }
}

pub fn calculate(input: &BillInput) -> CalcResult<BillResult> {
    input.validate()?;

    let daily_kwh = wh_to_kwh(input.load_w * input.hours_per_day);
    let units_kwh = wh_to_kwh(input.load_w * input.hours_per_day * DAYS_PER_MONTH);
    let bill_amount = units_kwh * input.rate_per_unit;
    require_finite_result("units_kwh", units_kwh)?;
    require_finite_result("bill_amount", bill_amount)?;

    tracing::debug!(load_w = input.load_w, hours = input.hours_per_day, units_kwh, bill_amount, "estimated bill");

    Ok(BillResult {
        daily_kwh,
        units_kwh,
        bill_amount,
    })
}
