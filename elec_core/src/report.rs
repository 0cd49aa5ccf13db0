//! # Calculator Reports
//!
//! A [`CalculatorReport`] is the display-ready form of any calculator
//! result: a one-line headline, a list of labelled quantities, and the
//! optional chart samples produced by Ohm's law.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "calculator": "battery",
//!   "headline": "Approx Backup Time = 4.00 hours",
//!   "fields": [
//!     { "key": "backup_hours", "label": "Backup Time", "quantity": { "value": 4.0, "unit": "Hour" } }
//!   ],
//!   "chart": null
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::CalculatorKind;
use crate::units::{Quantity, Unit};

/// One (voltage, current) sample of the Ohm's law chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub current_a: f64,
    pub voltage_v: f64,
}

/// A single labelled output value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportField {
    /// Stable identifier (matches the result struct field name)
    pub key: String,
    /// Human-readable label
    pub label: String,
    pub quantity: Quantity,
}

/// Display-ready result of one calculator invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorReport {
    pub calculator: CalculatorKind,
    /// Summary line, e.g. "Estimated Monthly Bill = ₹1260.00"
    pub headline: String,
    pub fields: Vec<ReportField>,
    /// Voltage-vs-current samples, Ohm's law only
    pub chart: Option<Vec<CurvePoint>>,
}

impl CalculatorReport {
    pub fn new(calculator: CalculatorKind, headline: impl Into<String>) -> Self {
        Self {
            calculator,
            headline: headline.into(),
            fields: Vec::new(),
            chart: None,
        }
    }

    /// Builder-style field append
    pub fn with_field(mut self, key: &str, label: &str, value: f64, unit: Unit) -> Self {
        self.fields.push(ReportField {
            key: key.to_string(),
            label: label.to_string(),
            quantity: Quantity::new(value, unit),
        });
        self
    }

    pub fn with_chart(mut self, chart: Vec<CurvePoint>) -> Self {
        if !chart.is_empty() {
            self.chart = Some(chart);
        }
        self
    }

    /// Look up a field by key
    pub fn field(&self, key: &str) -> Option<&ReportField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Value of a field by key
    pub fn value(&self, key: &str) -> Option<f64> {
        self.field(key).map(|f| f.quantity.value)
    }

    /// Render the fields as aligned "label: value" lines
    pub fn field_lines(&self, currency_symbol: &str) -> Vec<String> {
        let width = self.fields.iter().map(|f| f.label.chars().count()).max().unwrap_or(0);
        self.fields
            .iter()
            .map(|f| {
                format!(
                    "{:<width$}  {}",
                    format!("{}:", f.label),
                    f.quantity.display(currency_symbol),
                    width = width + 1
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_lookup() {
        let report = CalculatorReport::new(CalculatorKind::Battery, "Approx Backup Time = 4.00 hours")
            .with_field("backup_hours", "Backup Time", 4.0, Unit::Hour);

        assert_eq!(report.value("backup_hours"), Some(4.0));
        assert!(report.field("missing").is_none());
        assert!(report.chart.is_none());
    }

    #[test]
    fn test_empty_chart_is_omitted() {
        let report = CalculatorReport::new(CalculatorKind::OhmsLaw, "x").with_chart(Vec::new());
        assert!(report.chart.is_none());
    }

    #[test]
    fn test_field_lines_alignment() {
        let report = CalculatorReport::new(CalculatorKind::Bill, "bill")
            .with_field("units_kwh", "Units", 180.0, Unit::KilowattHour)
            .with_field("bill", "Monthly Bill", 1260.0, Unit::Currency);

        let lines = report.field_lines("₹");
        assert_eq!(lines[0], "Units:         180.00 kWh");
        assert_eq!(lines[1], "Monthly Bill:  ₹1260.00");
    }
}
