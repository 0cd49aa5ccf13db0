//! Terminal rendering of reports and errors

use std::io::{self, Write};

use elec_core::troubleshooting::TroubleshootingEntry;
use elec_core::{CalcError, CalculatorReport};

const RULE: &str = "═══════════════════════════════════════";

fn status_icon(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}

pub fn banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  {}", title.to_uppercase())?;
    writeln!(out, "{}", RULE)
}

/// Headline, aligned fields, then the V-I samples when present
pub fn write_report(out: &mut impl Write, report: &CalculatorReport, currency_symbol: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} {}", status_icon(true), report.headline)?;
    writeln!(out)?;
    for line in report.field_lines(currency_symbol) {
        writeln!(out, "  {}", line)?;
    }

    if let Some(chart) = &report.chart {
        writeln!(out)?;
        writeln!(out, "  Voltage vs Current")?;
        writeln!(out, "  {:>12}  {:>12}", "Current (A)", "Voltage (V)")?;
        for point in chart {
            writeln!(out, "  {:>12.4}  {:>12.2}", point.current_a, point.voltage_v)?;
        }
    }
    writeln!(out)
}

pub fn write_error(out: &mut impl Write, error: &CalcError) -> io::Result<()> {
    writeln!(out, "{} Error: {}", status_icon(false), error)
}

/// Errors go to the diagnostic stream in both output modes.
pub fn write_failure(out: &mut impl Write, error: &CalcError, json: bool) -> io::Result<()> {
    if json {
        write_json(out, error)
    } else {
        write_error(out, error)
    }
}

pub fn write_guide(out: &mut impl Write, entries: &[&TroubleshootingEntry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No matching symptoms.");
    }
    for entry in entries {
        writeln!(out, "  {}", entry.line())?;
    }
    Ok(())
}

/// Pretty JSON for `--json`
pub fn write_json<T: serde::Serialize>(out: &mut impl Write, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{}", json)
}
