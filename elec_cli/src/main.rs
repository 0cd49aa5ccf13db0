//! # Electrical Hub CLI
//!
//! Runs any calculator from flags, a JSON document, or an interactive
//! menu.
//!
//! ```text
//! elec bill --load 1500 --hours 8 --rate 6.5
//! elec ohms --voltage 230 --current 4 --mode ac --pf 0.9
//! echo '{"calculator":"battery","capacity_wh":2000,"load_w":500}' | elec --json run-json -
//! ```

mod cli;
mod logger;
mod menu;
mod output;

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use elec_core::calculations::{OhmsLawMode, ResistorInput};
use elec_core::forms::FieldValues;
use elec_core::settings::DEFAULT_SETTINGS_FILE;
use elec_core::troubleshooting::{lookup, GUIDE};
use elec_core::{evaluate, CalcError, CalculatorInput, CalculatorKind, HubSettings};

use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let settings = load_settings(cli.config.as_deref())?;
    let json = cli.json;

    let input = match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let stdin = io::stdin();
            menu::Menu::new(stdin.lock(), io::stdout(), settings).run()?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Troubleshoot { query } => {
            let entries = match &query {
                Some(q) => lookup(q),
                None => GUIDE.iter().collect(),
            };
            let mut out = io::stdout();
            if json {
                output::write_json(&mut out, &entries)?;
            } else {
                output::write_guide(&mut out, &entries)?;
            }
            return Ok(ExitCode::SUCCESS);
        }
        Command::RunJson { path } => {
            let text = read_document(&path)?;
            CalculatorInput::from_json(&text)
        }
        Command::Resistor { band1, band2, multiplier, tolerance } => Ok(CalculatorInput::Resistor(ResistorInput {
            first_band: band1,
            second_band: band2,
            multiplier_band: multiplier,
            tolerance: tolerance.unwrap_or(settings.default_tolerance),
        })),
        Command::Ohms { mode, voltage, current, resistance, power, pf } => form_input(
            CalculatorKind::OhmsLaw,
            mode,
            &[
                ("voltage_v", voltage),
                ("current_a", current),
                ("resistance_ohm", resistance),
                ("power_w", power),
                ("power_factor", pf),
            ],
        ),
        Command::Bill { load, hours, rate } => numeric(
            CalculatorKind::Bill,
            &[("load_w", load), ("hours_per_day", hours), ("rate_per_unit", rate)],
        ),
        Command::Solar { load, backup_hours, panel, battery } => numeric(
            CalculatorKind::Solar,
            &[
                ("total_load_w", load),
                ("backup_hours", backup_hours),
                ("panel_w", panel),
                ("battery_wh", battery),
            ],
        ),
        Command::Pump { depth, flow } => numeric(CalculatorKind::Pump, &[("depth_ft", depth), ("flow_lpm", flow)]),
        Command::Wiring { watts, voltage, wires } => numeric(
            CalculatorKind::Wiring,
            &[("appliance_w", watts), ("supply_v", voltage), ("wire_count", f64::from(wires))],
        ),
        Command::VoltageDrop { length, current, voltage, area } => numeric(
            CalculatorKind::VoltageDrop,
            &[
                ("length_m", length),
                ("current_a", current),
                ("voltage_v", voltage),
                ("area_mm2", area),
            ],
        ),
        Command::Battery { capacity, load } => {
            numeric(CalculatorKind::Battery, &[("capacity_wh", capacity), ("load_w", load)])
        }
        Command::Motor { load_kw, efficiency } => numeric(
            CalculatorKind::Motor,
            &[("load_kw", load_kw), ("efficiency_percent", efficiency)],
        ),
    };

    let mut out = io::stdout();
    match input.and_then(|input| evaluate(&input, &settings)) {
        Ok(report) => {
            if json {
                output::write_json(&mut out, &report)?;
            } else {
                output::write_report(&mut out, &report, &settings.currency_symbol)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            report_error(&e, json)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn numeric(kind: CalculatorKind, pairs: &[(&str, f64)]) -> Result<CalculatorInput, CalcError> {
    form_input(kind, OhmsLawMode::Dc, pairs)
}

fn form_input(kind: CalculatorKind, mode: OhmsLawMode, pairs: &[(&str, f64)]) -> Result<CalculatorInput, CalcError> {
    let mut values = FieldValues::new();
    for (key, value) in pairs {
        values.set(key, *value);
    }
    CalculatorInput::from_form(kind, mode, &values)
}

fn report_error(error: &CalcError, json: bool) -> Result<()> {
    tracing::debug!(code = error.error_code(), recoverable = error.is_recoverable(), "calculation failed");
    output::write_failure(&mut io::stderr(), error, json)?;
    Ok(())
}

/// Explicit `--config` must exist; otherwise fall back to the default
/// file in the working directory, or built-in defaults.
fn load_settings(path: Option<&Path>) -> Result<HubSettings> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("settings file not found: {}", path.display());
            }
            HubSettings::load(path).with_context(|| format!("loading {}", path.display()))
        }
        None => HubSettings::load(Path::new(DEFAULT_SETTINGS_FILE)).context("loading default settings"),
    }
}

fn read_document(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("reading stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path))
    }
}
