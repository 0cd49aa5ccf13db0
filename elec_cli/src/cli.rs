//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use elec_core::calculations::{BandColor, OhmsLawMode, Tolerance};

#[derive(Parser, Debug)]
#[command(name = "elec")]
#[command(version, about = "Electrical Hub - offline electrical calculators")]
pub struct Cli {
    /// Print reports and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Calculator to run; starts the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode a 3-band resistor color code
    Resistor {
        #[arg(long, default_value = "black")]
        band1: BandColor,
        #[arg(long, default_value = "black")]
        band2: BandColor,
        #[arg(long, default_value = "black")]
        multiplier: BandColor,
        /// Tolerance label, e.g. ±5 or 5 (defaults to the settings file value)
        #[arg(long)]
        tolerance: Option<Tolerance>,
    },

    /// Solve Ohm's law from any two known values (0 = unknown)
    Ohms {
        #[arg(long, default_value = "dc")]
        mode: OhmsLawMode,
        #[arg(long, default_value_t = 0.0)]
        voltage: f64,
        #[arg(long, default_value_t = 0.0)]
        current: f64,
        #[arg(long, default_value_t = 0.0)]
        resistance: f64,
        #[arg(long, default_value_t = 0.0)]
        power: f64,
        /// Power factor for AC modes
        #[arg(long, default_value_t = 1.0)]
        pf: f64,
    },

    /// Estimate the monthly electricity bill
    Bill {
        /// Load in watts
        #[arg(long, default_value_t = 1000.0)]
        load: f64,
        /// Hours per day (1-24)
        #[arg(long, default_value_t = 6.0)]
        hours: f64,
        /// Rate per kWh
        #[arg(long, default_value_t = 7.0)]
        rate: f64,
    },

    /// Size solar panels and batteries
    Solar {
        #[arg(long, default_value_t = 2000.0)]
        load: f64,
        #[arg(long, default_value_t = 5.0)]
        backup_hours: f64,
        /// Panel wattage
        #[arg(long, default_value_t = 300.0)]
        panel: f64,
        /// Battery capacity in Wh
        #[arg(long, default_value_t = 2000.0)]
        battery: f64,
    },

    /// Estimate pump horsepower
    Pump {
        /// Well depth in feet
        #[arg(long, default_value_t = 100.0)]
        depth: f64,
        /// Required flow in L/min
        #[arg(long, default_value_t = 50.0)]
        flow: f64,
    },

    /// Size MCB and wire for an appliance
    Wiring {
        #[arg(long, default_value_t = 1000.0)]
        watts: f64,
        #[arg(long, default_value_t = 230.0)]
        voltage: f64,
        /// Number of wires (1-3)
        #[arg(long, default_value_t = 1)]
        wires: u8,
    },

    /// Voltage drop along a copper run
    VoltageDrop {
        /// Wire length in meters
        #[arg(long, default_value_t = 10.0)]
        length: f64,
        #[arg(long, default_value_t = 5.0)]
        current: f64,
        #[arg(long, default_value_t = 230.0)]
        voltage: f64,
        /// Cross-section in mm²
        #[arg(long, default_value_t = 1.5)]
        area: f64,
    },

    /// Battery backup time
    Battery {
        /// Capacity in Wh
        #[arg(long, default_value_t = 2000.0)]
        capacity: f64,
        /// Load in watts
        #[arg(long, default_value_t = 500.0)]
        load: f64,
    },

    /// Motor / transformer kVA rating
    Motor {
        /// Load in kW
        #[arg(long, default_value_t = 5.0)]
        load_kw: f64,
        /// Efficiency in percent
        #[arg(long, default_value_t = 80.0)]
        efficiency: f64,
    },

    /// Show the troubleshooting guide, optionally filtered by symptom
    Troubleshoot { query: Option<String> },

    /// Interactive menu
    Menu,

    /// Evaluate a JSON calculation document ("-" for stdin)
    RunJson { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["elec", "bill", "--hours", "8", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Some(Command::Bill { hours, load, .. }) => {
                assert_eq!(hours, 8.0);
                assert_eq!(load, 1000.0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_enum_flags() {
        let cli = Cli::try_parse_from([
            "elec", "resistor", "--band1", "yellow", "--band2", "violet", "--multiplier", "red", "--tolerance", "±10",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Resistor { band1, tolerance, .. }) => {
                assert_eq!(band1, BandColor::Yellow);
                assert_eq!(tolerance, Some(Tolerance::Ten));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from(["elec", "ohms", "--mode", "ac3", "--voltage", "400"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Ohms { mode: OhmsLawMode::AcThreePhase, .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["elec", "resistor", "--band1", "pink"]).is_err());
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["elec"]).unwrap();
        assert!(cli.command.is_none());
    }
}
