//! Interactive numbered menu
//!
//! Generic over the input and output streams so sessions can be scripted
//! in tests.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use elec_core::calculations::{BandColor, OhmsLawMode, ResistorInput};
use elec_core::forms::{fields_for, FieldValues};
use elec_core::troubleshooting::GUIDE;
use elec_core::{evaluate, CalcResult, CalculatorInput, CalculatorKind, HubSettings};

use crate::output;

pub struct Menu<R, W> {
    input: R,
    output: W,
    settings: HubSettings,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, settings: HubSettings) -> Self {
        Self { input, output, settings }
    }

    /// Loop until "0", "q" or end of input
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Electrical Hub")?;
        writeln!(self.output, "==============")?;

        loop {
            writeln!(self.output)?;
            for (i, kind) in CalculatorKind::ALL.iter().enumerate() {
                writeln!(self.output, "  {:>2}. {}", i + 1, kind.display_name())?;
            }
            writeln!(self.output, "   0. Quit")?;

            let Some(line) = self.prompt("Select: ")? else {
                return Ok(());
            };
            let choice = line.trim();
            if choice == "0" || choice.eq_ignore_ascii_case("q") {
                return Ok(());
            }

            let kind = choice
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| CalculatorKind::ALL.get(i).copied());
            match kind {
                Some(kind) => self.run_calculator(kind)?,
                None => writeln!(self.output, "Unknown choice: {}", choice)?,
            }
        }
    }

    fn run_calculator(&mut self, kind: CalculatorKind) -> io::Result<()> {
        writeln!(self.output)?;
        output::banner(&mut self.output, kind.display_name())?;

        let input: CalcResult<CalculatorInput> = match kind {
            CalculatorKind::Troubleshooting => {
                let entries: Vec<_> = GUIDE.iter().collect();
                return output::write_guide(&mut self.output, &entries);
            }
            CalculatorKind::Resistor => {
                let input = ResistorInput {
                    first_band: self.prompt_parse("1st band color", BandColor::Black)?,
                    second_band: self.prompt_parse("2nd band color", BandColor::Black)?,
                    multiplier_band: self.prompt_parse("Multiplier band color", BandColor::Black)?,
                    tolerance: self.prompt_parse("Tolerance", self.settings.default_tolerance)?,
                };
                Ok(CalculatorInput::Resistor(input))
            }
            CalculatorKind::OhmsLaw => {
                let mode = self.prompt_parse("Mode (dc / ac / ac3)", OhmsLawMode::Dc)?;
                writeln!(self.output, "Enter any two known values, 0 for unknown.")?;
                let values = self.prompt_fields(kind, mode)?;
                CalculatorInput::from_form(kind, mode, &values)
            }
            _ => {
                let values = self.prompt_fields(kind, OhmsLawMode::Dc)?;
                CalculatorInput::from_form(kind, OhmsLawMode::Dc, &values)
            }
        };

        match input.and_then(|input| evaluate(&input, &self.settings)) {
            Ok(report) => output::write_report(&mut self.output, &report, &self.settings.currency_symbol),
            Err(e) => {
                tracing::debug!(code = e.error_code(), "calculation rejected");
                output::write_error(&mut self.output, &e)
            }
        }
    }

    /// Prompt for each numeric field. Empty input keeps the default; the
    /// power factor is only asked for AC modes.
    fn prompt_fields(&mut self, kind: CalculatorKind, mode: OhmsLawMode) -> io::Result<FieldValues> {
        let mut values = FieldValues::defaults_for(kind);
        for spec in fields_for(kind) {
            if spec.key == "power_factor" && !mode.is_ac() {
                continue;
            }
            loop {
                let prompt = format!("{} [{}]: ", spec.label_with_unit(), spec.default);
                let Some(line) = self.prompt(&prompt)? else {
                    break;
                };
                if line.trim().is_empty() {
                    break;
                }
                match spec.parse(&line) {
                    Ok(value) => {
                        values.set(spec.key, value);
                        break;
                    }
                    Err(e) => writeln!(self.output, "  {}", e)?,
                }
            }
        }
        Ok(values)
    }

    fn prompt_parse<T: FromStr + std::fmt::Display>(&mut self, label: &str, default: T) -> io::Result<T> {
        loop {
            let Some(line) = self.prompt(&format!("{} [{}]: ", label, default))? else {
                return Ok(default);
            };
            if line.trim().is_empty() {
                return Ok(default);
            }
            match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "  Unrecognised value: {}", line.trim())?,
            }
        }
    }

    /// Print a prompt and read one line; None at end of input
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> String {
        let mut out = Vec::new();
        Menu::new(script.as_bytes(), &mut out, HubSettings::default()).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_quit() {
        let text = session("0\n");
        assert!(text.contains("1. Resistor Calculator"));
        assert!(text.contains("10. Troubleshooting Guide"));
    }

    #[test]
    fn test_bill_with_defaults() {
        let text = session("3\n\n\n\n0\n");
        assert!(text.contains("Estimated Monthly Bill = ₹1260.00"));
    }

    #[test]
    fn test_resistor_colors() {
        let text = session("1\nyellow\nviolet\nred\n\n");
        assert!(text.contains("Resistance = 4.70 kΩ ±5"));
    }

    #[test]
    fn test_ohms_law_dc_skips_power_factor() {
        let text = session("2\ndc\n10\n2\n\n\n");
        assert!(text.contains("DC → V=10.00 V, I=2.0000 A, R=5.00 Ω, P=20.00 W"));
        assert!(!text.contains("Power Factor"));
    }

    #[test]
    fn test_invalid_number_reprompts() {
        let text = session("8\nlots\n1200\n300\n");
        assert!(text.contains("must be a number"));
        assert!(text.contains("Approx Backup Time = 4.00 hours"));
    }

    #[test]
    fn test_calculation_error_is_reported() {
        let text = session("2\n\n\n\n\n\n");
        assert!(text.contains("Error:"));
    }

    #[test]
    fn test_unknown_choice() {
        let text = session("42\nq\n");
        assert!(text.contains("Unknown choice: 42"));
    }
}
