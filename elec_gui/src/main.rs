//! # Electrical Hub GUI Application
//!
//! Desktop front end for the elec_core calculators, built with Iced.
//!
//! Layout: calculator menu on the left, the selected calculator's form in
//! the centre, and the report (with the voltage-vs-current chart for
//! Ohm's law) on the right. Form values are held as text and only parsed
//! when the user presses the calculate button.

mod ui;

use std::collections::HashMap;
use std::path::Path;

use iced::widget::{column, container, row, rule};
use iced::{Element, Length, Size, Task, Theme};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use elec_core::calculations::{BandColor, OhmsLawMode, ResistorInput, Tolerance};
use elec_core::forms::{fields_for, FieldSpec, FieldValues};
use elec_core::settings::DEFAULT_SETTINGS_FILE;
use elec_core::{evaluate, CalcResult, CalculatorInput, CalculatorKind, CalculatorReport, HubSettings};

/// Width of the calculator menu in pixels
const MENU_WIDTH: f32 = 210.0;

/// Share of the remaining width given to the input panel
const INPUT_RATIO: f32 = 0.45;

/// Fields rendered as sliders instead of text inputs
pub const SLIDER_FIELDS: &[(CalculatorKind, &str)] = &[(CalculatorKind::Bill, "hours_per_day")];

fn main() -> iced::Result {
    init_logger();
    tracing::info!("starting Electrical Hub GUI");

    iced::application(App::new, App::update, App::view)
        .title("Electrical Hub")
        .theme(App::theme)
        .window_size(Size::new(1180.0, 720.0))
        .run()
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("elec_core=info,elec_gui=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .compact(),
        )
        .init();
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    SelectCalculator(CalculatorKind),

    // Numeric forms
    FieldChanged(&'static str, String),
    FieldSlid(&'static str, f64),

    // Resistor
    FirstBandSelected(BandColor),
    SecondBandSelected(BandColor),
    MultiplierSelected(BandColor),
    ToleranceSelected(Tolerance),

    // Ohm's law
    OhmsModeSelected(OhmsLawMode),

    // Troubleshooting
    GuideQueryChanged(String),

    // Actions
    Calculate,
    ResetForm,
    ToggleDarkMode,
}

// ============================================================================
// Application State
// ============================================================================

pub struct App {
    pub selection: CalculatorKind,

    /// Edited text keyed by (calculator, field key); parsed on Calculate
    field_text: HashMap<(CalculatorKind, &'static str), String>,

    pub resistor: ResistorInput,
    pub ohms_mode: OhmsLawMode,
    pub guide_query: String,

    pub report: Option<CalculatorReport>,
    pub error_message: Option<String>,

    pub settings: HubSettings,
    pub dark_mode: bool,
    pub status: String,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let (settings, status) = match HubSettings::load(Path::new(DEFAULT_SETTINGS_FILE)) {
            Ok(settings) => (settings, "Ready".to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring settings file");
                (HubSettings::default(), format!("Settings ignored: {}", e))
            }
        };
        (Self::with_settings(settings, status), Task::none())
    }

    fn with_settings(settings: HubSettings, status: String) -> Self {
        let mut field_text = HashMap::new();
        for kind in CalculatorKind::ALL {
            for spec in fields_for(kind) {
                field_text.insert((kind, spec.key), format_default(spec));
            }
        }

        Self {
            selection: CalculatorKind::Resistor,
            field_text,
            resistor: ResistorInput {
                tolerance: settings.default_tolerance,
                ..ResistorInput::default()
            },
            ohms_mode: OhmsLawMode::Dc,
            guide_query: String::new(),
            report: None,
            error_message: None,
            dark_mode: settings.dark_mode,
            settings,
            status,
        }
    }

    fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Current text of a form field
    pub fn field_text(&self, kind: CalculatorKind, key: &'static str) -> &str {
        self.field_text.get(&(kind, key)).map(String::as_str).unwrap_or("")
    }

    /// Whether a field applies to the current Ohm's law mode. DC asks for
    /// any two of V/I/R/P; AC asks for V, I and the power factor.
    pub fn shows_field(&self, kind: CalculatorKind, key: &str) -> bool {
        if kind != CalculatorKind::OhmsLaw {
            return true;
        }
        match key {
            "resistance_ohm" | "power_w" => !self.ohms_mode.is_ac(),
            "power_factor" => self.ohms_mode.is_ac(),
            _ => true,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectCalculator(kind) => {
                if kind != self.selection {
                    self.selection = kind;
                    self.report = None;
                    self.error_message = None;
                    self.status = kind.display_name().to_string();
                }
            }
            Message::FieldChanged(key, value) => {
                self.field_text.insert((self.selection, key), value);
            }
            Message::FieldSlid(key, value) => {
                self.field_text.insert((self.selection, key), value.to_string());
            }
            Message::FirstBandSelected(color) => self.resistor.first_band = color,
            Message::SecondBandSelected(color) => self.resistor.second_band = color,
            Message::MultiplierSelected(color) => self.resistor.multiplier_band = color,
            Message::ToleranceSelected(tolerance) => self.resistor.tolerance = tolerance,
            Message::OhmsModeSelected(mode) => {
                self.ohms_mode = mode;
                self.report = None;
                self.error_message = None;
            }
            Message::GuideQueryChanged(query) => self.guide_query = query,
            Message::Calculate => self.calculate(),
            Message::ResetForm => self.reset_form(),
            Message::ToggleDarkMode => self.dark_mode = !self.dark_mode,
        }
        Task::none()
    }

    fn calculate(&mut self) {
        let kind = self.selection;
        if !kind.is_calculator() {
            return;
        }

        let outcome = self.build_input(kind).and_then(|input| evaluate(&input, &self.settings));
        match outcome {
            Ok(report) => {
                self.status = format!("{} done", kind.display_name());
                self.error_message = None;
                self.report = Some(report);
            }
            Err(e) => {
                tracing::debug!(calculator = kind.slug(), code = e.error_code(), "showing calculation error");
                self.status = format!("Error: {}", e.error_code());
                self.error_message = Some(e.to_string());
                self.report = None;
            }
        }
    }

    fn build_input(&self, kind: CalculatorKind) -> CalcResult<CalculatorInput> {
        match kind {
            CalculatorKind::Resistor => Ok(CalculatorInput::Resistor(self.resistor)),
            _ => {
                let values = self.parse_fields(kind)?;
                CalculatorInput::from_form(kind, self.ohms_mode, &values)
            }
        }
    }

    /// Parse the visible fields. A blank Ohm's law field counts as unknown.
    fn parse_fields(&self, kind: CalculatorKind) -> CalcResult<FieldValues> {
        let mut values = FieldValues::new();
        for spec in fields_for(kind) {
            if !self.shows_field(kind, spec.key) {
                continue;
            }
            let text = self.field_text(kind, spec.key);
            if kind == CalculatorKind::OhmsLaw && text.trim().is_empty() {
                continue;
            }
            values.set(spec.key, spec.parse(text)?);
        }
        Ok(values)
    }

    fn reset_form(&mut self) {
        let kind = self.selection;
        for spec in fields_for(kind) {
            self.field_text.insert((kind, spec.key), format_default(spec));
        }
        match kind {
            CalculatorKind::Resistor => {
                self.resistor = ResistorInput {
                    tolerance: self.settings.default_tolerance,
                    ..ResistorInput::default()
                };
            }
            CalculatorKind::OhmsLaw => self.ohms_mode = OhmsLawMode::Dc,
            CalculatorKind::Troubleshooting => self.guide_query.clear(),
            _ => {}
        }
        self.report = None;
        self.error_message = None;
        self.status = "Form reset".to_string();
    }

    fn view(&self) -> Element<'_, Message> {
        let header = ui::toolbar::view_header(self.dark_mode);

        let body = row![
            ui::menu_panel::view_menu_panel(self.selection, MENU_WIDTH),
            ui::input_panel::view_input_panel(self, INPUT_RATIO),
            ui::results_panel::view_results_panel(self, INPUT_RATIO),
        ]
        .spacing(6)
        .height(Length::Fill);

        let content = column![
            header,
            rule::horizontal(1),
            body,
            ui::status_bar::view_status_bar(&self.settings.currency_symbol, &self.status),
        ]
        .spacing(6);

        container(content).padding(8).into()
    }
}

/// Default shown in a fresh form, e.g. "1000" or "1.5"
fn format_default(spec: &FieldSpec) -> String {
    spec.default.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_settings(HubSettings::default(), String::new())
    }

    #[test]
    fn test_defaults_calculate() {
        let mut app = app();
        app.update(Message::SelectCalculator(CalculatorKind::Bill));
        app.update(Message::Calculate);
        let report = app.report.as_ref().unwrap();
        assert_eq!(report.headline, "Estimated Monthly Bill = ₹1260.00");
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_unparsable_text_is_an_error() {
        let mut app = app();
        app.update(Message::SelectCalculator(CalculatorKind::Battery));
        app.update(Message::FieldChanged("load_w", "five hundred".to_string()));
        app.update(Message::Calculate);
        assert!(app.report.is_none());
        assert!(app.error_message.as_ref().unwrap().contains("must be a number"));
    }

    #[test]
    fn test_ohms_law_blank_fields_are_unknown() {
        let mut app = app();
        app.update(Message::SelectCalculator(CalculatorKind::OhmsLaw));
        app.update(Message::FieldChanged("voltage_v", "12".to_string()));
        app.update(Message::FieldChanged("current_a", String::new()));
        app.update(Message::FieldChanged("resistance_ohm", "4".to_string()));
        app.update(Message::Calculate);
        let report = app.report.as_ref().unwrap();
        assert_eq!(report.headline, "DC → V=12.00 V, I=3.0000 A, R=4.00 Ω, P=36.00 W");
        assert_eq!(report.chart.as_ref().map(Vec::len), Some(10));
    }

    #[test]
    fn test_ohms_law_ac_ignores_dc_fields() {
        let mut app = app();
        app.update(Message::SelectCalculator(CalculatorKind::OhmsLaw));
        app.update(Message::OhmsModeSelected(OhmsLawMode::AcSinglePhase));
        app.update(Message::FieldChanged("voltage_v", "230".to_string()));
        app.update(Message::FieldChanged("current_a", "5".to_string()));
        app.update(Message::FieldChanged("power_w", "garbage".to_string()));
        app.update(Message::FieldChanged("power_factor", "0.8".to_string()));
        app.update(Message::Calculate);
        let power = app.report.as_ref().unwrap().value("power_w").unwrap();
        assert!((power - 920.0).abs() < 1e-9);
    }

    #[test]
    fn test_insufficient_input_message() {
        let mut app = app();
        app.update(Message::SelectCalculator(CalculatorKind::OhmsLaw));
        app.update(Message::Calculate);
        assert!(app.error_message.as_ref().unwrap().starts_with("Insufficient or invalid input"));
    }

    #[test]
    fn test_slider_updates_text() {
        let mut app = app();
        app.update(Message::SelectCalculator(CalculatorKind::Bill));
        app.update(Message::FieldSlid("hours_per_day", 8.0));
        assert_eq!(app.field_text(CalculatorKind::Bill, "hours_per_day"), "8");
    }

    #[test]
    fn test_selection_clears_report_but_keeps_edits() {
        let mut app = app();
        app.update(Message::SelectCalculator(CalculatorKind::Motor));
        app.update(Message::FieldChanged("load_kw", "10".to_string()));
        app.update(Message::Calculate);
        assert!(app.report.is_some());

        app.update(Message::SelectCalculator(CalculatorKind::Pump));
        assert!(app.report.is_none());
        assert_eq!(app.field_text(CalculatorKind::Motor, "load_kw"), "10");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = app();
        app.update(Message::SelectCalculator(CalculatorKind::Wiring));
        app.update(Message::FieldChanged("supply_v", "110".to_string()));
        app.update(Message::ResetForm);
        assert_eq!(app.field_text(CalculatorKind::Wiring, "supply_v"), "230");
    }

    #[test]
    fn test_resistor_uses_settings_tolerance() {
        let settings = HubSettings {
            default_tolerance: Tolerance::Ten,
            ..Default::default()
        };
        let mut app = App::with_settings(settings, String::new());
        app.update(Message::FirstBandSelected(BandColor::Yellow));
        app.update(Message::SecondBandSelected(BandColor::Violet));
        app.update(Message::MultiplierSelected(BandColor::Red));
        app.update(Message::Calculate);
        assert_eq!(app.report.as_ref().unwrap().headline, "Resistance = 4.70 kΩ ±10");
    }
}
