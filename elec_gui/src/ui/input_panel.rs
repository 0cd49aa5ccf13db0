//! Input Panel (Center)
//!
//! Dispatches to the appropriate input form based on the selected
//! calculator:
//! - Resistor -> input_resistor
//! - Ohm's law -> input_ohms_law
//! - Troubleshooting -> input_troubleshooting
//! - everything else -> input_numeric
//!
//! Calculate and Reset buttons sit below every calculator form.

use iced::widget::{button, column, container, row, scrollable, text, Column, Space};
use iced::{Element, Length, Padding};

use elec_core::CalculatorKind;

use super::{input_numeric, input_ohms_law, input_resistor, input_troubleshooting};
use crate::{App, Message};

/// Render the input panel for the current selection
///
/// The `ratio` parameter determines the relative size of this panel vs the
/// results panel.
pub fn view_input_panel(app: &App, ratio: f32) -> Element<'_, Message> {
    let kind = app.selection;

    let form: Column<'_, Message> = match kind {
        CalculatorKind::Resistor => input_resistor::view(&app.resistor),
        CalculatorKind::OhmsLaw => input_ohms_law::view(app),
        CalculatorKind::Troubleshooting => input_troubleshooting::view(&app.guide_query),
        _ => input_numeric::view(app, kind),
    };

    let mut panel = column![text(kind.display_name()).size(16), Space::new().height(10), form];

    if kind.is_calculator() {
        panel = panel.push(Space::new().height(15)).push(
            row![
                button(text(kind.action_label()).size(12))
                    .on_press(Message::Calculate)
                    .padding(Padding::from([6, 12]))
                    .style(button::primary),
                button(text("Reset").size(12))
                    .on_press(Message::ResetForm)
                    .padding(Padding::from([6, 12]))
                    .style(button::secondary),
            ]
            .spacing(6),
        );
    }

    // Scale to 0-100 for better precision
    let portion = (ratio * 100.0) as u16;

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
