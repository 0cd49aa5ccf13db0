//! Input view for the Ohm's law solver
//!
//! DC mode shows V, I, R and P (any two known, 0 or blank = unknown).
//! AC modes show V, I and the power factor.

use iced::widget::{column, radio, row, text, Column, Space};

use elec_core::calculations::{ohms_law, OhmsLawMode};
use elec_core::CalculatorKind;

use super::shared::labeled_input;
use crate::{App, Message};

pub fn view(app: &App) -> Column<'_, Message> {
    let modes = OhmsLawMode::ALL.iter().fold(row![].spacing(12), |modes, mode| {
        modes.push(
            radio(mode.display_name(), *mode, Some(app.ohms_mode), Message::OhmsModeSelected)
                .size(14)
                .text_size(11),
        )
    });

    let hint = if app.ohms_mode.is_ac() {
        "Enter voltage, current and power factor."
    } else {
        "Enter any two known values; leave 0 for unknown."
    };

    let mut form = column![
        modes,
        Space::new().height(6),
        text(hint).size(10).color([0.5, 0.5, 0.5]),
    ]
    .spacing(6);

    for spec in ohms_law::FIELDS {
        if app.shows_field(CalculatorKind::OhmsLaw, spec.key) {
            let key = spec.key;
            form = form.push(labeled_input(
                spec.label_with_unit(),
                app.field_text(CalculatorKind::OhmsLaw, key),
                move |s| Message::FieldChanged(key, s),
            ));
        }
    }

    form
}
