//! Generic numeric form
//!
//! Builds one row per field spec of the selected calculator. Fields listed
//! in `SLIDER_FIELDS` get a slider next to their text value.

use iced::widget::{column, row, slider, text, Column};
use iced::{Alignment, Element, Length};

use elec_core::forms::{fields_for, FieldSpec};
use elec_core::CalculatorKind;

use super::shared::{labeled_input, LABEL_WIDTH};
use crate::{App, Message, SLIDER_FIELDS};

pub fn view(app: &App, kind: CalculatorKind) -> Column<'_, Message> {
    let mut form = column![].spacing(6);

    for spec in fields_for(kind) {
        let key = spec.key;
        let value = app.field_text(kind, key);

        let field = if SLIDER_FIELDS.contains(&(kind, key)) {
            slider_row(spec, value)
        } else {
            labeled_input(spec.label_with_unit(), value, move |s| Message::FieldChanged(key, s))
        };
        form = form.push(field);
    }

    form
}

fn slider_row<'a>(spec: &'static FieldSpec, value: &'a str) -> Element<'a, Message> {
    let min = spec.min.unwrap_or(0.0);
    let max = spec.max.unwrap_or(min + 100.0);
    let current = value.trim().parse::<f64>().unwrap_or(spec.default).clamp(min, max);
    let key = spec.key;

    row![
        text(spec.label_with_unit()).size(11).width(Length::Fixed(LABEL_WIDTH)),
        slider(min..=max, current, move |v| Message::FieldSlid(key, v))
            .step(spec.step)
            .width(Length::Fill),
        text(value).size(11).width(Length::Fixed(40.0)),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}
