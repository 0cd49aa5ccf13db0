//! Shared UI components reusable across input/result modules
//!
//! Contains:
//! - `vi_chart` - Canvas drawing for the voltage-vs-current chart
//! - `labeled_input` - Label + text input row used by every form

use iced::widget::{row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::Message;

pub mod vi_chart;

/// Width of the label column in form rows
pub const LABEL_WIDTH: f32 = 160.0;

/// Label + text input row
pub fn labeled_input<'a>(
    label: String,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
