//! Input view for the resistor color-code decoder

use iced::widget::{column, pick_list, row, text, Column};
use iced::{Alignment, Element, Length};

use elec_core::calculations::{BandColor, ResistorInput, Tolerance};

use super::shared::LABEL_WIDTH;
use crate::Message;

pub fn view(input: &ResistorInput) -> Column<'_, Message> {
    column![
        band_picker("1st Band", input.first_band, Message::FirstBandSelected),
        band_picker("2nd Band", input.second_band, Message::SecondBandSelected),
        band_picker("Multiplier", input.multiplier_band, Message::MultiplierSelected),
        row![
            text("Tolerance").size(11).width(Length::Fixed(LABEL_WIDTH)),
            pick_list(&Tolerance::ALL[..], Some(input.tolerance), Message::ToleranceSelected)
                .width(Length::Fixed(120.0))
                .text_size(11),
        ]
        .align_y(Alignment::Center),
        text("Value = (1st × 10 + 2nd) × 10^multiplier").size(10).color([0.5, 0.5, 0.5]),
    ]
    .spacing(6)
}

fn band_picker(
    label: &'static str,
    selected: BandColor,
    on_select: fn(BandColor) -> Message,
) -> Element<'static, Message> {
    row![
        text(label).size(11).width(Length::Fixed(LABEL_WIDTH)),
        pick_list(&BandColor::ALL[..], Some(selected), on_select)
            .width(Length::Fixed(120.0))
            .text_size(11),
        text(format!("digit {}", selected.digit())).size(10).color([0.5, 0.5, 0.5]),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}
