//! Input view for the troubleshooting guide: a symptom filter

use iced::widget::{column, text, Column};

use super::shared::labeled_input;
use crate::Message;

pub fn view(query: &str) -> Column<'_, Message> {
    column![
        text("Type part of a symptom to filter the guide.").size(10).color([0.5, 0.5, 0.5]),
        labeled_input("Symptom".to_string(), query, Message::GuideQueryChanged),
    ]
    .spacing(6)
}
