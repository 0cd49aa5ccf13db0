//! Status Bar (Bottom)
//!
//! Displays the active currency symbol and the latest status message.

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(currency_symbol: &'a str, status: &'a str) -> Element<'a, Message> {
    row![
        text(format!("Currency: {}", currency_symbol)).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
