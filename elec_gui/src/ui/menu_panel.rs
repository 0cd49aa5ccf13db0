//! Menu Panel (Left Sidebar)
//!
//! Lists every calculator in menu order; the selected entry is
//! highlighted. The troubleshooting guide sits below a rule since it
//! computes nothing.

use iced::widget::{button, column, container, rule, scrollable, text, Column};
use iced::{Element, Length, Padding};

use elec_core::CalculatorKind;

use crate::Message;

/// Render the calculator menu
pub fn view_menu_panel(selected: CalculatorKind, width: f32) -> Element<'static, Message> {
    let mut entries: Column<'static, Message> = column![
        text("Calculators").size(12).color([0.5, 0.5, 0.5]),
    ]
    .spacing(2);

    for kind in CalculatorKind::ALL {
        if !kind.is_calculator() {
            entries = entries.push(rule::horizontal(1));
        }

        let style = if kind == selected {
            button::primary
        } else {
            button::text
        };
        entries = entries.push(
            button(text(kind.display_name()).size(11))
                .on_press(Message::SelectCalculator(kind))
                .padding(Padding::from([4, 8]))
                .style(style)
                .width(Length::Fill),
        );
    }

    container(scrollable(entries.padding(4)))
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(4)
        .into()
}
