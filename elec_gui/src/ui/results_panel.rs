//! Results Panel (Right Side)
//!
//! Shows, in priority order:
//! - the error from the last calculate action
//! - the report (headline, field table, chart for Ohm's law)
//! - the filtered troubleshooting guide
//! - a hint when nothing has been calculated yet

use iced::widget::{column, container, row, scrollable, text, Canvas, Column, Space};
use iced::{Element, Length};

use elec_core::troubleshooting::lookup;
use elec_core::{CalculatorKind, CalculatorReport};

use super::shared::vi_chart::ViChart;
use crate::{App, Message};

/// Render the results panel
///
/// Uses the complementary ratio of the input panel (1 - input_ratio).
pub fn view_results_panel(app: &App, input_ratio: f32) -> Element<'_, Message> {
    let content: Column<'_, Message> = if let Some(ref error) = app.error_message {
        column![
            text("Error").size(14),
            Space::new().height(8),
            text(error).size(12).color([0.8, 0.2, 0.2]),
        ]
    } else if let Some(ref report) = app.report {
        view_report(report, &app.settings.currency_symbol)
    } else if app.selection == CalculatorKind::Troubleshooting {
        view_guide(&app.guide_query)
    } else {
        column![text(format!("Press \"{}\" to see results", app.selection.action_label()))
            .size(12)
            .color([0.5, 0.5, 0.5])]
    };

    let portion = ((1.0 - input_ratio) * 100.0) as u16;

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_report<'a>(report: &'a CalculatorReport, currency_symbol: &str) -> Column<'a, Message> {
    let mut content = column![
        text("Result").size(14),
        Space::new().height(8),
        text(&report.headline).size(14).color([0.2, 0.6, 0.2]),
        Space::new().height(12),
    ]
    .spacing(2);

    for field in &report.fields {
        content = content.push(row![
            text(&field.label).size(11).width(Length::Fixed(140.0)),
            text(field.quantity.display(currency_symbol)).size(11),
        ]);
    }

    if let Some(points) = &report.chart {
        let chart: Element<'_, Message> = Canvas::new(ViChart::new(points.clone()))
            .width(Length::Fill)
            .height(Length::Fixed(280.0))
            .into();
        content = content
            .push(Space::new().height(15))
            .push(text("Voltage vs Current").size(14))
            .push(Space::new().height(8))
            .push(chart);
    }

    content
}

fn view_guide(query: &str) -> Column<'static, Message> {
    let entries = lookup(query);
    let mut content = column![text("Troubleshooting Guide").size(14), Space::new().height(8)].spacing(4);

    if entries.is_empty() {
        content = content.push(text("No matching symptoms").size(11).color([0.5, 0.5, 0.5]));
    }
    for entry in entries {
        content = content.push(row![
            text(entry.symptom).size(11).width(Length::Fixed(160.0)),
            text(entry.checks).size(11),
        ]);
    }
    content
}
