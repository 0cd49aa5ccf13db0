//! Canvas drawing for the Ohm's law voltage-vs-current chart
//!
//! Plots the sampled (I, V) points as a polyline with markers. The axes
//! start at zero and end at the largest sample, so the line always runs
//! corner to corner for a pure resistance.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use elec_core::CurvePoint;

use crate::Message;

/// Canvas program for the V-I chart
pub struct ViChart {
    points: Vec<CurvePoint>,
}

impl ViChart {
    pub fn new(points: Vec<CurvePoint>) -> Self {
        Self { points }
    }

    fn max_current(&self) -> f64 {
        self.points.iter().map(|p| p.current_a).fold(0.0, f64::max)
    }

    fn max_voltage(&self) -> f64 {
        self.points.iter().map(|p| p.voltage_v).fold(0.0, f64::max)
    }

    /// Map a sample into the plot rectangle (y grows downward)
    fn to_screen(&self, point: &CurvePoint, plot: Rectangle) -> Point {
        let max_i = self.max_current();
        let max_v = self.max_voltage();
        let fx = if max_i > 0.0 { point.current_a / max_i } else { 0.0 };
        let fy = if max_v > 0.0 { point.voltage_v / max_v } else { 0.0 };
        Point::new(
            plot.x + fx as f32 * plot.width,
            plot.y + plot.height - fy as f32 * plot.height,
        )
    }

    fn draw_axes(&self, frame: &mut Frame, plot: Rectangle, color: Color) {
        let origin = Point::new(plot.x, plot.y + plot.height);
        let axes = Path::new(|builder| {
            builder.move_to(Point::new(plot.x, plot.y));
            builder.line_to(origin);
            builder.line_to(Point::new(plot.x + plot.width, origin.y));
        });
        frame.stroke(&axes, Stroke::default().with_color(color).with_width(1.0));

        frame.fill_text(Text {
            content: "0".to_string(),
            position: Point::new(plot.x - 12.0, origin.y - 4.0),
            color,
            size: iced::Pixels(9.0),
            ..Text::default()
        });
        frame.fill_text(Text {
            content: format!("{:.2} V", self.max_voltage()),
            position: Point::new(plot.x + 4.0, plot.y - 12.0),
            color,
            size: iced::Pixels(9.0),
            ..Text::default()
        });
        frame.fill_text(Text {
            content: format!("{:.4} A", self.max_current()),
            position: Point::new(plot.x + plot.width, origin.y + 6.0),
            color,
            size: iced::Pixels(9.0),
            align_x: iced::alignment::Horizontal::Right.into(),
            ..Text::default()
        });
        frame.fill_text(Text {
            content: "Current (A)".to_string(),
            position: Point::new(plot.x + plot.width / 2.0, origin.y + 6.0),
            color,
            size: iced::Pixels(9.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });
    }

    fn draw_series(&self, frame: &mut Frame, plot: Rectangle, color: Color) {
        let screen: Vec<Point> = self.points.iter().map(|p| self.to_screen(p, plot)).collect();

        if let Some((first, rest)) = screen.split_first() {
            let line = Path::new(|builder| {
                builder.move_to(*first);
                for point in rest {
                    builder.line_to(*point);
                }
            });
            frame.stroke(&line, Stroke::default().with_color(color).with_width(2.0));
        }

        for point in &screen {
            frame.fill(&Path::circle(*point, 3.0), color);
        }
    }
}

impl canvas::Program<Message> for ViChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let margin = 24.0;
        let plot = Rectangle {
            x: margin,
            y: margin,
            width: (bounds.width - 2.0 * margin).max(1.0),
            height: (bounds.height - 2.0 * margin).max(1.0),
        };

        let palette = theme.palette();
        self.draw_axes(&mut frame, plot, palette.text);
        self.draw_series(&mut frame, plot, palette.primary);

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> ViChart {
        ViChart::new(
            (1..=10)
                .map(|i| CurvePoint {
                    current_a: 0.2 * i as f64,
                    voltage_v: 1.0 * i as f64,
                })
                .collect(),
        )
    }

    #[test]
    fn test_extents() {
        let chart = chart();
        assert!((chart.max_current() - 2.0).abs() < 1e-12);
        assert!((chart.max_voltage() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_last_point_is_top_right() {
        let chart = chart();
        let plot = Rectangle {
            x: 10.0,
            y: 10.0,
            width: 100.0,
            height: 50.0,
        };
        let top_right = chart.to_screen(&chart.points[9], plot);
        assert!((top_right.x - 110.0).abs() < 1e-3);
        assert!((top_right.y - 10.0).abs() < 1e-3);
    }
}
