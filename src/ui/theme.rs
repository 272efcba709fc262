use ratatui::style::Color;

use crate::domain::weather::Metric;

/// Per-metric accent colors, carried over from the dashboard's original
/// palette.
#[must_use]
pub fn metric_color(metric: Metric) -> Color {
    match metric {
        Metric::Temperature => Color::Rgb(255, 87, 51),
        Metric::UvIndex => Color::Rgb(177, 156, 217),
        Metric::Humidity => Color::Rgb(0, 166, 181),
    }
}

pub const MUTED: Color = Color::DarkGray;
pub const ERROR: Color = Color::LightRed;
