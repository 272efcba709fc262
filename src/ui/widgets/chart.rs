use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Tabs},
};

use crate::{
    app::state::ViewSnapshot,
    domain::{series::TARGET_HOURS, weather::Metric},
    ui::theme,
};

pub fn render(frame: &mut Frame, area: Rect, view: &ViewSnapshot) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(4),
    ])
    .split(inner);

    render_metric_tabs(frame, rows[0], view);

    let value = Paragraph::new(Line::from(view.current_value.as_str())).style(
        Style::default()
            .fg(theme::metric_color(view.metric))
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(value, rows[1]);

    render_series(frame, rows[2], view);
}

fn render_metric_tabs(frame: &mut Frame, area: Rect, view: &ViewSnapshot) {
    let tabs = Tabs::new(Metric::ALL.iter().map(|metric| metric.label()))
        .select(view.metric.index())
        .style(Style::default().fg(theme::MUTED))
        .highlight_style(
            Style::default()
                .fg(theme::metric_color(view.metric))
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_series(frame: &mut Frame, area: Rect, view: &ViewSnapshot) {
    if view.series.len() < 2 {
        let message = if view.payload.is_some() {
            "Not enough hourly samples to chart"
        } else {
            ""
        };
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(theme::MUTED)),
            area,
        );
        return;
    }

    let points = view
        .series
        .iter()
        .map(|point| (point.slot as f64, point.value))
        .collect::<Vec<_>>();

    let (floor, ceiling) = value_bounds(&points);
    let color = theme::metric_color(view.metric);
    let dataset = Dataset::default()
        .name(view.metric.label())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .bounds([0.0, (TARGET_HOURS.len() - 1) as f64])
                .labels(["6 AM", "12 PM", "6 PM", "12 AM"])
                .style(Style::default().fg(theme::MUTED)),
        )
        .y_axis(
            Axis::default()
                .bounds([floor, ceiling])
                .labels([
                    format!("{floor:.0}"),
                    format!("{:.0}", (floor + ceiling) / 2.0),
                    format!("{ceiling:.0}"),
                ])
                .style(Style::default().fg(theme::MUTED)),
        );
    frame.render_widget(chart, area);
}

/// Axis bounds anchored at zero, the way the dashboard always charted, with
/// headroom above the data and room below when values go negative.
fn value_bounds(points: &[(f64, f64)]) -> (f64, f64) {
    let max = points.iter().map(|(_, v)| *v).fold(f64::MIN, f64::max);
    let min = points.iter().map(|(_, v)| *v).fold(f64::MAX, f64::min);

    let ceiling = (max.max(0.0) * 1.2).ceil().max(1.0);
    let floor = if min < 0.0 { (min * 1.2).floor() } else { 0.0 };
    (floor, ceiling)
}
