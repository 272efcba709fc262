use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::ViewSnapshot,
    domain::weather::{condition_icon, format_card_date},
    ui::theme,
};

/// One selectable card per forecast day, valued under the active metric.
pub fn render(frame: &mut Frame, area: Rect, view: &ViewSnapshot) {
    let Some(payload) = view.payload else {
        return;
    };
    if payload.days.is_empty() {
        return;
    }

    let cards =
        Layout::horizontal(vec![Constraint::Ratio(1, payload.days.len() as u32); payload.days.len()])
            .split(area);

    for (idx, day) in payload.days.iter().enumerate() {
        let selected = idx == view.selected_day;
        let title = if idx == 0 {
            "Today".to_string()
        } else {
            format_card_date(day.date)
        };

        let border_style = if selected {
            Style::default().fg(theme::metric_color(view.metric))
        } else {
            Style::default().fg(theme::MUTED)
        };

        let summary = view
            .day_summaries
            .get(idx)
            .map(String::as_str)
            .unwrap_or_default();
        let lines = vec![
            Line::from(condition_icon(&day.condition)),
            Line::from(ratatui::text::Span::styled(
                view.metric.label(),
                Style::default().fg(theme::MUTED),
            )),
            Line::from(ratatui::text::Span::styled(
                summary.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];

        let card = Paragraph::new(lines).centered().block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );
        frame.render_widget(card, cards[idx]);
    }
}
