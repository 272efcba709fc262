use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::ViewSnapshot,
    domain::weather::{condition_icon, format_header},
    ui::theme,
};

pub fn render(frame: &mut Frame, area: Rect, view: &ViewSnapshot) {
    let Some(payload) = view.payload else {
        let message = if view.fetching { "Loading..." } else { "" };
        let placeholder = Paragraph::new(message)
            .block(Block::default().borders(Borders::ALL).title("Current"));
        frame.render_widget(placeholder, area);
        return;
    };

    let location = &payload.location;
    let current = &payload.current;
    let title = if location.country.is_empty() {
        location.name.clone()
    } else {
        format!("{}, {}", location.name, location.country)
    };

    let lines = vec![
        Line::from(Span::styled(
            format_header(location.localtime),
            Style::default().fg(theme::MUTED),
        )),
        Line::default(),
        Line::from(vec![
            Span::raw(format!("{}  ", condition_icon(&current.condition))),
            Span::styled(
                format!("{}°C", current.temp_c.round() as i64),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(current.condition.as_str()),
        Line::default(),
        Line::from(vec![
            Span::styled("Humidity    ", Style::default().fg(theme::MUTED)),
            Span::raw(format!("{}%", current.humidity.round() as i64)),
        ]),
        Line::from(vec![
            Span::styled("Wind speed  ", Style::default().fg(theme::MUTED)),
            Span::raw(format!("{} km/h", current.wind_kph.round() as i64)),
        ]),
    ];

    let panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(panel, area);
}
