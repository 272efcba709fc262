pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::state::ViewSnapshot;

/// Renders one frame from a consistent snapshot of the app state. Pure:
/// everything drawn here is a function of the snapshot alone.
pub fn render(frame: &mut Frame, view: &ViewSnapshot) {
    let area = frame.area();

    if area.width < 50 || area.height < 18 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 50x18.")
            .block(Block::default().borders(Borders::ALL).title("weather-dash"));
        frame.render_widget(warning, area);
        return;
    }

    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(12),
        Constraint::Length(1),
    ])
    .split(area);

    widgets::search::render_input(frame, rows[0], view);

    let columns =
        Layout::horizontal([Constraint::Percentage(34), Constraint::Percentage(66)]).split(rows[1]);
    widgets::current::render(frame, columns[0], view);

    let right = Layout::vertical([Constraint::Min(8), Constraint::Length(7)]).split(columns[1]);
    widgets::chart::render(frame, right[0], view);
    widgets::forecast::render(frame, right[1], view);

    render_footer(frame, rows[2]);

    // Drawn last so it overlays the panels below the input box.
    widgets::search::render_overlay(frame, rows[1], view);
}

fn render_footer(frame: &mut Frame, area: ratatui::layout::Rect) {
    let hints = Paragraph::new(Line::from(
        "Enter commit · ↑/↓ suggestions · Tab metric · ←/→ day · Esc quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, area);
}
