use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::{app::state::ViewSnapshot, ui::theme};

pub fn render_input(frame: &mut Frame, area: Rect, view: &ViewSnapshot) {
    let query: Span = if view.query.is_empty() {
        Span::styled("Enter city name", Style::default().fg(theme::MUTED))
    } else {
        Span::styled(
            view.query,
            Style::default().add_modifier(Modifier::BOLD),
        )
    };

    let input = Paragraph::new(Line::from(vec![query, Span::raw("▏")]))
        .block(Block::default().borders(Borders::ALL).title("Your city"));
    frame.render_widget(input, area);
}

/// Suggestion list or error line, drawn over the top of the body panels so
/// it reads as a dropdown under the input box.
pub fn render_overlay(frame: &mut Frame, body: Rect, view: &ViewSnapshot) {
    if let Some(error) = view.error {
        let width = (error.chars().count() as u16 + 2).min(body.width);
        let area = Rect {
            x: body.x,
            y: body.y,
            width,
            height: 1,
        };
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(Line::from(error)).style(Style::default().fg(theme::ERROR)),
            area,
        );
        return;
    }

    if view.suggestions.is_empty() {
        return;
    }

    let height = (view.suggestions.len() as u16 + 2).min(body.height);
    let width = view
        .suggestions
        .iter()
        .map(|s| s.display().chars().count() as u16 + 4)
        .max()
        .unwrap_or(20)
        .min(body.width);
    let area = Rect {
        x: body.x,
        y: body.y,
        width,
        height,
    };

    let items = view
        .suggestions
        .iter()
        .map(|suggestion| ListItem::new(suggestion.display()))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("› ");

    let mut list_state = ListState::default().with_selected(view.highlighted);
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}
