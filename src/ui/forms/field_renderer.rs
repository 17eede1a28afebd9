//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a bordered single-line input
pub const FIELD_HEIGHT: u16 = 3;

/// Rows needed to draw a field and its optional error line
pub fn field_height(has_error: bool) -> u16 {
    if has_error {
        FIELD_HEIGHT + 1
    } else {
        FIELD_HEIGHT
    }
}

/// Draw a form field with its error message underneath, if any
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    mask_secrets: bool,
    error: Option<&str>,
) {
    let (input_area, error_area) = match error {
        Some(_) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(FIELD_HEIGHT), Constraint::Length(1)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        }
        None => (
            Rect {
                height: area.height.min(FIELD_HEIGHT),
                ..area
            },
            None,
        ),
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value(mask_secrets);
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), input_area);

    if let (Some(message), Some(error_area)) = (error, error_area) {
        draw_error_line(frame, error_area, message);
    }
}

/// Draw a single red error line
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: &str) {
    let line = Paragraph::new(Line::from(Span::styled(
        format!(" {message}"),
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(line, area);
}
