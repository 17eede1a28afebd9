//! Layout components (main area and status bar)

use crate::app::App;
use crate::state::FocusTarget;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into main content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar with key hints and the latest status message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_focus_hints(app.state.form.focused())),
        Style::default().fg(Color::White),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the focused target
fn get_focus_hints(focused: Option<FocusTarget>) -> String {
    match focused {
        Some(FocusTarget::AddTechButton) => "Enter:add tech  Tab:next  Esc:quit".to_string(),
        Some(FocusTarget::SubmitButton) => "Enter:submit  Tab:next  Esc:quit".to_string(),
        Some(target) if target.tech_id().is_some() => format!(
            "Tab:next  {}:remove  {}:submit  Esc:quit",
            crate::platform::REMOVE_TECH_SHORTCUT,
            crate::platform::SUBMIT_SHORTCUT
        ),
        _ => format!(
            "Tab:next  {}:add tech  {}:submit  Esc:quit",
            crate::platform::ADD_TECH_SHORTCUT,
            crate::platform::SUBMIT_SHORTCUT
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_status_line() {
        let (main, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(main.height, 23);
        assert_eq!(status.height, 1);
        assert_eq!(status.y, 23);
    }

    #[test]
    fn test_button_hints() {
        assert!(get_focus_hints(Some(FocusTarget::SubmitButton)).starts_with("Enter:submit"));
        assert!(get_focus_hints(Some(FocusTarget::AddTechButton)).starts_with("Enter:add"));
        assert!(get_focus_hints(None).contains("add tech"));
    }
}
