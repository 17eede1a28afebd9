//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (main_area, status_area) = layout::create_layout(area);

    forms::draw_signup(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Notice overlay goes on top of everything else
    if let Some(notice) = &app.state.notice {
        components::render_notice_dialog(frame, &notice.message());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::state::{AcceptedNotice, DraftField, FocusTarget};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app(config: &TuiConfig) -> App {
        App::new(config)
    }

    #[test]
    fn test_renders_labels_and_buttons() {
        let screen = render(&app(&TuiConfig::default()), 100, 40);
        for text in [
            "Sign up",
            "Name",
            "E-mail",
            "Confirm password",
            "Techs (0)",
            "Add tech",
            "Submit",
        ] {
            assert!(screen.contains(text), "missing {text:?}");
        }
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = app(&TuiConfig::default());
        app.state.form.update_field(DraftField::Password, "hunter2");
        let screen = render(&app, 100, 40);
        assert!(!screen.contains("hunter2"));
        assert!(screen.contains("•••••••"));
    }

    #[test]
    fn test_password_unmasked_by_config() {
        let config = TuiConfig {
            mask_passwords: Some(false),
            ..Default::default()
        };
        let mut app = app(&config);
        app.state.form.update_field(DraftField::Password, "hunter2");
        assert!(render(&app, 100, 40).contains("hunter2"));
    }

    #[test]
    fn test_errors_render_inline() {
        let mut app = app(&TuiConfig::default());
        app.state.form.submit();
        let screen = render(&app, 100, 40);
        assert!(screen.contains("This field is required"));
        assert!(screen.contains("Must be at least 6 characters"));
        assert!(screen.contains("Add at least 2 items"));
    }

    #[test]
    fn test_tech_rows_render_with_knowledge() {
        let config = TuiConfig {
            initial_tech_rows: Some(2),
            ..Default::default()
        };
        let mut app = app(&config);
        let id = app.state.form.draft().techs.ids()[1];
        app.state.form.update_field(DraftField::TechTitle(id), "Svelte");
        app.state
            .form
            .focus(FocusTarget::Field(DraftField::TechTitle(id)));

        let screen = render(&app, 100, 40);
        assert!(screen.contains("Tech #1"));
        assert!(screen.contains("Tech #2"));
        assert!(screen.contains("Svelte"));
        assert!(screen.contains("Knowledge (1-100)"));
    }

    #[test]
    fn test_knowledge_hidden_by_config() {
        let config = TuiConfig {
            initial_tech_rows: Some(1),
            show_knowledge: Some(false),
            ..Default::default()
        };
        let screen = render(&app(&config), 100, 40);
        assert!(screen.contains("Tech #1"));
        assert!(!screen.contains("Knowledge"));
    }

    #[test]
    fn test_notice_dialog_overlays_form() {
        let mut app = app(&TuiConfig::default());
        app.state.notice = Some(AcceptedNotice {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            tech_count: 2,
        });
        let screen = render(&app, 100, 40);
        assert!(screen.contains("Signup accepted"));
        assert!(screen.contains("Welcome, Ada Lovelace!"));
    }

    #[test]
    fn test_notice_with_unbreakable_name() {
        let mut app = app(&TuiConfig::default());
        app.state.notice = Some(AcceptedNotice {
            name: "A".repeat(65_530),
            email: "a@example.com".to_string(),
            tech_count: 2,
        });
        let screen = render(&app, 100, 40);
        assert!(screen.contains("Signup accepted"));
        assert!(screen.contains("a@example.com"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let config = TuiConfig {
            initial_tech_rows: Some(5),
            ..Default::default()
        };
        let mut app = app(&config);
        app.state.form.submit();
        render(&app, 30, 10);
    }
}
