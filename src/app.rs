//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AcceptedNotice, AppState, FocusTarget, Form, FormController, LogSubmitSink, SignupSchema,
    SubmitOutcome, SubmitSink,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance that logs accepted signups
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_sink(config, Box::new(LogSubmitSink))
    }

    /// Create an App with a custom submit sink
    pub fn with_sink(config: &TuiConfig, sink: Box<dyn SubmitSink>) -> Self {
        let schema = SignupSchema::new(config.show_knowledge());
        let form = FormController::new(schema, sink).with_initial_techs(config.initial_tech_rows());
        let mut state = AppState::new(form);
        state.mask_passwords = config.mask_passwords();

        Self { state, quit: false }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn is_action_key(key: &KeyEvent) -> bool {
        key.modifiers.contains(crate::platform::ACTION_MODIFIER)
            || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle notice dialog dismissal first (modal)
        if self.state.has_notice() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let form = &mut self.state.form;
        let focused = form.focused();

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Char('n') if Self::is_action_key(&key) => self.add_tech(),
            KeyCode::Char('d') if Self::is_action_key(&key) => {
                if !self.state.form.remove_focused_tech() {
                    self.state.status_message = Some("Focus a tech to remove it".to_string());
                }
            }
            // Enter on a button triggers it, elsewhere moves on
            KeyCode::Enter => match focused {
                Some(FocusTarget::SubmitButton) => self.submit(),
                Some(FocusTarget::AddTechButton) => self.add_tech(),
                _ => form.next_field(),
            },
            KeyCode::Char(c) if !Self::is_action_key(&key) => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Append pasted text to the focused input
    pub fn handle_paste(&mut self, text: &str) {
        if self.state.has_notice() {
            return;
        }
        let Some(FocusTarget::Field(field)) = self.state.form.focused() else {
            return;
        };
        let mut value = self
            .state
            .form
            .draft()
            .field(field)
            .map(|f| f.as_text().to_string())
            .unwrap_or_default();
        value.push_str(text.trim_end_matches(['\r', '\n']));
        self.state.form.update_field(field, value);
    }

    /// Append a tech row and move focus to its title
    fn add_tech(&mut self) {
        let id = self.state.form.add_tech_entry();
        self.state
            .form
            .focus(FocusTarget::Field(crate::state::DraftField::TechTitle(id)));
    }

    /// Run the schema and surface the outcome
    fn submit(&mut self) {
        let outcome = self.state.form.submit();
        if let Some(signup) = outcome.accepted() {
            self.state.notice = Some(AcceptedNotice::from(signup));
        }
        self.state.status_message = Some(match outcome {
            SubmitOutcome::Accepted(_) => "Signup accepted".to_string(),
            SubmitOutcome::Unrecorded { error, .. } => {
                format!("Signup accepted but could not be recorded: {error}")
            }
            SubmitOutcome::Rejected(count) => format!("Fix {count} error(s) and resubmit"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DraftField, FieldPath, MockSubmitSink, ValidationError};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn app_with_sink(sink: MockSubmitSink) -> App {
        App::with_sink(&TuiConfig::default(), Box::new(sink))
    }

    fn idle_app() -> App {
        let mut sink = MockSubmitSink::new();
        sink.expect_on_accepted().never();
        app_with_sink(sink)
    }

    /// Type a complete valid signup through the keyboard
    fn fill_by_keyboard(app: &mut App) {
        type_str(app, "linus torvalds");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(app, "Linus@Kernel.org");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(app, "penguin");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_str(app, "penguin");
        for title in ["C", "Git"] {
            app.handle_key(ctrl('n')).unwrap();
            type_str(app, title);
        }
    }

    mod keys {
        use super::*;

        #[test]
        fn test_should_quit_initially_false() {
            assert!(!idle_app().should_quit());
        }

        #[test]
        fn test_esc_quits() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_ctrl_c_quits() {
            let mut app = idle_app();
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_typing_fills_focused_field() {
            let mut app = idle_app();
            type_str(&mut app, "ada");
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.state.form.draft().name.as_text(), "ad");
        }

        #[test]
        fn test_enter_moves_to_next_field() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app
                .state
                .form
                .is_focused(FocusTarget::Field(DraftField::Email)));
        }

        #[test]
        fn test_ctrl_n_adds_tech_and_focuses_it() {
            let mut app = idle_app();
            app.handle_key(ctrl('n')).unwrap();
            let id = app.state.form.draft().techs.ids()[0];
            assert!(app
                .state
                .form
                .is_focused(FocusTarget::Field(DraftField::TechTitle(id))));
        }

        #[test]
        fn test_ctrl_d_removes_focused_tech() {
            let mut app = idle_app();
            app.handle_key(ctrl('n')).unwrap();
            app.handle_key(ctrl('n')).unwrap();
            let ids = app.state.form.draft().techs.ids().to_vec();
            app.handle_key(ctrl('d')).unwrap();
            assert_eq!(app.state.form.draft().techs.ids(), &ids[..1]);
        }

        #[test]
        fn test_ctrl_d_outside_tech_sets_status() {
            let mut app = idle_app();
            app.handle_key(ctrl('d')).unwrap();
            assert!(app.state.status_message.is_some());
        }

        #[test]
        fn test_enter_on_add_button() {
            let mut app = idle_app();
            app.state.form.focus(FocusTarget::AddTechButton);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.form.draft().techs.len(), 1);
        }

        #[test]
        fn test_paste_appends_to_focused_field() {
            let mut app = idle_app();
            type_str(&mut app, "ada ");
            app.handle_paste("lovelace\n");
            assert_eq!(app.state.form.draft().name.as_text(), "ada lovelace");
        }

        #[test]
        fn test_paste_into_number_field_keeps_digits() {
            let mut app = idle_app();
            app.handle_key(ctrl('n')).unwrap();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            app.handle_paste("4x2");
            let id = app.state.form.draft().techs.ids()[0];
            let knowledge = &app.state.form.draft().techs.get(id).unwrap().knowledge;
            assert_eq!(knowledge.as_text(), "42");
        }

        #[test]
        fn test_paste_on_button_is_ignored() {
            let mut app = idle_app();
            app.state.form.focus(FocusTarget::SubmitButton);
            app.handle_paste("junk");
            assert_eq!(app.state.form.draft().name.as_text(), "");
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn test_rejected_submit_shows_errors() {
            let mut app = idle_app();
            app.handle_key(ctrl('s')).unwrap();
            assert!(app
                .state
                .form
                .errors()
                .contains(FieldPath::Name, &ValidationError::Required));
            assert!(!app.state.has_notice());
            assert!(app
                .state
                .status_message
                .as_deref()
                .is_some_and(|m| m.starts_with("Fix 5 error(s)")));
        }

        #[test]
        fn test_accepted_submit_opens_notice() {
            let mut sink = MockSubmitSink::new();
            sink.expect_on_accepted()
                .withf(|s| s.name == "Linus Torvalds" && s.email == "linus@kernel.org")
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with_sink(sink);
            fill_by_keyboard(&mut app);

            app.state.form.focus(FocusTarget::SubmitButton);
            app.handle_key(key(KeyCode::Enter)).unwrap();

            let notice = app.state.notice.clone().unwrap();
            assert_eq!(notice.name, "Linus Torvalds");
            assert_eq!(notice.tech_count, 2);

            // Keys other than Enter/Esc are swallowed by the dialog
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert!(app.state.has_notice());
            assert_eq!(app.state.form.draft().name.as_text(), "");

            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(!app.state.has_notice());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_sink_failure_still_opens_notice() {
            let mut sink = MockSubmitSink::new();
            sink.expect_on_accepted()
                .returning(|_| Err(anyhow::anyhow!("disk full")));
            let mut app = app_with_sink(sink);
            fill_by_keyboard(&mut app);
            app.handle_key(ctrl('s')).unwrap();

            let notice = app.state.notice.clone().unwrap();
            assert_eq!(notice.email, "linus@kernel.org");
            assert_eq!(app.state.form.draft().name.as_text(), "");
            assert!(app
                .state
                .status_message
                .as_deref()
                .is_some_and(|m| m.contains("disk full")));
        }
    }
}
