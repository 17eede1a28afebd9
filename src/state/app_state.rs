//! Application state definitions

use super::forms::{AcceptedSignup, FormController};

/// Summary shown in the dialog after an accepted submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedNotice {
    pub name: String,
    pub email: String,
    pub tech_count: usize,
}

impl From<&AcceptedSignup> for AcceptedNotice {
    fn from(signup: &AcceptedSignup) -> Self {
        Self {
            name: signup.name.clone(),
            email: signup.email.clone(),
            tech_count: signup.techs.len(),
        }
    }
}

impl AcceptedNotice {
    pub fn message(&self) -> String {
        format!(
            "Welcome, {}!\n{}\n{} tech(s) registered.",
            self.name, self.email, self.tech_count
        )
    }
}

/// Main application state
pub struct AppState {
    pub form: FormController,
    /// Dialog shown after an accepted submit, dismissed with Enter/Esc
    pub notice: Option<AcceptedNotice>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    pub mask_passwords: bool,
}

impl AppState {
    pub fn new(form: FormController) -> Self {
        Self {
            form,
            notice: None,
            status_message: None,
            mask_passwords: true,
        }
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{AcceptedTech, LogSubmitSink, SignupSchema};

    #[test]
    fn test_notice_from_signup() {
        let signup = AcceptedSignup {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            techs: vec![
                AcceptedTech {
                    title: "React".to_string(),
                    knowledge: None,
                },
                AcceptedTech {
                    title: "Vue".to_string(),
                    knowledge: Some(10),
                },
            ],
        };
        let notice = AcceptedNotice::from(&signup);
        assert_eq!(notice.tech_count, 2);
        assert_eq!(
            notice.message(),
            "Welcome, Ada Lovelace!\nada@example.com\n2 tech(s) registered."
        );
    }

    #[test]
    fn test_dismiss_notice() {
        let form = FormController::new(SignupSchema::default(), Box::new(LogSubmitSink));
        let mut state = AppState::new(form);
        assert!(!state.has_notice());
        state.notice = Some(AcceptedNotice {
            name: "A".to_string(),
            email: "a@b.io".to_string(),
            tech_count: 2,
        });
        assert!(state.has_notice());
        state.dismiss_notice();
        assert!(!state.has_notice());
    }
}
