//! Form controller: owns the draft, the error set and focus

use super::draft::{DraftField, SignupDraft, TechId};
use super::errors::ErrorSet;
use super::field::FormField;
use super::schema::SignupSchema;
use super::submit::{SubmitOutcome, SubmitSink};

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Anything that can hold focus on the signup screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(DraftField),
    AddTechButton,
    SubmitButton,
}

/// Owns the signup draft and runs the schema on submit
pub struct FormController {
    draft: SignupDraft,
    errors: ErrorSet,
    schema: SignupSchema,
    sink: Box<dyn SubmitSink>,
    active_field_index: usize,
    initial_tech_rows: usize,
}

impl FormController {
    pub fn new(schema: SignupSchema, sink: Box<dyn SubmitSink>) -> Self {
        Self {
            draft: SignupDraft::new(),
            errors: ErrorSet::default(),
            schema,
            sink,
            active_field_index: 0,
            initial_tech_rows: 0,
        }
    }

    /// Mount the form with `rows` empty tech entries
    pub fn with_initial_techs(mut self, rows: usize) -> Self {
        self.initial_tech_rows = rows;
        for _ in 0..rows {
            self.draft.techs.push();
        }
        self
    }

    pub fn draft(&self) -> &SignupDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn with_knowledge(&self) -> bool {
        self.schema.with_knowledge
    }

    /// Write an uncommitted value. Unknown tech identities are ignored.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        match self.draft.field_mut(field) {
            Some(f) => {
                f.set_text(value);
                tracing::debug!("Updated field {}", f.name);
            }
            None => tracing::debug!("Ignoring update for missing field {field:?}"),
        }
    }

    /// Append an empty tech entry and return its identity
    pub fn add_tech_entry(&mut self) -> TechId {
        let id = self.draft.techs.push();
        tracing::debug!("Added tech entry {id} ({} total)", self.draft.techs.len());
        id
    }

    /// Remove a tech entry by identity; no-op when it does not exist
    pub fn remove_tech_entry(&mut self, id: TechId) {
        let focused = self.focused();
        let Some(index) = self.draft.techs.remove(id) else {
            tracing::debug!("Tech entry {id} not found, nothing to remove");
            return;
        };
        self.errors.remove_tech_index(index);
        tracing::debug!("Removed tech entry {id} at position {index}");

        // Keep focus on the same target when it still exists
        let targets = self.focus_targets();
        self.active_field_index = match focused {
            Some(target) if target.tech_id() != Some(id) => targets
                .iter()
                .position(|t| *t == target)
                .unwrap_or(0),
            _ => self.active_field_index.min(targets.len() - 1),
        };
    }

    /// Remove the tech entry that currently holds focus
    pub fn remove_focused_tech(&mut self) -> bool {
        match self.focused().and_then(|t| t.tech_id()) {
            Some(id) => {
                self.remove_tech_entry(id);
                true
            }
            None => false,
        }
    }

    /// Validate the draft. Accepted drafts go to the sink and the form resets.
    pub fn submit(&mut self) -> SubmitOutcome {
        match self.schema.validate(&self.draft) {
            Ok(accepted) => {
                self.errors.clear();
                self.reset_draft();
                tracing::info!("Submit accepted for {}", accepted.email);
                match self.sink.on_accepted(&accepted) {
                    Ok(()) => SubmitOutcome::Accepted(accepted),
                    Err(e) => {
                        tracing::warn!("Submit sink failed: {e:#}");
                        SubmitOutcome::Unrecorded {
                            signup: accepted,
                            error: e.to_string(),
                        }
                    }
                }
            }
            Err(errors) => {
                tracing::warn!("Submit rejected with {} error(s)", errors.len());
                for error in errors.iter() {
                    tracing::debug!("  {error}");
                }
                let count = errors.len();
                self.errors = errors;
                SubmitOutcome::Rejected(count)
            }
        }
    }

    fn reset_draft(&mut self) {
        self.draft = SignupDraft::new();
        for _ in 0..self.initial_tech_rows {
            self.draft.techs.push();
        }
        self.active_field_index = 0;
    }

    /// Ordered focus targets: scalar fields, tech rows, then the buttons
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        let mut targets = vec![
            FocusTarget::Field(DraftField::Name),
            FocusTarget::Field(DraftField::Email),
            FocusTarget::Field(DraftField::Password),
            FocusTarget::Field(DraftField::ConfirmPassword),
        ];
        for id in self.draft.techs.ids() {
            targets.push(FocusTarget::Field(DraftField::TechTitle(*id)));
            if self.schema.with_knowledge {
                targets.push(FocusTarget::Field(DraftField::TechKnowledge(*id)));
            }
        }
        targets.push(FocusTarget::AddTechButton);
        targets.push(FocusTarget::SubmitButton);
        targets
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus_targets().get(self.active_field_index).copied()
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focused() == Some(target)
    }

    pub fn focus(&mut self, target: FocusTarget) {
        if let Some(index) = self.focus_targets().iter().position(|t| *t == target) {
            self.active_field_index = index;
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focused()? {
            FocusTarget::Field(field) => self.draft.field_mut(field),
            _ => None,
        }
    }

    /// Type a character into the focused input
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field_mut() {
            field.push_char(c);
        }
    }

    /// Delete the last character of the focused input
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.pop_char();
        }
    }
}

impl FocusTarget {
    pub fn tech_id(&self) -> Option<TechId> {
        match self {
            FocusTarget::Field(field) => field.tech_id(),
            _ => None,
        }
    }
}

impl Form for FormController {
    fn field_count(&self) -> usize {
        self.focus_targets().len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}
