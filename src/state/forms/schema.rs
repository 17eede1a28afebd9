//! Signup validation schema
//!
//! Validation runs in two passes over the draft. The first pass holds one
//! independent rule per field, the second holds rules that compare several
//! fields. Every rule writes into the same [`ErrorSet`]; nothing short-circuits.
//! Normalization only happens when the set comes back empty.

use super::draft::SignupDraft;
use super::errors::{ErrorSet, FieldPath, ValidationError};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_TECHS: usize = 2;
pub const KNOWLEDGE_MIN: u8 = 1;
pub const KNOWLEDGE_MAX: u8 = 100;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([A-Z0-9_+-]+\.?)*[A-Z0-9_+-]@([A-Z0-9][A-Z0-9-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

/// A tech entry after validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptedTech {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge: Option<u8>,
}

/// Normalized value handed to the submit sink. Passwords are checked but
/// never leave the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptedSignup {
    pub name: String,
    pub email: String,
    pub techs: Vec<AcceptedTech>,
}

type Rule = fn(&SignupSchema, &SignupDraft, &mut ErrorSet);

const FIELD_RULES: &[Rule] = &[
    check_name,
    check_email,
    check_password,
    check_confirm_password,
    check_tech_count,
    check_tech_entries,
];

const CROSS_RULES: &[Rule] = &[check_passwords_match, check_unique_titles];

/// The declarative set of rules a draft must pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupSchema {
    /// Whether the knowledge column is part of the form
    pub with_knowledge: bool,
}

impl Default for SignupSchema {
    fn default() -> Self {
        Self {
            with_knowledge: true,
        }
    }
}

impl SignupSchema {
    pub fn new(with_knowledge: bool) -> Self {
        Self { with_knowledge }
    }

    /// Run every rule, returning the normalized value or all violations
    pub fn validate(&self, draft: &SignupDraft) -> Result<AcceptedSignup, ErrorSet> {
        let mut errors = ErrorSet::default();
        for rule in FIELD_RULES.iter().chain(CROSS_RULES) {
            rule(self, draft, &mut errors);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let techs = draft
            .techs
            .iter()
            .map(|(_, entry)| AcceptedTech {
                title: entry.title.as_text().trim().to_string(),
                knowledge: if self.with_knowledge {
                    parse_knowledge(entry.knowledge.as_text()).and_then(Result::ok)
                } else {
                    None
                },
            })
            .collect();

        Ok(AcceptedSignup {
            name: title_case(draft.name.as_text()),
            email: draft.email.as_text().to_lowercase(),
            techs,
        })
    }
}

/// Upper-case the first character of each whitespace-separated word
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn is_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// `None` when blank, `Some(Err)` when not an integer
fn parse_knowledge(raw: &str) -> Option<Result<u8, ValidationError>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let out_of_range = ValidationError::OutOfRange {
        min: KNOWLEDGE_MIN,
        max: KNOWLEDGE_MAX,
    };
    let value = match raw.parse::<u32>() {
        Ok(v) => v,
        // Digits that overflow are still a number, just a large one
        Err(_) if raw.chars().all(|c| c.is_ascii_digit()) => return Some(Err(out_of_range)),
        Err(_) => return Some(Err(ValidationError::InvalidFormat)),
    };
    match u8::try_from(value) {
        Ok(v) if (KNOWLEDGE_MIN..=KNOWLEDGE_MAX).contains(&v) => Some(Ok(v)),
        _ => Some(Err(out_of_range)),
    }
}

fn check_name(_: &SignupSchema, draft: &SignupDraft, errors: &mut ErrorSet) {
    if draft.name.as_text().trim().is_empty() {
        errors.push(FieldPath::Name, ValidationError::Required);
    }
}

fn check_email(_: &SignupSchema, draft: &SignupDraft, errors: &mut ErrorSet) {
    let email = draft.email.as_text();
    if email.is_empty() {
        errors.push(FieldPath::Email, ValidationError::Required);
    } else if !is_email(email) {
        errors.push(FieldPath::Email, ValidationError::InvalidFormat);
    }
}

fn check_min_len(value: &str, path: FieldPath, errors: &mut ErrorSet) {
    if value.chars().count() < MIN_PASSWORD_LEN {
        errors.push(
            path,
            ValidationError::TooShort {
                min: MIN_PASSWORD_LEN,
            },
        );
    }
}

fn check_password(_: &SignupSchema, draft: &SignupDraft, errors: &mut ErrorSet) {
    check_min_len(draft.password.as_text(), FieldPath::Password, errors);
}

fn check_confirm_password(_: &SignupSchema, draft: &SignupDraft, errors: &mut ErrorSet) {
    check_min_len(
        draft.confirm_password.as_text(),
        FieldPath::ConfirmPassword,
        errors,
    );
}

fn check_tech_count(_: &SignupSchema, draft: &SignupDraft, errors: &mut ErrorSet) {
    if draft.techs.len() < MIN_TECHS {
        errors.push(FieldPath::Techs, ValidationError::TooFew { min: MIN_TECHS });
    }
}

fn check_tech_entries(schema: &SignupSchema, draft: &SignupDraft, errors: &mut ErrorSet) {
    for (index, (_, entry)) in draft.techs.iter().enumerate() {
        if entry.title.as_text().trim().is_empty() {
            errors.push(FieldPath::TechTitle(index), ValidationError::Required);
        }
        if !schema.with_knowledge {
            continue;
        }
        if let Some(Err(error)) = parse_knowledge(entry.knowledge.as_text()) {
            errors.push(FieldPath::TechKnowledge(index), error);
        }
    }
}

fn check_passwords_match(_: &SignupSchema, draft: &SignupDraft, errors: &mut ErrorSet) {
    if draft.password.as_text() != draft.confirm_password.as_text() {
        errors.push(FieldPath::ConfirmPassword, ValidationError::Mismatch);
    }
}

fn check_unique_titles(_: &SignupSchema, draft: &SignupDraft, errors: &mut ErrorSet) {
    let mut seen = HashSet::new();
    let has_duplicate = draft
        .techs
        .iter()
        .map(|(_, entry)| entry.title.as_text().trim())
        .filter(|title| !title.is_empty())
        .any(|title| !seen.insert(title));
    if has_duplicate {
        errors.push(FieldPath::Techs, ValidationError::DuplicateTitle);
    }
}
