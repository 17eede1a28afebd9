//! Validation errors and the per-submit error set

use std::fmt;
use thiserror::Error;

/// Why a field was rejected. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Invalid format")]
    InvalidFormat,
    #[error("Must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Add at least {min} items")]
    TooFew { min: usize },
    #[error("Must be between {min} and {max}")]
    OutOfRange { min: u8, max: u8 },
    #[error("Each title must be unique")]
    DuplicateTitle,
    #[error("Passwords do not match")]
    Mismatch,
}

/// Path of a value inside the draft, using positional indexes for the tech list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Techs,
    TechTitle(usize),
    TechKnowledge(usize),
}

impl FieldPath {
    fn tech_index(&self) -> Option<usize> {
        match self {
            FieldPath::TechTitle(i) | FieldPath::TechKnowledge(i) => Some(*i),
            _ => None,
        }
    }

    fn with_tech_index(self, index: usize) -> Self {
        match self {
            FieldPath::TechTitle(_) => FieldPath::TechTitle(index),
            FieldPath::TechKnowledge(_) => FieldPath::TechKnowledge(index),
            other => other,
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Name => write!(f, "name"),
            FieldPath::Email => write!(f, "email"),
            FieldPath::Password => write!(f, "password"),
            FieldPath::ConfirmPassword => write!(f, "confirmPassword"),
            FieldPath::Techs => write!(f, "techs"),
            FieldPath::TechTitle(i) => write!(f, "techs.{i}.title"),
            FieldPath::TechKnowledge(i) => write!(f, "techs.{i}.knowledge"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: FieldPath,
    pub error: ValidationError,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.error)
    }
}

/// Ordered collection of every violation found by one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    errors: Vec<FieldError>,
}

impl ErrorSet {
    pub fn push(&mut self, path: FieldPath, error: ValidationError) {
        self.errors.push(FieldError { path, error });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Errors attached to one path, in the order they were found
    pub fn for_path(&self, path: FieldPath) -> impl Iterator<Item = &ValidationError> + '_ {
        self.errors
            .iter()
            .filter(move |e| e.path == path)
            .map(|e| &e.error)
    }

    #[cfg(test)]
    pub fn contains(&self, path: FieldPath, error: &ValidationError) -> bool {
        self.for_path(path).any(|e| e == error)
    }

    /// All messages for a path joined into one line, if any
    pub fn message_for(&self, path: FieldPath) -> Option<String> {
        let messages: Vec<String> = self.for_path(path).map(|e| e.to_string()).collect();
        if messages.is_empty() {
            None
        } else {
            Some(messages.join(". "))
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Drop errors of a removed tech entry and shift later entries down
    pub fn remove_tech_index(&mut self, index: usize) {
        self.errors.retain(|e| e.path.tech_index() != Some(index));
        for e in &mut self.errors {
            if let Some(i) = e.path.tech_index() {
                if i > index {
                    e.path = e.path.with_tech_index(i - 1);
                }
            }
        }
    }
}
