//! The in-memory signup draft and its dynamic tech list

use super::field::FormField;
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Identity of a tech entry, assigned at creation and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TechId(Uuid);

impl TechId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TechId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One repeated group of the tech list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechEntry {
    pub title: FormField,
    pub knowledge: FormField,
}

impl TechEntry {
    pub fn new() -> Self {
        Self {
            title: FormField::text("title", "Tech"),
            knowledge: FormField::number("knowledge", "Knowledge (1-100)"),
        }
    }
}

impl Default for TechEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Tech entries keyed by identity; `order` only decides display order.
#[derive(Debug, Clone, Default)]
pub struct TechList {
    entries: HashMap<TechId, TechEntry>,
    order: Vec<TechId>,
}

impl TechList {
    /// Append an empty entry and return its identity
    pub fn push(&mut self) -> TechId {
        let id = TechId::new();
        self.entries.insert(id, TechEntry::new());
        self.order.push(id);
        id
    }

    /// Remove an entry, returning its former position
    pub fn remove(&mut self, id: TechId) -> Option<usize> {
        self.entries.remove(&id)?;
        let index = self.order.iter().position(|other| *other == id)?;
        self.order.remove(index);
        Some(index)
    }

    pub fn get(&self, id: TechId) -> Option<&TechEntry> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: TechId) -> Option<&mut TechEntry> {
        self.entries.get_mut(&id)
    }

    /// Current display position of an entry
    pub fn position(&self, id: TechId) -> Option<usize> {
        self.order.iter().position(|other| *other == id)
    }

    pub fn ids(&self) -> &[TechId] {
        &self.order
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = (TechId, &TechEntry)> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|entry| (*id, entry)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// Equality follows display order, which is what the user sees.
impl PartialEq for TechList {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.iter().eq(other.iter())
    }
}

impl Eq for TechList {}

/// Address of a single input in the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    TechTitle(TechId),
    TechKnowledge(TechId),
}

impl DraftField {
    pub fn tech_id(&self) -> Option<TechId> {
        match self {
            DraftField::TechTitle(id) | DraftField::TechKnowledge(id) => Some(*id),
            _ => None,
        }
    }
}

/// Not-yet-accepted form data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDraft {
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub techs: TechList,
}

impl SignupDraft {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "E-mail"),
            password: FormField::secret("password", "Password"),
            confirm_password: FormField::secret("confirmPassword", "Confirm password"),
            techs: TechList::default(),
        }
    }

    pub fn field(&self, field: DraftField) -> Option<&FormField> {
        match field {
            DraftField::Name => Some(&self.name),
            DraftField::Email => Some(&self.email),
            DraftField::Password => Some(&self.password),
            DraftField::ConfirmPassword => Some(&self.confirm_password),
            DraftField::TechTitle(id) => self.techs.get(id).map(|t| &t.title),
            DraftField::TechKnowledge(id) => self.techs.get(id).map(|t| &t.knowledge),
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> Option<&mut FormField> {
        match field {
            DraftField::Name => Some(&mut self.name),
            DraftField::Email => Some(&mut self.email),
            DraftField::Password => Some(&mut self.password),
            DraftField::ConfirmPassword => Some(&mut self.confirm_password),
            DraftField::TechTitle(id) => self.techs.get_mut(id).map(|t| &mut t.title),
            DraftField::TechKnowledge(id) => self.techs.get_mut(id).map(|t| &mut t.knowledge),
        }
    }
}

impl Default for SignupDraft {
    fn default() -> Self {
        Self::new()
    }
}
