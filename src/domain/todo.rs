use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(pub Uuid);

impl TodoId {
    pub fn new() -> Self { Self(Uuid::new_v4()) }
}

impl Default for TodoId {
    fn default() -> Self { Self::new() }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    pub description: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Builds a stored item from a draft, assigning a fresh id.
    pub fn from_draft(draft: Draft) -> Self {
        Self {
            id: TodoId::new(),
            name: draft.name,
            description: draft.description,
            done: draft.done,
            created_at: Utc::now(),
        }
    }

    pub fn has_description(&self) -> bool { !self.description.is_empty() }
}

/// In-progress form state for a new item. Empty names are allowed here and
/// rejected only when the draft is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub done: bool,
}

impl Draft {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Provide a Todo name")]
    NameRequired,
}
