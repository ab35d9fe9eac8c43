//! Domain types for the todo service.
//!
//! A [`Todo`] is the only entity. It is created from a [`NewTodo`] and
//! changed only by applying a [`TodoPatch`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, fixed at creation
    pub id: TodoId,
    /// Title/description of the todo
    pub title: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a todo from its creation input.
    #[must_use]
    pub fn new(id: TodoId, draft: NewTodo) -> Self {
        Self {
            id,
            title: draft.title,
            completed: draft.completed.unwrap_or(false),
        }
    }

    /// Merges a patch into this todo.
    ///
    /// The title is replaced only by a non-blank value, so `""` or `"  "`
    /// leaves the current title in place. `completed` is overwritten whenever
    /// present, `false` included.
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title.filter(|t| !t.trim().is_empty()) {
            self.title = title;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Input for creating a todo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    /// Title of the new todo
    pub title: String,
    /// Initial completion flag, `false` when omitted
    #[serde(default)]
    pub completed: Option<bool>,
}

impl NewTodo {
    /// Creates an incomplete todo draft with the given title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: None,
        }
    }
}

/// Partial update for an existing todo.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    /// New title; ignored when absent or blank
    #[serde(default)]
    pub title: Option<String>,
    /// New completion flag
    #[serde(default)]
    pub completed: Option<bool>,
}
