//! Error types for todo use cases and repositories.

use thiserror::Error;

/// Errors returned by repository implementations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Backing storage failed.
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Errors returned by todo use cases.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No todo exists with the requested identifier.
    #[error("todo not found: {0}")]
    NotFound(String),

    /// The title is empty after trimming.
    #[error("todo title cannot be empty")]
    EmptyTitle,

    /// The repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl TodoError {
    /// Builds a not-found error for any displayable identifier.
    #[must_use]
    pub fn not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(id.to_string())
    }
}
