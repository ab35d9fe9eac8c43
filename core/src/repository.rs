//! Repository port for todo storage.
//!
//! Use cases depend only on [`TodoRepository`], so a persistent adapter can
//! replace [`InMemoryTodoRepository`](crate::memory::InMemoryTodoRepository)
//! without touching call sites.
//!
//! # Dyn Compatibility
//!
//! Methods return `Pin<Box<dyn Future>>` instead of using `async fn` so the
//! trait can be shared as `Arc<dyn TodoRepository>`.

use crate::error::RepositoryError;
use crate::types::{Todo, TodoId};
use std::future::Future;
use std::pin::Pin;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Boxed future returned by repository methods.
pub type RepositoryFuture<'a, T> = Pin<Box<dyn Future<Output = RepositoryResult<T>> + Send + 'a>>;

/// Storage contract for todos.
///
/// Implementations keep todos in insertion order and hold at most one entry
/// per id. They must be `Send + Sync` to be shared across request handlers.
pub trait TodoRepository: Send + Sync {
    /// Appends a todo and returns it unchanged.
    ///
    /// No duplicate-id check is performed; id uniqueness is the creator's job.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when storage fails.
    fn add(&self, todo: Todo) -> RepositoryFuture<'_, Todo>;

    /// Returns every todo in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when storage fails.
    fn get_all(&self) -> RepositoryFuture<'_, Vec<Todo>>;

    /// Finds a todo by id, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when storage fails.
    fn get_by_id(&self, id: TodoId) -> RepositoryFuture<'_, Option<Todo>>;

    /// Replaces the todo with the same id in place.
    ///
    /// Returns the stored todo, or `None` when no entry has that id. A missing
    /// id is not an error at this layer.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Persistence`] when storage fails.
    fn update(&self, todo: Todo) -> RepositoryFuture<'_, Option<Todo>>;
}
