//! # Todo Service Core
//!
//! Domain types, repository port and use cases for the todo service.
//!
//! ## Layers
//!
//! ```text
//! HTTP handler (todo-service-web)
//!      │
//!      ▼
//! Use case        CreateTodo / GetTodos / UpdateTodo
//!      │
//!      ▼
//! Repository      TodoRepository (port) → InMemoryTodoRepository
//!      │
//!      ▼
//! Entity          Todo
//! ```
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use todo_service_core::{
//!     CreateTodo, InMemoryTodoRepository, NewTodo, TodoRepository, UuidIdGenerator,
//! };
//!
//! # async fn example() -> Result<(), todo_service_core::TodoError> {
//! let repository: Arc<dyn TodoRepository> = Arc::new(InMemoryTodoRepository::new());
//! let create = CreateTodo::new(repository, Arc::new(UuidIdGenerator));
//!
//! let todo = create.execute(NewTodo::titled("Buy milk")).await?;
//! assert!(!todo.completed);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod repository;
pub mod types;
pub mod use_cases;

/// Environment module - collaborators injected into use cases
///
/// Anything that would make a use case non-deterministic sits behind a trait
/// here so tests can swap it out.
pub mod environment {
    use crate::types::TodoId;

    /// Source of identifiers for newly created todos
    ///
    /// Implementations must never hand out the same id twice during the
    /// lifetime of a repository.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_service_core::environment::{IdGenerator, UuidIdGenerator};
    ///
    /// let ids = UuidIdGenerator;
    /// assert_ne!(ids.next_id(), ids.next_id());
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Produce the next unused id
        fn next_id(&self) -> TodoId;
    }

    /// Production id source using random v4 UUIDs
    #[derive(Debug, Clone, Copy, Default)]
    pub struct UuidIdGenerator;

    impl IdGenerator for UuidIdGenerator {
        fn next_id(&self) -> TodoId {
            TodoId::new()
        }
    }
}

// Re-export commonly used types
pub use environment::{IdGenerator, UuidIdGenerator};
pub use error::{RepositoryError, TodoError};
pub use memory::InMemoryTodoRepository;
pub use repository::{RepositoryFuture, RepositoryResult, TodoRepository};
pub use types::{NewTodo, Todo, TodoId, TodoPatch};
pub use use_cases::{CreateTodo, GetTodos, UpdateTodo};
