//! # Todo Service Testing
//!
//! Testing utilities and fixtures for the todo service.
//!
//! This crate provides:
//! - Deterministic implementations of environment traits
//! - A repository that always fails, for exercising error paths
//! - Builders for domain values
//! - Helpers for seeding repositories
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use todo_service_core::{CreateTodo, InMemoryTodoRepository, NewTodo, TodoRepository};
//! use todo_service_testing::SequentialIdGenerator;
//!
//! # async fn example() -> Result<(), todo_service_core::TodoError> {
//! let repository: Arc<dyn TodoRepository> = Arc::new(InMemoryTodoRepository::new());
//! let create = CreateTodo::new(repository, Arc::new(SequentialIdGenerator::new()));
//!
//! let todo = create.execute(NewTodo::titled("Buy milk")).await?;
//! assert_eq!(todo.id, SequentialIdGenerator::id_at(1));
//! # Ok(())
//! # }
//! ```

use todo_service_core::environment::IdGenerator;
use todo_service_core::{InMemoryTodoRepository, NewTodo, Todo, TodoId};

/// Mock implementations of environment traits and the repository port.
pub mod mocks {
    use super::{IdGenerator, Todo, TodoId};
    use std::sync::atomic::{AtomicU64, Ordering};
    use todo_service_core::{RepositoryError, RepositoryFuture, TodoRepository};
    use uuid::Uuid;

    /// Id generator handing out predictable ids.
    ///
    /// The n-th call (starting at 1) returns the UUID whose low bits are `n`,
    /// e.g. `00000000-0000-0000-0000-000000000001`.
    ///
    /// # Example
    ///
    /// ```
    /// use todo_service_core::environment::IdGenerator;
    /// use todo_service_testing::mocks::SequentialIdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.next_id(), SequentialIdGenerator::id_at(1));
    /// assert_eq!(ids.next_id(), SequentialIdGenerator::id_at(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        issued: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is `id_at(1)`
        #[must_use]
        pub const fn new() -> Self {
            Self {
                issued: AtomicU64::new(0),
            }
        }

        /// The id returned by the `n`-th call to `next_id`
        #[must_use]
        pub const fn id_at(n: u64) -> TodoId {
            TodoId::from_uuid(Uuid::from_u64_pair(0, n))
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> TodoId {
            let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
            Self::id_at(n)
        }
    }

    /// Repository whose every operation fails with
    /// [`RepositoryError::Persistence`] carrying [`FailingRepository::DETAIL`].
    #[derive(Debug, Clone, Copy, Default)]
    pub struct FailingRepository;

    impl FailingRepository {
        /// Detail string inside every returned error
        pub const DETAIL: &'static str = "storage offline: 10.0.0.7:5432";

        fn failure<'a, T: 'a>() -> RepositoryFuture<'a, T> {
            Box::pin(async { Err(RepositoryError::Persistence(Self::DETAIL.to_string())) })
        }
    }

    impl TodoRepository for FailingRepository {
        fn add(&self, _todo: Todo) -> RepositoryFuture<'_, Todo> {
            Self::failure()
        }

        fn get_all(&self) -> RepositoryFuture<'_, Vec<Todo>> {
            Self::failure()
        }

        fn get_by_id(&self, _id: TodoId) -> RepositoryFuture<'_, Option<Todo>> {
            Self::failure()
        }

        fn update(&self, _todo: Todo) -> RepositoryFuture<'_, Option<Todo>> {
            Self::failure()
        }
    }
}

/// Builders for domain values.
pub mod builders {
    use super::{NewTodo, Todo, TodoId};

    /// Builder for [`Todo`] fixtures.
    ///
    /// Defaults to a random id, the title `"Test todo"` and `completed = false`.
    #[derive(Debug, Clone)]
    pub struct TodoBuilder {
        id: TodoId,
        title: String,
        completed: bool,
    }

    impl Default for TodoBuilder {
        fn default() -> Self {
            Self {
                id: TodoId::new(),
                title: "Test todo".to_string(),
                completed: false,
            }
        }
    }

    impl TodoBuilder {
        /// Start a builder with default values
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Set the id
        #[must_use]
        pub const fn id(mut self, id: TodoId) -> Self {
            self.id = id;
            self
        }

        /// Set the title
        #[must_use]
        pub fn title(mut self, title: impl Into<String>) -> Self {
            self.title = title.into();
            self
        }

        /// Mark the todo completed
        #[must_use]
        pub const fn completed(mut self) -> Self {
            self.completed = true;
            self
        }

        /// Build the todo
        #[must_use]
        pub fn build(self) -> Todo {
            Todo::new(
                self.id,
                NewTodo {
                    title: self.title,
                    completed: Some(self.completed),
                },
            )
        }
    }
}

/// Test helpers.
pub mod helpers {
    use super::{InMemoryTodoRepository, Todo};
    use crate::builders::TodoBuilder;

    /// Repository holding one incomplete todo per title, in order.
    ///
    /// Returns the repository together with the seeded todos.
    #[must_use]
    pub fn seeded_repository(titles: &[&str]) -> (InMemoryTodoRepository, Vec<Todo>) {
        let todos: Vec<Todo> = titles
            .iter()
            .map(|title| TodoBuilder::new().title(*title).build())
            .collect();
        (InMemoryTodoRepository::with_todos(todos.clone()), todos)
    }
}

// Re-export commonly used items
pub use builders::TodoBuilder;
pub use helpers::seeded_repository;
pub use mocks::{FailingRepository, SequentialIdGenerator};
