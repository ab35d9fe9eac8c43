//! Application use cases.
//!
//! Each use case wraps a single repository call plus the business rule that
//! goes with it. They are async for a uniform calling convention even though
//! the in-memory repository never actually suspends.

use crate::environment::IdGenerator;
use crate::error::TodoError;
use crate::repository::TodoRepository;
use crate::types::{NewTodo, Todo, TodoId, TodoPatch};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Creates a todo from a [`NewTodo`] draft.
#[derive(Clone)]
pub struct CreateTodo {
    repository: Arc<dyn TodoRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl CreateTodo {
    /// Creates the use case over a repository and an id source.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    /// Validates the draft, assigns a fresh id and stores the todo.
    ///
    /// # Errors
    ///
    /// - [`TodoError::EmptyTitle`] when the title is blank
    /// - [`TodoError::Repository`] when storage fails
    #[tracing::instrument(skip_all, fields(title_len = draft.title.len()))]
    pub async fn execute(&self, draft: NewTodo) -> Result<Todo, TodoError> {
        if draft.title.trim().is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        let todo = Todo::new(self.ids.next_id(), draft);
        let todo = self.repository.add(todo).await?;

        tracing::debug!(todo_id = %todo.id, "Todo created");
        Ok(todo)
    }
}

/// Lists every todo in creation order.
#[derive(Clone)]
pub struct GetTodos {
    repository: Arc<dyn TodoRepository>,
}

impl GetTodos {
    /// Creates the use case over a repository.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Returns the full, unfiltered list.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Repository`] when storage fails.
    pub async fn execute(&self) -> Result<Vec<Todo>, TodoError> {
        Ok(self.repository.get_all().await?)
    }
}

/// Applies a [`TodoPatch`] to an existing todo.
///
/// Clones share one write lock, so concurrent updates through any clone
/// run their lookup, merge and write back to back.
#[derive(Clone)]
pub struct UpdateTodo {
    repository: Arc<dyn TodoRepository>,
    write_lock: Arc<Mutex<()>>,
}

impl UpdateTodo {
    /// Creates the use case over a repository.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self {
            repository,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Looks up the todo, merges the patch and stores the result.
    ///
    /// See [`Todo::apply`] for the merge rules. Every step runs under the
    /// shared write lock, so two patches to the same todo both land.
    ///
    /// # Errors
    ///
    /// - [`TodoError::NotFound`] when no todo has `id`
    /// - [`TodoError::Repository`] when storage fails
    #[tracing::instrument(skip_all, fields(todo_id = %id))]
    pub async fn execute(&self, id: TodoId, patch: TodoPatch) -> Result<Todo, TodoError> {
        let _guard = self.write_lock.lock().await;

        let Some(mut todo) = self.repository.get_by_id(id).await? else {
            tracing::warn!("Update targets unknown todo");
            return Err(TodoError::not_found(id));
        };

        todo.apply(patch);

        self.repository
            .update(todo)
            .await?
            .ok_or_else(|| TodoError::not_found(id))
    }
}
