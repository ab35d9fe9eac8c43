//! In-memory todo repository.

use crate::repository::{RepositoryFuture, TodoRepository};
use crate::types::{Todo, TodoId};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory repository backed by an ordered `Vec`.
///
/// Lookups are linear scans. Contents live as long as the process and are
/// never written anywhere.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-filled with `todos`, in order.
    #[must_use]
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(todos)),
        }
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn add(&self, todo: Todo) -> RepositoryFuture<'_, Todo> {
        Box::pin(async move {
            self.todos.write().await.push(todo.clone());
            Ok(todo)
        })
    }

    fn get_all(&self) -> RepositoryFuture<'_, Vec<Todo>> {
        Box::pin(async move { Ok(self.todos.read().await.clone()) })
    }

    fn get_by_id(&self, id: TodoId) -> RepositoryFuture<'_, Option<Todo>> {
        Box::pin(async move {
            let todos = self.todos.read().await;
            Ok(todos.iter().find(|todo| todo.id == id).cloned())
        })
    }

    fn update(&self, todo: Todo) -> RepositoryFuture<'_, Option<Todo>> {
        Box::pin(async move {
            let mut todos = self.todos.write().await;
            let Some(slot) = todos.iter_mut().find(|existing| existing.id == todo.id) else {
                return Ok(None);
            };
            slot.clone_from(&todo);
            Ok(Some(todo))
        })
    }
}
