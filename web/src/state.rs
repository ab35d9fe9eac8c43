//! Application state for Axum handlers.

use std::sync::Arc;
use todo_service_core::{
    CreateTodo, GetTodos, IdGenerator, InMemoryTodoRepository, TodoRepository, UpdateTodo,
    UuidIdGenerator,
};

/// Use cases shared across all HTTP handlers.
///
/// All three use cases are built over the same repository, so a todo created
/// through one is visible to the others.
#[derive(Clone)]
pub struct AppState {
    /// `POST /todos`
    pub create_todo: CreateTodo,
    /// `GET /todos`
    pub get_todos: GetTodos,
    /// `PUT /todos/:id`
    pub update_todo: UpdateTodo,
}

impl AppState {
    /// Wire the use cases over a repository and an id source.
    #[must_use]
    pub fn new(repository: Arc<dyn TodoRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            create_todo: CreateTodo::new(Arc::clone(&repository), ids),
            get_todos: GetTodos::new(Arc::clone(&repository)),
            update_todo: UpdateTodo::new(repository),
        }
    }

    /// Production wiring: empty in-memory repository and random UUIDs.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryTodoRepository::new()),
            Arc::new(UuidIdGenerator),
        )
    }
}
