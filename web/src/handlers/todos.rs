//! Todo endpoints.
//!
//! Each handler is a thin adapter: extract input, call one use case, map the
//! result. Failures become responses through [`AppError`].

use crate::error::AppError;
use crate::extractors::{CorrelationId, JsonBody};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use todo_service_core::{NewTodo, Todo, TodoError, TodoId, TodoPatch};

/// Create a todo.
///
/// # Endpoint
///
/// ```text
/// POST /todos
/// Content-Type: application/json
///
/// { "title": "buy milk", "completed": false }
/// ```
///
/// # Response
///
/// `201 Created` with the stored todo:
///
/// ```json
/// { "id": "6f1c…", "title": "buy milk", "completed": false }
/// ```
///
/// # Errors
///
/// `400 Bad Request` for a malformed body or an invalid title.
#[tracing::instrument(skip_all, fields(correlation_id = %correlation_id.0))]
pub async fn create_todo(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    JsonBody(draft): JsonBody<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = state.create_todo.execute(draft).await?;
    tracing::info!(todo_id = %todo.id, "Created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// List all todos in creation order.
///
/// # Endpoint
///
/// ```text
/// GET /todos
/// ```
///
/// # Errors
///
/// Only a repository failure (`500`); the in-memory store never fails.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    Ok(Json(state.get_todos.execute().await?))
}

/// Update a todo's title and/or completion flag.
///
/// # Endpoint
///
/// ```text
/// PUT /todos/:id
/// Content-Type: application/json
///
/// { "title": "buy oat milk", "completed": true }
/// ```
///
/// Both fields are optional. An empty title is ignored.
///
/// # Errors
///
/// - `404 Not Found` when no todo has the id (including ids that are not UUIDs)
/// - `400 Bad Request` for a malformed body
#[tracing::instrument(skip_all, fields(correlation_id = %correlation_id.0))]
pub async fn update_todo(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    Path(raw_id): Path<String>,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> Result<Json<Todo>, AppError> {
    let id: TodoId = raw_id
        .parse()
        .map_err(|_| TodoError::not_found(&raw_id))?;
    let todo = state.update_todo.execute(id, patch).await?;
    tracing::info!(todo_id = %todo.id, "Updated todo");
    Ok(Json(todo))
}
