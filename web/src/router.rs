//! Todo service HTTP router.

use crate::handlers::{create_todo, health_check, list_todos, update_todo};
use crate::middleware::correlation_id_layer;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

/// Router with the todo endpoints only.
///
/// # Routes
///
/// - `POST /todos` - Create a todo
/// - `GET /todos` - List todos
/// - `PUT /todos/:id` - Update a todo
#[must_use]
pub fn todo_router(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", put(update_todo))
        .with_state(state)
}

/// Complete application: todo routes, `GET /health`, request tracing and
/// correlation IDs.
///
/// # Example
///
/// ```rust,no_run
/// use todo_service_web::{app, AppState};
///
/// # async fn serve() -> std::io::Result<()> {
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
/// axum::serve(listener, app(AppState::in_memory())).await
/// # }
/// ```
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(todo_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
}
