//! Axum HTTP layer for the todo service.
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Extract data** from the request (path, JSON body)
//! 3. **Invoke** one use case from [`AppState`]
//! 4. **Map result** to an HTTP response, or an [`AppError`] on failure
//!
//! # Routes
//!
//! | Method | Path | Success | Failure |
//! |---|---|---|---|
//! | POST | `/todos` | 201 | 400, 500 |
//! | GET | `/todos` | 200 | 500 |
//! | PUT | `/todos/:id` | 200 | 404, 400, 500 |
//! | GET | `/health` | 200 | — |

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::{CorrelationId, JsonBody};
pub use middleware::{CORRELATION_ID_HEADER, correlation_id_layer};
pub use router::{app, todo_router};
pub use state::AppState;
