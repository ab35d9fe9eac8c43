//! Todo service HTTP server.
//!
//! # Usage
//!
//! ```bash
//! PORT=3000 cargo run --bin todo-service
//! ```
//!
//! # API Endpoints
//!
//! - `POST /todos` - Create a todo
//! - `GET /todos` - List todos
//! - `PUT /todos/:id` - Update a todo
//! - `GET /health` - Health check
//!
//! # Example Requests
//!
//! ```bash
//! curl -X POST http://localhost:3000/todos \
//!   -H "Content-Type: application/json" \
//!   -d '{"title": "buy milk"}'
//!
//! curl http://localhost:3000/todos
//!
//! curl -X PUT http://localhost:3000/todos/<id> \
//!   -H "Content-Type: application/json" \
//!   -d '{"completed": true}'
//! ```

mod config;

use anyhow::Context;
use config::Config;
use todo_service_web::{AppState, app};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{},todo_service=debug,tower_http=debug", config.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(host = %config.host, port = config.port, "Configuration loaded");

    let router = app(AppState::in_memory());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Server running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
