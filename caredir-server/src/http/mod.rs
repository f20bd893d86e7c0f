//! HTTP server layer
//!
//! Axum server with:
//! - Permissive CORS (the gateway serves read-only public listings)
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::db::DirectoryStore;

pub use error::ApiError;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], caredir_core::DEFAULT_PORT)),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Data access behind a trait object so tests can substitute a fake
    pub directory: Arc<dyn DirectoryStore>,
}

impl AppState {
    pub fn new(directory: Arc<dyn DirectoryStore>) -> Self {
        Self { directory }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the application router with all routes.
///
/// Every route, the root greeting included, is registered here before the
/// listener binds.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::root::router())
        .merge(routes::patients::router())
        .merge(routes::providers::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&config.db).await?;
/// let state = AppState::new(Arc::new(MySqlDirectory::new(pool)));
/// run_server(state, ServerConfig::default()).await?;
/// ```
pub async fn run_server(state: AppState, config: ServerConfig) -> Result<(), ServeError> {
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}
