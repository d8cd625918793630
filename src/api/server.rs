//! Quiz Grader server implementation
//!
//! HTTP server using Axum. Stateless: every request carries its own workbook.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;

/// Default cap on an uploaded request body
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub version: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Build the router with all routes and middleware
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Page
        .route("/", get(handlers::index))
        // Health and info endpoints
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        .route("/api/v1", get(handlers::api_info))
        // Grading endpoints
        .route("/api/v1/process", post(handlers::process))
        .route("/api/v1/download", post(handlers::download))
        // State and middleware
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Run the server until SIGINT/SIGTERM
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quiz_grader=info,tower_http=info".into()),
        )
        .init();

    let state = Arc::new(AppState::default());
    let app = build_router(state, &config);

    let addr = config.socket_addr()?;
    info!("📝 Quiz Grader starting on http://{}", addr);
    info!("   Endpoints: /api/v1/process, /api/v1/download");
    info!("   Upload limit: {} bytes", config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Quiz Grader shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping server...");
}
