//! API server with graceful shutdown

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::routes::api_router;
use crate::state::AppState;
use hush_core::Thresholds;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server address
    pub addr: SocketAddr,
    /// Request timeout
    pub timeout: Duration,
    /// Default thresholds applied when a request carries none
    pub thresholds: Thresholds,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            timeout: Duration::from_secs(30),
            thresholds: Thresholds::default(),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables (HUSH_PORT, HUSH_TIMEOUT_SECS)
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("HUSH_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let timeout_secs: u64 = std::env::var("HUSH_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(30);

        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            timeout: Duration::from_secs(timeout_secs),
            ..Default::default()
        }
    }
}

/// The hush API server
pub struct HushServer {
    config: ServerConfig,
    state: AppState,
}

impl HushServer {
    /// Create a new server
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::new(config.thresholds);
        Self { config, state }
    }

    /// Build the router with its middleware stack
    pub fn router(&self) -> Router {
        api_router(self.state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(TimeoutLayer::new(self.config.timeout))
    }

    /// Run until ctrl-c
    pub async fn run(self) -> Result<(), ApiError> {
        let app = self.router();

        tracing::info!(addr = %self.config.addr, "hush API listening");

        let listener = tokio::net::TcpListener::bind(self.config.addr)
            .await
            .map_err(|e| ApiError::Internal(format!("bind failed: {e}")))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ApiError::Internal(format!("server error: {e}")))?;

        tracing::info!("hush API shut down cleanly");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
        return;
    }
    tracing::info!("shutdown signal received");
}

/// Initialize tracing with env-filter, defaulting to info level
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}
