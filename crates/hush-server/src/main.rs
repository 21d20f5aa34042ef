//! Hush Server - Standalone entry point for the gating API
//!
//! This crate is a thin wrapper around `hush-api` to provide a runnable
//! binary for deployments without modifying the library crate.

use anyhow::Result;
use hush_api::{HushServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    hush_api::init_tracing();

    tracing::info!("starting hush server");

    // Map a platform-provided $PORT to HUSH_PORT if the latter is unset
    if let Ok(port) = std::env::var("PORT") {
        if std::env::var("HUSH_PORT").is_err() {
            tracing::info!(%port, "mapping PORT to HUSH_PORT");
            std::env::set_var("HUSH_PORT", port);
        }
    }

    let config = ServerConfig::from_env();
    let server = HushServer::new(config);

    server.run().await.map_err(|e| {
        tracing::error!(error = %e, "server error");
        e
    })?;

    Ok(())
}
