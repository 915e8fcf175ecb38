//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Addr(String),

    #[error("Failed to bind or serve: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP server.
///
/// Binds the configured address and serves until a shutdown signal arrives.
/// A bind failure (port in use, insufficient permission) surfaces as an error
/// for `main` to report on stderr with a non-zero exit.
pub async fn start_server(app: Router, config: &AppConfig, port: u16) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, port)
        .parse()
        .map_err(|e| ServerError::Addr(format!("{}:{} ({})", config.http.host, port, e)))?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
