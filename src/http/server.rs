//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address '{0}'")]
    Address(String),

    #[error("Failed to bind server: {0}")]
    Bind(#[source] std::io::Error),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Resolve the configured host and port into a bound listener.
pub async fn bind(config: &AppConfig) -> Result<TcpListener, ServerError> {
    let raw = format!("{}:{}", config.http.host, config.http.port);
    let addr: SocketAddr = raw.parse().map_err(|_| ServerError::Address(raw))?;

    TcpListener::bind(addr).await.map_err(ServerError::Bind)
}

/// Start the HTTP server.
///
/// This function only returns if binding or serving fails.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    let addr = listener.local_addr().map_err(ServerError::Bind)?;

    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
