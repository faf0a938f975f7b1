//! Health check endpoint for container orchestration.
//!
//! A static liveness probe: it returns 200 OK whenever the process can answer
//! HTTP and never checks any dependency.

use axum::Json;

use super::home::StatusResponse;

/// Health check handler.
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: None,
        status: "healthy".to_string(),
    })
}
