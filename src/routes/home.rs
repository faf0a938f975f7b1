//! Root status endpoint.

use axum::Json;
use serde::Serialize;

/// Greeting returned by the root endpoint
pub const GREETING: &str = "🎤 AgenticSeek Voice API is running!";

/// Service liveness description shared by the root and health endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status: String,
}

/// Root handler, also used as the fallback for paths matching no route.
pub async fn index() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: Some(GREETING.to_string()),
        status: "active".to_string(),
    })
}
