//! Voice command endpoint.

use axum::{body::Bytes, extract::rejection::BytesRejection, Json};
use tracing::instrument;

use crate::error::ApiError;
use crate::voice::{self, VoiceRequest, VoiceResponse};

/// `POST /api/voice` handler.
///
/// Never fails: an unreadable or undecodable body is answered as if the
/// message were "Unknown command".
#[instrument(name = "voice::command", skip(body))]
pub async fn command(body: Result<Bytes, BytesRejection>) -> Json<VoiceResponse> {
    let request = match body {
        Ok(body) => VoiceRequest::from_body(&body),
        Err(e) => {
            tracing::debug!(error = %e, "Failed to read voice request body");
            VoiceRequest::from_body(&[])
        }
    };

    tracing::debug!(
        message = %request.message,
        agent_type = request.agent_type.as_deref().unwrap_or("-"),
        "Processing voice command"
    );

    Json(voice::process(request))
}

/// Any method other than POST (and the preflight OPTIONS) on the voice path.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
