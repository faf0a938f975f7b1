use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };

        tracing::debug!(status = status.as_u16(), error = %self, "Rejecting request");

        // Plain text body, terminated like a classic HTTP error page
        (status, format!("{}\n", self)).into_response()
    }
}
