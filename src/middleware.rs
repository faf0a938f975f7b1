//! Request middleware.
//!
//! - Request ID: generates a UUID v4 per request and wraps the request in a
//!   tracing span so every log line emitted while handling it can be correlated.
//! - Preflight: answers every `OPTIONS` request with an empty `200 OK` before
//!   it reaches a route handler.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::Instrument;
use uuid::Uuid;

/// Extension type for accessing the request ID in handlers.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that generates a request ID and creates a request span.
///
/// This should be the outermost middleware layer so the span wraps
/// all request processing, including other middleware and handlers.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    let mut request = request;
    request.extensions_mut().insert(RequestId(request_id));

    async move {
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}

/// Middleware that short-circuits cross-origin preflight requests.
///
/// Any `OPTIONS` request, whatever its path, gets `200 OK` with an empty body.
/// The cross-origin headers are added by the header layers wrapping this one.
pub async fn preflight_layer(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        tracing::debug!("Answering preflight request");
        return StatusCode::OK.into_response();
    }

    next.run(request).await
}
