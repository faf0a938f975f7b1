//! HTTP route handlers.
//!
//! The routing table is fixed at startup. Every response carries the
//! cross-origin headers, and `OPTIONS` requests are answered before routing so
//! browser preflight checks succeed on any path.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;
pub mod voice;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{any, post},
    Router,
};
use http::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS, CORS_ALLOW_ORIGIN};
use crate::middleware::{preflight_layer, request_id_layer};

/// Creates the Axum router with all routes and the cross-origin header policy.
pub fn create_router() -> Router {
    // Root and health ignore the method; unknown paths land on the root handler
    let status_routes = Router::new()
        .route("/", any(home::index))
        .route("/health", any(health::health))
        .fallback(home::index);

    // Voice bodies are read in full whatever their size
    let voice_routes = Router::new()
        .route(
            "/api/voice",
            post(voice::command).fallback(voice::method_not_allowed),
        )
        .layer(DefaultBodyLimit::disable());

    Router::new()
        .merge(status_routes)
        .merge(voice_routes)
        // Preflight short-circuit sits inside the header layers so its empty
        // 200 still carries the cross-origin headers
        .layer(middleware::from_fn(preflight_layer))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static(CORS_ALLOW_ORIGIN),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
