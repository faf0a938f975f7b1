//! Voice API - a small JSON service answering keyword voice commands.
//!
//! Exposes a status root, a health check and a voice command endpoint, all
//! with permissive cross-origin headers for browser frontends.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod voice;

pub use error::*;
pub use routes::create_router;
