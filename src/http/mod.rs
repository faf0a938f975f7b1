//! HTTP server module.
//!
//! Plain HTTP/1.1 only. The server runs until the process is killed; a bind or
//! serve failure is returned to the caller as a fatal [`ServerError`].

mod server;

pub use server::{bind, start_server, ServerError};
