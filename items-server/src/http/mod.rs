//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request access log and request ids
//! - Graceful shutdown
//! - JSON error responses (`{"detail": ...}`)

pub mod server;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerError};
pub use error::ApiError;
