//! HTTP layer
//!
//! Axum server with:
//! - Permissive CORS plus fixed allow-headers/allow-methods on every response
//! - Request tracing
//! - Graceful shutdown
//! - The two JSON error shapes (404 and 422)

pub mod body;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
