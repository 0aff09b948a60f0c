//! trivia-server: HTTP API for trivia questions and quizzes
//!
//! Serves the question listing, search, create/delete, per-category and
//! quiz endpoints over any [`TriviaStore`]: PostgreSQL in production,
//! in-memory for development and tests.

pub mod db;
pub mod http;
pub mod memory;
pub mod state;
pub mod store;

pub use db::PgStore;
pub use http::{build_router, run_server, ApiError, ServerConfig};
pub use memory::MemoryStore;
pub use state::AppState;
pub use store::{StoreError, StoreResult, TriviaStore};
