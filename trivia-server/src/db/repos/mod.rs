//! Repository implementations for database access
//!
//! Each repository borrows the pool and runs one statement per call, so a
//! lookup followed by a mutation relies on the store's own atomicity.

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;
