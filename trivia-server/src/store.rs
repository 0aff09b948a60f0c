//! Storage seam between HTTP handlers and the relational store
//!
//! Handlers only see [`TriviaStore`]; the PostgreSQL implementation lives in
//! `db`, the in-memory one in `memory`.

use std::collections::HashSet;

use async_trait::async_trait;
use trivia_core::{Category, NewQuestion, Paginated, Pagination, Question, QuestionFilter, QuizScope};

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("null value in column \"{column}\" violates not-null constraint")]
    NotNull { column: &'static str },

    #[error("id sequence for {table} is exhausted")]
    SequenceExhausted { table: &'static str },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Query and mutation surface used by the API.
///
/// Every listing is ordered by id ascending.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by id.
    async fn categories(&self) -> StoreResult<Vec<Category>>;

    /// One page of questions matching `filter`, with the filtered total.
    async fn questions(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> StoreResult<Paginated<Question>>;

    /// Look up a single question.
    async fn question(&self, id: i32) -> StoreResult<Option<Question>>;

    /// Persist a question and return it with its assigned id.
    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question>;

    /// Remove a question. Returns false when no row was deleted.
    async fn delete_question(&self, id: i32) -> StoreResult<bool>;

    /// Questions in `scope` whose id is not in `previous`.
    async fn quiz_candidates(
        &self,
        scope: QuizScope,
        previous: &HashSet<i32>,
    ) -> StoreResult<Vec<Question>>;
}
