//! Database layer - connection pool, migrations and repositories
//!
//! # Design Principles
//!
//! - Connection pool with explicit limits - no Arc<Mutex<Connection>>
//! - Pagination pushed into SQL (LIMIT/OFFSET) with a separate COUNT(*)
//! - Rely on DB constraints (NOT NULL) instead of check-then-insert

pub mod migrations;
pub mod pool;
pub mod repos;

use std::collections::HashSet;

use async_trait::async_trait;
use trivia_core::{Category, NewQuestion, Paginated, Pagination, Question, QuestionFilter, QuizScope};

use crate::store::{StoreResult, TriviaStore};

pub use pool::create_pool;
pub use sqlx::PgPool;
pub use repos::{CategoryRepo, QuestionRepo};

/// PostgreSQL-backed [`TriviaStore`]
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn questions(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> StoreResult<Paginated<Question>> {
        QuestionRepo::new(&self.pool).list(filter, page).await
    }

    async fn question(&self, id: i32) -> StoreResult<Option<Question>> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        QuestionRepo::new(&self.pool).insert(new).await
    }

    async fn delete_question(&self, id: i32) -> StoreResult<bool> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn quiz_candidates(
        &self,
        scope: QuizScope,
        previous: &HashSet<i32>,
    ) -> StoreResult<Vec<Question>> {
        QuestionRepo::new(&self.pool)
            .quiz_candidates(scope, previous)
            .await
    }
}
