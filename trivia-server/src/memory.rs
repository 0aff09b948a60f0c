//! In-memory store
//!
//! Behaves like the PostgreSQL schema: serial ids that are never reused and
//! NOT NULL columns on insert. Used by `serve --memory` and the HTTP tests.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::quiz;
use trivia_core::{
    paginate, Category, NewQuestion, Paginated, Pagination, Question, QuestionFilter, QuizScope,
    DEFAULT_CATEGORIES,
};

use crate::store::{StoreError, StoreResult, TriviaStore};

#[derive(Debug)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    /// Highest question id ever handed out; 0 before the first insert
    last_question_id: i32,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            categories: BTreeMap::new(),
            questions: BTreeMap::new(),
            last_question_id: 0,
        }
    }
}

/// Thread-safe in-memory tables
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the default categories (ids 1..=6)
    pub fn with_default_categories() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(kind, id)| Category {
                id,
                kind: (*kind).to_string(),
            })
            .collect();
        Self::from_rows(categories, Vec::new())
    }

    /// Store preloaded with existing rows. The next question id follows the
    /// highest one given.
    pub fn from_rows(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let last_question_id = questions.iter().map(|q| q.id).max().unwrap_or(0).max(0);
        let tables = Tables {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: questions.into_iter().map(|q| (q.id, q)).collect(),
            last_question_id,
        };
        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn questions(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> StoreResult<Paginated<Question>> {
        let tables = self.tables.read().await;
        let matching: Vec<Question> = tables
            .questions
            .values()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect();
        Ok(paginate(&matching, page))
    }

    async fn question(&self, id: i32) -> StoreResult<Option<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.tables.write().await;
        let id = tables
            .last_question_id
            .checked_add(1)
            .ok_or(StoreError::SequenceExhausted { table: "questions" })?;
        let question = new
            .into_question(id)
            .map_err(|column| StoreError::NotNull { column })?;

        tables.last_question_id = id;
        tables.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.questions.remove(&id).is_some())
    }

    async fn quiz_candidates(
        &self,
        scope: QuizScope,
        previous: &HashSet<i32>,
    ) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(quiz::candidates(tables.questions.values(), scope, previous))
    }
}
