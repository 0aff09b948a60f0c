//! Question repository
//!
//! - list: filtered COUNT(*) plus an id-ordered LIMIT/OFFSET window
//! - search: `POSITION(LOWER(term) IN LOWER(question))`, so `%` and `_`
//!   in the term are matched literally
//! - quiz exclusion: `id <> ALL($n)` (true for an empty array)

use std::collections::HashSet;

use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use trivia_core::{NewQuestion, Paginated, Pagination, Question, QuestionFilter, QuizScope};

use crate::store::StoreError;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Question record from database
#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    id: i32,
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(r: QuestionRow) -> Self {
        Self {
            id: r.id,
            question: r.question,
            answer: r.answer,
            category: r.category,
            difficulty: r.difficulty,
        }
    }
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// One page of questions matching `filter`, with the filtered total.
    pub async fn list(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM questions");
        push_filter(&mut count, filter);
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        let mut select =
            QueryBuilder::<Postgres>::new(format!("SELECT {QUESTION_COLUMNS} FROM questions"));
        push_filter(&mut select, filter);
        select
            .push(" ORDER BY id LIMIT ")
            .push_bind(page.limit() as i64)
            .push(" OFFSET ")
            .push_bind(page.offset() as i64);

        let rows = select
            .build_query_as::<QuestionRow>()
            .fetch_all(self.pool)
            .await?;

        Ok(Paginated {
            items: rows.into_iter().map(Question::from).collect(),
            total: total.max(0) as u64,
        })
    }

    /// Get a single question by id.
    pub async fn get(&self, id: i32) -> Result<Option<Question>, StoreError> {
        let row: Option<QuestionRow> = sqlx::query_as(&format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Question::from))
    }

    /// Insert a question. Missing fields surface as NOT NULL violations.
    pub async fn insert(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let row: QuestionRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING {QUESTION_COLUMNS}
            "#
        ))
        .bind(new.question)
        .bind(new.answer)
        .bind(new.difficulty)
        .bind(new.category)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Delete by id. Returns false when the row was already gone.
    pub async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Quiz candidates in `scope` excluding `previous`.
    pub async fn quiz_candidates(
        &self,
        scope: QuizScope,
        previous: &HashSet<i32>,
    ) -> Result<Vec<Question>, StoreError> {
        let previous: Vec<i32> = previous.iter().copied().collect();

        let mut select = QueryBuilder::<Postgres>::new(format!(
            "SELECT {QUESTION_COLUMNS} FROM questions WHERE id <> ALL("
        ));
        select.push_bind(previous).push(")");
        if let QuizScope::Category(id) = scope {
            select.push(" AND category = ").push_bind(id);
        }
        select.push(" ORDER BY id");

        let rows = select
            .build_query_as::<QuestionRow>()
            .fetch_all(self.pool)
            .await?;
        Ok(rows.into_iter().map(Question::from).collect())
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &QuestionFilter) {
    match filter {
        QuestionFilter::All => {}
        QuestionFilter::Search(term) => {
            builder
                .push(" WHERE POSITION(LOWER(")
                .push_bind(term.clone())
                .push(") IN LOWER(question)) > 0");
        }
        QuestionFilter::Category(id) => {
            builder.push(" WHERE category = ").push_bind(*id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::test_database;
    use crate::db::{create_pool, migrations};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    async fn pool() -> PgPool {
        let pool = create_pool(&test_database()).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations");
        pool
    }

    fn new_question(text: &str) -> NewQuestion {
        NewQuestion {
            question: Some(text.into()),
            answer: Some("answer".into()),
            difficulty: Some(1),
            category: Some(1),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_delete_twice() {
        let pool = pool().await;
        let repo = QuestionRepo::new(&pool);

        let created = repo.insert(new_question("repo test question")).await.unwrap();
        assert!(repo.get(created.id).await.unwrap().is_some());
        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_missing_answer_is_rejected() {
        let pool = pool().await;
        let mut partial = new_question("no answer");
        partial.answer = None;

        let err = QuestionRepo::new(&pool).insert(partial).await.unwrap_err();
        assert!(matches!(err, StoreError::Sqlx(_)));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_treats_percent_literally() {
        let pool = pool().await;
        let repo = QuestionRepo::new(&pool);
        let created = repo.insert(new_question("Is 100% Literal?")).await.unwrap();

        let hits = repo
            .list(&QuestionFilter::Search("100% LITERAL".into()), Pagination::default())
            .await
            .unwrap();
        assert!(hits.items.iter().any(|q| q.id == created.id));

        let misses = repo
            .list(&QuestionFilter::Search("1_0% literal".into()), Pagination::default())
            .await
            .unwrap();
        assert!(misses.items.iter().all(|q| q.id != created.id));

        repo.delete(created.id).await.unwrap();
    }
}
