//! Category repository (read-only)

use sqlx::{PgPool, Row};
use trivia_core::Category;

use crate::store::StoreError;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All categories ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| Category {
                id: r.get("id"),
                kind: r.get("type"),
            })
            .collect())
    }
}
