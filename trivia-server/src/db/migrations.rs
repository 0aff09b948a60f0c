//! Schema migrations for the trivia tables
//!
//! `questions.category` intentionally has no foreign key: a question may
//! reference a category id that does not exist.

use sqlx::PgPool;
use trivia_core::DEFAULT_CATEGORIES;

/// Create tables and indexes if they are missing.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    tracing::info!("Trivia migrations complete");
    Ok(())
}

/// Insert the default categories when the table is empty.
///
/// Returns the number of rows inserted (0 if categories already existed).
pub async fn seed_default_categories(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let labels: Vec<String> = DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect();

    let result = sqlx::query(
        r#"
        INSERT INTO categories (type)
        SELECT label FROM UNNEST($1::text[]) WITH ORDINALITY AS t(label, ord)
        WHERE NOT EXISTS (SELECT 1 FROM categories)
        ORDER BY ord
        "#,
    )
    .bind(labels)
    .execute(pool)
    .await?;

    let inserted = result.rows_affected();
    if inserted > 0 {
        tracing::info!(inserted, "Seeded default categories");
    } else {
        tracing::info!("Categories already present, skipping seed");
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;
    use crate::db::pool::test_database;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let pool = create_pool(&test_database()).await.expect("pool creation failed");

        run(&pool).await.expect("first run");
        run(&pool).await.expect("second run");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seed_only_fills_empty_table() {
        let pool = create_pool(&test_database()).await.expect("pool creation failed");
        run(&pool).await.expect("migrations");

        seed_default_categories(&pool).await.expect("first seed");
        let second = seed_default_categories(&pool).await.expect("second seed");
        assert_eq!(second, 0);
    }
}
