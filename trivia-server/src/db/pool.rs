//! PostgreSQL pool built from the `[database]` config section

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use trivia_core::config::DatabaseSection;

/// Connect a pool sized by `database.max_connections`.
///
/// ```ignore
/// let pool = create_pool(&config.database).await?;
/// ```
pub async fn create_pool(database: &DatabaseSection) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections = database.max_connections, "Connecting to PostgreSQL");

    PgPoolOptions::new()
        .max_connections(database.max_connections)
        .connect(&database.url)
        .await
}

/// Config section for tests against `DATABASE_URL`, default pool size.
#[cfg(test)]
pub(crate) fn test_database() -> DatabaseSection {
    DatabaseSection {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL required"),
        ..DatabaseSection::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Run with: DATABASE_URL=postgres://... cargo test -p trivia-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_respects_configured_size() {
        let database = DatabaseSection {
            max_connections: 2,
            ..test_database()
        };
        let pool = create_pool(&database).await.expect("pool creation failed");

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pg_stat_activity")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert!(count >= 1);
        assert!(pool.size() <= 2);
    }
}
