//! SQLite connection pool management and schema setup

use std::time::Duration;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Alias for the pool type used across the crate
pub type DbPool = SqlitePool;

/// Embedded schema, applied idempotently on pool creation.
///
/// `last_seen` and `sent_at` are unix-epoch milliseconds; the autoincrement
/// message id is the application-assigned append order used for recency
/// ranking.
const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS participants (
    name      TEXT PRIMARY KEY,
    last_seen INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS messages (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    sender    TEXT NOT NULL,
    recipient TEXT NOT NULL,
    body      TEXT NOT NULL,
    kind      TEXT NOT NULL,
    sent_at   INTEGER NOT NULL
);
";

/// Database configuration for connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite://batepapo.db?mode=rwc"),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

/// Create a new SQLite connection pool and apply the schema
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;

    sqlx::raw_sql(SCHEMA).execute(&pool).await?;

    Ok(pool)
}

/// Create an in-memory pool for tests
///
/// Uses a single connection: every pooled connection to `sqlite::memory:`
/// would otherwise open its own private database.
pub async fn create_memory_pool() -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    sqlx::raw_sql(SCHEMA).execute(&pool).await?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DatabaseConfig::default();
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_memory_pool_applies_schema() {
        let pool = create_memory_pool().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM participants")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
