//! SQLite implementation of MessageRepository

use async_trait::async_trait;
use tracing::instrument;

use batepapo_core::entities::{ChatMessage, MessageKind, BROADCAST};
use batepapo_core::traits::{MessageRepository, RepoResult};

use crate::models::MessageModel;
use crate::pool::DbPool;

use super::error::map_db_error;

/// SQLite implementation of MessageRepository
#[derive(Clone)]
pub struct SqliteMessageRepository {
    pool: DbPool,
}

impl SqliteMessageRepository {
    /// Create a new SqliteMessageRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    #[instrument(skip(self, message), fields(from = %message.from, kind = %message.kind))]
    async fn append(&self, message: &ChatMessage) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO messages (sender, recipient, body, kind, sent_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(&message.from)
        .bind(&message.to)
        .bind(&message.text)
        .bind(message.kind.as_str())
        .bind(message.sent_at.timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_visible_to(
        &self,
        name: &str,
        limit: Option<i64>,
    ) -> RepoResult<Vec<ChatMessage>> {
        // Newest first by append order; the optional limit truncates.
        let rows = match limit {
            Some(n) => {
                sqlx::query_as::<_, MessageModel>(
                    r"
                    SELECT id, sender, recipient, body, kind, sent_at
                    FROM messages
                    WHERE kind = ? OR recipient = ? OR recipient = ? OR sender = ?
                    ORDER BY id DESC
                    LIMIT ?
                    ",
                )
                .bind(MessageKind::Status.as_str())
                .bind(BROADCAST)
                .bind(name)
                .bind(name)
                .bind(n)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, MessageModel>(
                    r"
                    SELECT id, sender, recipient, body, kind, sent_at
                    FROM messages
                    WHERE kind = ? OR recipient = ? OR recipient = ? OR sender = ?
                    ORDER BY id DESC
                    ",
                )
                .bind(MessageKind::Status.as_str())
                .bind(BROADCAST)
                .bind(name)
                .bind(name)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        rows.into_iter().map(ChatMessage::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count as u64)
    }
}
