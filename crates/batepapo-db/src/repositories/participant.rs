//! SQLite implementation of ParticipantRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::instrument;

use batepapo_core::entities::Participant;
use batepapo_core::error::DomainError;
use batepapo_core::traits::{ParticipantRepository, RepoResult};

use crate::models::ParticipantModel;
use crate::pool::DbPool;

use super::error::{map_db_error, map_unique_violation};

/// SQLite implementation of ParticipantRepository
#[derive(Clone)]
pub struct SqliteParticipantRepository {
    pool: DbPool,
}

impl SqliteParticipantRepository {
    /// Create a new SqliteParticipantRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for SqliteParticipantRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Participant>> {
        let result = sqlx::query_as::<_, ParticipantModel>(
            r"
            SELECT name, last_seen
            FROM participants
            WHERE name = ?
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Participant::from))
    }

    #[instrument(skip(self, participant), fields(name = %participant.name))]
    async fn insert(&self, participant: &Participant) -> RepoResult<()> {
        let model = ParticipantModel::from(participant);

        sqlx::query(
            r"
            INSERT INTO participants (name, last_seen)
            VALUES (?, ?)
            ",
        )
        .bind(&model.name)
        .bind(model.last_seen)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::NameTaken(model.name.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_last_seen(&self, name: &str, at: DateTime<Utc>) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE participants
            SET last_seen = ?
            WHERE name = ?
            ",
        )
        .bind(at.timestamp_millis())
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Participant>> {
        let rows = sqlx::query_as::<_, ParticipantModel>(
            r"
            SELECT name, last_seen
            FROM participants
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Participant::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_stale_before(&self, cutoff: DateTime<Utc>) -> RepoResult<Vec<Participant>> {
        let rows = sqlx::query_as::<_, ParticipantModel>(
            r"
            SELECT name, last_seen
            FROM participants
            WHERE last_seen < ?
            ",
        )
        .bind(cutoff.timestamp_millis())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Participant::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete_stale_before(&self, cutoff: DateTime<Utc>) -> RepoResult<u64> {
        // Re-filters on the cutoff at delete time; a participant refreshed
        // after the stale snapshot was taken no longer matches and survives.
        let result = sqlx::query(
            r"
            DELETE FROM participants
            WHERE last_seen < ?
            ",
        )
        .bind(cutoff.timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
