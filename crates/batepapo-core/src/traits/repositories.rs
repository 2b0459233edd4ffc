//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{ChatMessage, Participant};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Participant Repository
// ============================================================================

#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// Find a participant by name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Participant>>;

    /// Insert a new participant
    ///
    /// Fails with `DomainError::NameTaken` if the name is already active.
    async fn insert(&self, participant: &Participant) -> RepoResult<()>;

    /// Refresh the last-seen timestamp of an existing participant
    ///
    /// Returns `false` if no participant with that name exists.
    async fn update_last_seen(&self, name: &str, at: DateTime<Utc>) -> RepoResult<bool>;

    /// List all currently active participants
    async fn list_all(&self) -> RepoResult<Vec<Participant>>;

    /// Snapshot of participants whose last heartbeat predates the cutoff
    async fn find_stale_before(&self, cutoff: DateTime<Utc>) -> RepoResult<Vec<Participant>>;

    /// Delete every participant whose last heartbeat predates the cutoff
    ///
    /// Re-filters on the cutoff at delete time rather than deleting a
    /// snapshot by identity, so a participant refreshed in between survives.
    /// Returns the number of rows removed.
    async fn delete_stale_before(&self, cutoff: DateTime<Utc>) -> RepoResult<u64>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message to the log
    async fn append(&self, message: &ChatMessage) -> RepoResult<()>;

    /// Messages visible to `name`, most recent first
    ///
    /// `limit` truncates the result when present; callers must reject
    /// non-positive limits before reaching the repository.
    async fn find_visible_to(&self, name: &str, limit: Option<i64>)
        -> RepoResult<Vec<ChatMessage>>;

    /// Total number of messages in the log
    async fn count(&self) -> RepoResult<u64>;
}
