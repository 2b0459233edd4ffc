//! Service context - dependency container for services
//!
//! Holds the repositories behind trait objects so services and the
//! presence sweeper stay decoupled from the storage backend.

use std::sync::Arc;

use batepapo_core::traits::{MessageRepository, ParticipantRepository};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services
/// and to the presence sweeper.
#[derive(Clone)]
pub struct ServiceContext {
    participant_repo: Arc<dyn ParticipantRepository>,
    message_repo: Arc<dyn MessageRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        participant_repo: Arc<dyn ParticipantRepository>,
        message_repo: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            participant_repo,
            message_repo,
        }
    }

    /// Get the participant repository
    pub fn participant_repo(&self) -> &dyn ParticipantRepository {
        self.participant_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("participant_repo", &"dyn ParticipantRepository")
            .field("message_repo", &"dyn MessageRepository")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    participant_repo: Option<Arc<dyn ParticipantRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            participant_repo: None,
            message_repo: None,
        }
    }

    pub fn participant_repo(mut self, repo: Arc<dyn ParticipantRepository>) -> Self {
        self.participant_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.participant_repo.ok_or_else(|| {
                super::error::ServiceError::validation("participant_repo is required")
            })?,
            self.message_repo.ok_or_else(|| {
                super::error::ServiceError::validation("message_repo is required")
            })?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
