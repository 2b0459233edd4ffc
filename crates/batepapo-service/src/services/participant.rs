//! Participant service
//!
//! Handles room registration, the presence heartbeat, and listing
//! active participants.

use chrono::Utc;
use tracing::{info, instrument};

use batepapo_core::{ChatMessage, Participant};

use crate::dto::{ParticipantResponse, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Participant service
pub struct ParticipantService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ParticipantService<'a> {
    /// Create a new ParticipantService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a participant in the room
    ///
    /// Inserts the participant with a fresh heartbeat and announces the
    /// arrival to the room with an "entra na sala..." status message.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<ParticipantResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(ServiceError::validation("Name must not be blank"));
        }

        if self.ctx.participant_repo().find_by_name(name).await?.is_some() {
            return Err(ServiceError::conflict(format!(
                "Name already in use: {name}"
            )));
        }

        let now = Utc::now();
        let participant = Participant::new_at(name, now);

        // The name is the primary key, so a racing registration between the
        // lookup and the insert still surfaces as a NameTaken conflict.
        self.ctx.participant_repo().insert(&participant).await?;
        self.ctx
            .message_repo()
            .append(&ChatMessage::entered(name, now))
            .await?;

        info!(name = %name, "Participant registered");

        Ok(ParticipantResponse::from(participant))
    }

    /// Refresh a participant's heartbeat
    ///
    /// Returns not found if the participant is not currently in the room,
    /// which tells the client to register again.
    #[instrument(skip(self))]
    pub async fn heartbeat(&self, name: &str) -> ServiceResult<()> {
        let refreshed = self
            .ctx
            .participant_repo()
            .update_last_seen(name, Utc::now())
            .await?;

        if !refreshed {
            return Err(ServiceError::not_found("Participant", name));
        }

        Ok(())
    }

    /// List all active participants
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ParticipantResponse>> {
        let participants = self.ctx.participant_repo().list_all().await?;

        Ok(participants
            .into_iter()
            .map(ParticipantResponse::from)
            .collect())
    }
}
