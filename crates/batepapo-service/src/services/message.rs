//! Message service
//!
//! Handles posting messages to the room and reading back the messages
//! visible to a given participant.

use chrono::Utc;
use tracing::{info, instrument};

use batepapo_core::{ChatMessage, DomainError, MessageKind};

use crate::dto::{MessageResponse, PostMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a message from an active participant
    ///
    /// The sender must currently be in the room; the kind must be one of
    /// the postable kinds ("message" or "private_message"). Status
    /// messages are produced only by the room itself.
    #[instrument(skip(self, request), fields(from = %from, to = %request.to))]
    pub async fn post(&self, from: &str, request: PostMessageRequest) -> ServiceResult<()> {
        let kind: MessageKind = request.kind.parse()?;
        if !kind.is_postable() {
            return Err(ServiceError::validation(format!(
                "Message type not allowed: {}",
                request.kind
            )));
        }

        if self
            .ctx
            .participant_repo()
            .find_by_name(from)
            .await?
            .is_none()
        {
            return Err(DomainError::UnknownSender(from.to_string()).into());
        }

        let message = ChatMessage::new(from, request.to, request.text, kind, Utc::now());
        self.ctx.message_repo().append(&message).await?;

        info!(from = %from, kind = %message.kind, "Message posted");

        Ok(())
    }

    /// List the messages visible to a participant, newest first
    ///
    /// A participant sees status messages, broadcasts, private messages
    /// addressed to them, and messages they sent. `limit` truncates to the
    /// most recent messages; it must be positive when given.
    #[instrument(skip(self))]
    pub async fn visible_to(
        &self,
        requester: &str,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<MessageResponse>> {
        if let Some(n) = limit {
            if n <= 0 {
                return Err(ServiceError::validation("Limit must be a positive integer"));
            }
        }

        let messages = self
            .ctx
            .message_repo()
            .find_visible_to(requester, limit)
            .await?;

        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }
}
