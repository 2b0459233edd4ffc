//! Mappers from domain entities to response DTOs

use batepapo_core::{ChatMessage, Participant};

use super::responses::{MessageResponse, ParticipantResponse};

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            name: participant.name,
            last_seen: participant.last_seen,
        }
    }
}

impl From<ChatMessage> for MessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            from: message.from,
            to: message.to,
            text: message.text,
            kind: message.kind.as_str().to_string(),
            time: message.sent_at,
        }
    }
}
