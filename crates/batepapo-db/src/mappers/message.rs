//! Message entity ↔ model mappers

use batepapo_core::entities::ChatMessage;
use batepapo_core::error::DomainError;
use chrono::{DateTime, Utc};

use crate::models::MessageModel;

/// Convert unix-epoch milliseconds to a UTC timestamp
///
/// Out-of-range values clamp to the epoch.
pub fn datetime_from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_default()
}

impl TryFrom<MessageModel> for ChatMessage {
    type Error = DomainError;

    fn try_from(model: MessageModel) -> Result<Self, Self::Error> {
        Ok(Self {
            from: model.sender,
            to: model.recipient,
            text: model.body,
            kind: model.kind.parse()?,
            sent_at: datetime_from_millis(model.sent_at),
        })
    }
}
