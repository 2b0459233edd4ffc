//! Chat message entity - an immutable entry in the room's message log

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Recipient name that addresses every participant in the room
pub const BROADCAST: &str = "Todos";

/// Text of the status message appended on registration
pub const ENTERED_TEXT: &str = "entra na sala...";

/// Text of the status message appended on eviction
pub const LEFT_TEXT: &str = "sai da sala...";

/// Kind of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Room event (entered / left), emitted by the system
    Status,
    /// Regular message, visible to everyone
    Message,
    /// Message addressed to a single participant
    PrivateMessage,
}

impl MessageKind {
    /// String form used in the persisted layout and the wire format
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Message => "message",
            Self::PrivateMessage => "private_message",
        }
    }

    /// Check if this kind may be posted by a participant
    ///
    /// Only `message` and `private_message` are postable; `status` messages
    /// are emitted by the system alone.
    #[inline]
    pub fn is_postable(self) -> bool {
        matches!(self, Self::Message | Self::PrivateMessage)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" => Ok(Self::Status),
            "message" => Ok(Self::Message),
            "private_message" => Ok(Self::PrivateMessage),
            other => Err(DomainError::InvalidMessageKind(other.to_string())),
        }
    }
}

/// Chat message entity
///
/// Immutable once created; the log is append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub from: String,
    pub to: String,
    pub text: String,
    pub kind: MessageKind,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new ChatMessage
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        text: impl Into<String>,
        kind: MessageKind,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            text: text.into(),
            kind,
            sent_at,
        }
    }

    /// Status message announcing that a participant entered the room
    pub fn entered(name: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self::new(name, BROADCAST, ENTERED_TEXT, MessageKind::Status, at)
    }

    /// Status message announcing that a participant left the room
    pub fn departure(name: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self::new(name, BROADCAST, LEFT_TEXT, MessageKind::Status, at)
    }

    /// Check if this message is addressed to the whole room
    #[inline]
    pub fn is_broadcast(&self) -> bool {
        self.to == BROADCAST
    }

    /// Visibility rule: a message is visible to `name` when it is a status
    /// message, a broadcast, or addressed to or from `name`.
    pub fn is_visible_to(&self, name: &str) -> bool {
        self.kind == MessageKind::Status
            || self.is_broadcast()
            || self.to == name
            || self.from == name
    }
}
