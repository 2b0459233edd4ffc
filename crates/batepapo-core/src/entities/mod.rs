//! Domain entities

mod message;
mod participant;

pub use message::{ChatMessage, MessageKind, BROADCAST, ENTERED_TEXT, LEFT_TEXT};
pub use participant::Participant;
