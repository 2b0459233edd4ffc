//! Database models

mod message;
mod participant;

pub use message::MessageModel;
pub use participant::ParticipantModel;
