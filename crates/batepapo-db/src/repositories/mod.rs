//! Repository implementations

mod error;
mod message;
mod participant;

pub use message::SqliteMessageRepository;
pub use participant::SqliteParticipantRepository;
