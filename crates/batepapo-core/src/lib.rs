//! # batepapo-core
//!
//! Domain layer containing entities, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{ChatMessage, MessageKind, Participant, BROADCAST, ENTERED_TEXT, LEFT_TEXT};
pub use error::DomainError;
pub use traits::{MessageRepository, ParticipantRepository, RepoResult};
