//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! business logic, validation, and orchestration of domain operations,
//! plus the presence sweeper background task.

pub mod context;
pub mod error;
pub mod message;
pub mod participant;
pub mod presence;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use participant::ParticipantService;
pub use presence::PresenceSweeper;
