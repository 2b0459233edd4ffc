//! # batepapo-service
//!
//! Application layer containing business logic, services, and DTOs.
//! The presence sweeper - the subsystem that evicts inactive participants -
//! lives here.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    HealthResponse, MessageResponse, ParticipantResponse, PostMessageRequest, ReadinessResponse,
    RegisterRequest,
};
pub use services::{
    MessageService, ParticipantService, PresenceSweeper, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
