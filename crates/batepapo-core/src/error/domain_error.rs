//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Participant name already in use: {0}")]
    NameTaken(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid message kind: {0}")]
    InvalidMessageKind(String),

    #[error("Unknown sender: {0}")]
    UnknownSender(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ParticipantNotFound(_) => "UNKNOWN_PARTICIPANT",
            Self::NameTaken(_) => "NAME_TAKEN",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidMessageKind(_) => "INVALID_MESSAGE_KIND",
            Self::UnknownSender(_) => "UNKNOWN_SENDER",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ParticipantNotFound(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::NameTaken(_))
    }

    /// Check if this is a validation error (including unknown sender, which
    /// the API surfaces as an unprocessable request)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidMessageKind(_) | Self::UnknownSender(_)
        )
    }
}
