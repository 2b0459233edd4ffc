//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Room registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64, message = "Name must be 1-64 characters"))]
    pub name: String,
}

/// Post message request
///
/// The sender is not part of the body; it arrives in the `User` header.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostMessageRequest {
    #[validate(length(min = 1, max = 64, message = "Recipient must be 1-64 characters"))]
    pub to: String,

    #[validate(length(min = 1, max = 2000, message = "Text must be 1-2000 characters"))]
    pub text: String,

    /// Message kind: "message" or "private_message"
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub kind: String,
}
