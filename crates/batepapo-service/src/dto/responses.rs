//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Timestamps are serialized as RFC 3339 strings via chrono.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Participant Responses
// ============================================================================

/// Active room participant
#[derive(Debug, Clone, Serialize)]
pub struct ParticipantResponse {
    pub name: String,
    pub last_seen: DateTime<Utc>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// A single room message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub from: String,
    pub to: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn new(database: bool) -> Self {
        Self {
            ready: database,
            database,
        }
    }
}
