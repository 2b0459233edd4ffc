//! Route definitions
//!
//! The room API lives at the root, matching what its clients expect:
//! /participants, /messages, and /status.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, messages, participants, status};
use crate::state::AppState;

/// Create the main API router with all room routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/participants", post(participants::register))
        .route("/participants", get(participants::list))
        .route("/messages", post(messages::post_message))
        .route("/messages", get(messages::get_messages))
        .route("/status", post(status::heartbeat))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
