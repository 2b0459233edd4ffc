//! Heartbeat handler
//!
//! Endpoint participants call periodically to stay in the room.

use axum::{extract::State, http::StatusCode};
use batepapo_service::ParticipantService;

use crate::extractors::CurrentUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Refresh the caller's heartbeat
///
/// POST /status (participant in the `User` header); 404 tells the client
/// they were evicted and must register again.
pub async fn heartbeat(
    State(state): State<AppState>,
    CurrentUser(name): CurrentUser,
) -> ApiResult<StatusCode> {
    let service = ParticipantService::new(state.service_context());
    service.heartbeat(&name).await?;
    Ok(StatusCode::OK)
}
