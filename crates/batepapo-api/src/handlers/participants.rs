//! Participant handlers
//!
//! Endpoints for room registration and listing active participants.

use axum::{extract::State, Json};
use batepapo_service::{ParticipantResponse, ParticipantService, RegisterRequest};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a participant in the room
///
/// POST /participants
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<ParticipantResponse>>> {
    let service = ParticipantService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// List all active participants
///
/// GET /participants
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<ParticipantResponse>>> {
    let service = ParticipantService::new(state.service_context());
    let participants = service.list().await?;
    Ok(Json(participants))
}
