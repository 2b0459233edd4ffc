//! Message handlers
//!
//! Endpoints for posting room messages and reading them back.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use batepapo_service::{MessageResponse, MessageService, PostMessageRequest};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Post a message
///
/// POST /messages (sender in the `User` header)
pub async fn post_message(
    State(state): State<AppState>,
    CurrentUser(from): CurrentUser,
    ValidatedJson(request): ValidatedJson<PostMessageRequest>,
) -> ApiResult<Created<()>> {
    let service = MessageService::new(state.service_context());
    service.post(&from, request).await?;
    Ok(Created(()))
}

/// List the messages visible to the requester, newest first
///
/// GET /messages?limit=N (requester in the `User` header)
pub async fn get_messages(
    State(state): State<AppState>,
    CurrentUser(requester): CurrentUser,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    // Parse the limit by hand so a malformed value is a 422, not a 400.
    let limit = params
        .get("limit")
        .map(|raw| {
            raw.parse::<i64>()
                .map_err(|_| ApiError::invalid_query(format!("Invalid limit: {raw}")))
        })
        .transpose()?;

    let service = MessageService::new(state.service_context());
    let messages = service.visible_to(&requester, limit).await?;
    Ok(Json(messages))
}
