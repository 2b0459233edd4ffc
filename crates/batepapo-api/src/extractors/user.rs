//! Current user extractor
//!
//! Identifies the calling participant from the `User` request header.
//! There is no authentication; the header is taken at face value and the
//! services decide whether the name belongs to an active participant.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::response::ApiError;

/// Header carrying the participant name
pub const USER_HEADER: &str = "user";

/// Participant name extracted from the `User` header
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let name = parts
            .headers
            .get(USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ApiError::MissingUserHeader)?;

        Ok(CurrentUser(name.to_string()))
    }
}
