//! Participant database model

use sqlx::FromRow;

/// Database model for the participants table
///
/// `last_seen` is stored as unix-epoch milliseconds.
#[derive(Debug, Clone, FromRow)]
pub struct ParticipantModel {
    pub name: String,
    pub last_seen: i64,
}
