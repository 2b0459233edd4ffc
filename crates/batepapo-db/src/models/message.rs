//! Message database model

use sqlx::FromRow;

/// Database model for the messages table
///
/// `sent_at` is stored as unix-epoch milliseconds; `id` is the append order.
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub sender: String,
    pub recipient: String,
    pub body: String,
    pub kind: String,
    pub sent_at: i64,
}
