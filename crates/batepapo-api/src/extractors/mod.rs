//! Axum extractors for request handling
//!
//! Custom extractors for sender identification and validation.

mod user;
mod validated;

pub use user::CurrentUser;
pub use validated::ValidatedJson;
