//! HTTP request handlers

pub mod health;
pub mod messages;
pub mod participants;
pub mod status;
