//! Entity ↔ Model mappers

mod message;
mod participant;

pub use message::datetime_from_millis;
