//! # batepapo-db
//!
//! Database layer implementing the repository traits with SQLite via SQLx.
//!
//! ## Overview
//!
//! This crate provides SQLite implementations for the repository traits
//! defined in `batepapo-core`. It handles:
//!
//! - Connection pool management and schema setup
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_memory_pool, create_pool, DatabaseConfig, DbPool};
pub use repositories::{SqliteMessageRepository, SqliteParticipantRepository};
