//! Integration test utilities for the batepapo server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with an in-memory database.

pub mod helpers;

pub use helpers::*;
