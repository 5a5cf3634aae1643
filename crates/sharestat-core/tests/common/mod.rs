//! Shared helpers for integration tests.

pub mod count_server;
pub mod fixtures;
