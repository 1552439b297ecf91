//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: SQLite-backed user repository using Diesel
//! - **directory**: HTTP client for the remote user list
//!
//! Adapters translate between domain types and infrastructure
//! representations. They contain no business logic.

pub mod directory;
pub mod persistence;
