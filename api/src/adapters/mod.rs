//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod youtube;

pub use postgres::{ensure_schema, PostgresAuditLogRepository, PostgresNoteRepository};
pub use youtube::{YouTubeClientImpl, YouTubeCredentials};
