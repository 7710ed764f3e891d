//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{AuditEntry, NewAuditEntry, NewNote, Note};
use crate::error::DomainError;

/// Append-only store for audit entries
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    /// Append an entry; the store assigns id and timestamp
    async fn append(&self, entry: &NewAuditEntry) -> Result<AuditEntry, DomainError>;
}

/// Repository for Note entities
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Create a new note
    async fn create(&self, note: &NewNote) -> Result<Note, DomainError>;

    /// Notes whose content matches a case-insensitive regular expression,
    /// newest first. `None` matches every note.
    async fn search(&self, pattern: Option<&str>) -> Result<Vec<Note>, DomainError>;
}
