//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod audit_log_repo;
pub mod note_repo;
pub mod schema;


pub use audit_log_repo::PostgresAuditLogRepository;
pub use note_repo::PostgresNoteRepository;
pub use schema::ensure_schema;
