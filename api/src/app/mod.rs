//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod audit_log;
pub mod comment_deleter;
pub mod moderation_service;
pub mod note_service;
pub mod page_aggregator;

pub use audit_log::AuditLog;
pub use comment_deleter::CommentDeleter;
pub use moderation_service::{ListComments, ModerationService};
pub use note_service::NoteService;
pub use page_aggregator::{FetchMode, PageAggregator, SAFETY_LIMIT};
