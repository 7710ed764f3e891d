//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod audit;
pub mod comment;
pub mod note;
pub mod video;

pub use audit::{AuditAction, AuditEntry, AuditEntryId, NewAuditEntry};
pub use comment::{
    AggregationResult, Comment, CommentListing, CommentSnippet, CommentThread, CommentThreadPage,
    PostedComment, ResourceKind, ThreadReplies, ThreadSnippet,
};
pub use note::{NewNote, Note, NoteId};
pub use video::{Video, VideoListResponse, VideoSnippet, VideoStatistics, VideoUpdate};
