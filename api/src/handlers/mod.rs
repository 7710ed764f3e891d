//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod comments;
pub mod notes;
pub mod video;

pub use comments::{delete_comment, list_comments, post_comment};
pub use notes::{add_note, search_notes};
pub use video::{get_video, update_video};
