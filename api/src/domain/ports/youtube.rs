//! YouTube client port trait
//!
//! Defines the call surface the console needs from the YouTube Data API.

use async_trait::async_trait;

use crate::domain::entities::{
    Comment, CommentThread, CommentThreadPage, Video, VideoListResponse, VideoUpdate,
};
use crate::error::YouTubeError;

/// Port trait for YouTube Data API operations
#[async_trait]
pub trait YouTubeClient: Send + Sync {
    /// Whether a bearer credential is configured. Mutating calls need one.
    fn has_credential(&self) -> bool;

    // Video

    /// Fetch snippet and statistics for a video
    async fn get_video(&self, video_id: &str) -> Result<VideoListResponse, YouTubeError>;

    /// Replace a video's title and description
    async fn update_video(
        &self,
        video_id: &str,
        update: &VideoUpdate,
    ) -> Result<Video, YouTubeError>;

    // Comments

    /// Fetch one page of comment threads (with replies) for a video
    async fn list_comment_threads(
        &self,
        video_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentThreadPage, YouTubeError>;

    /// Start a new top-level comment thread on a video
    async fn create_comment_thread(
        &self,
        video_id: &str,
        text: &str,
    ) -> Result<CommentThread, YouTubeError>;

    /// Reply to an existing comment thread
    async fn create_reply(&self, parent_id: &str, text: &str) -> Result<Comment, YouTubeError>;

    /// Delete a single comment by id
    async fn delete_comment(&self, id: &str) -> Result<(), YouTubeError>;

    /// Delete a whole comment thread by id
    async fn delete_comment_thread(&self, id: &str) -> Result<(), YouTubeError>;
}
