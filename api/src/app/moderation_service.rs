//! Moderation service
//!
//! Outward operations on the managed video: metadata, comment listing,
//! posting and deleting. Validation happens before any upstream call, and
//! every successful call is followed by exactly one audit entry.

use serde_json::json;
use std::sync::Arc;

use crate::app::{AuditLog, CommentDeleter, FetchMode, PageAggregator};
use crate::domain::entities::{
    AuditAction, CommentListing, PostedComment, ResourceKind, Video, VideoListResponse,
    VideoUpdate,
};
use crate::domain::ports::{AuditLogRepository, YouTubeClient};
use crate::error::AppError;

pub const MISSING_TOKEN: &str = "Missing YOUTUBE_ACCESS_TOKEN in env";
pub const MISSING_VIDEO_ID: &str = "Missing VIDEO_ID in env";

/// Parameters of a comment listing request
#[derive(Debug, Clone, PartialEq)]
pub struct ListComments {
    pub mode: FetchMode,
    pub max_results: Option<u32>,
    pub page_token: Option<String>,
}

/// Service for moderating the managed video
pub struct ModerationService<U, A>
where
    U: YouTubeClient,
    A: AuditLogRepository,
{
    youtube: Arc<U>,
    aggregator: PageAggregator<U>,
    deleter: CommentDeleter<U>,
    audit: AuditLog<A>,
    video_id: Option<String>,
}

impl<U, A> ModerationService<U, A>
where
    U: YouTubeClient,
    A: AuditLogRepository,
{
    pub fn new(youtube: Arc<U>, audit: AuditLog<A>, video_id: Option<String>) -> Self {
        Self {
            aggregator: PageAggregator::new(youtube.clone()),
            deleter: CommentDeleter::new(youtube.clone()),
            youtube,
            audit,
            video_id,
        }
    }

    pub fn with_safety_limit(mut self, safety_limit: usize) -> Self {
        self.aggregator = self.aggregator.with_safety_limit(safety_limit);
        self
    }

    fn require_video_id(&self) -> Result<&str, AppError> {
        self.video_id
            .as_deref()
            .ok_or_else(|| AppError::BadRequest(MISSING_VIDEO_ID.to_string()))
    }

    fn require_credential(&self) -> Result<(), AppError> {
        if self.youtube.has_credential() {
            Ok(())
        } else {
            Err(AppError::Unauthorized(MISSING_TOKEN.to_string()))
        }
    }

    /// Fetch snippet and statistics of the managed video
    pub async fn fetch_video(&self) -> Result<VideoListResponse, AppError> {
        let video_id = self.require_video_id()?;

        let video = self.youtube.get_video(video_id).await?;

        self.audit
            .record(AuditAction::FetchVideoDetails, json!({}))
            .await;
        Ok(video)
    }

    /// Replace title and description of the managed video
    pub async fn update_video(&self, update: VideoUpdate) -> Result<Video, AppError> {
        self.require_credential()?;
        let video_id = self.require_video_id()?;

        let video = self.youtube.update_video(video_id, &update).await?;

        self.audit
            .record(
                AuditAction::UpdateVideoDetails,
                json!({ "title": update.title, "description": update.description }),
            )
            .await;
        Ok(video)
    }

    /// List comment threads, one page or all of them
    pub async fn list_comments(&self, request: ListComments) -> Result<CommentListing, AppError> {
        let video_id = self.require_video_id()?;

        let listing = self
            .aggregator
            .aggregate(
                request.mode,
                video_id,
                request.max_results,
                request.page_token.clone(),
            )
            .await?;

        match &listing {
            CommentListing::Page(page) => {
                self.audit
                    .record(
                        AuditAction::FetchCommentsPage,
                        json!({ "pageToken": request.page_token, "count": page.items.len() }),
                    )
                    .await
            }
            CommentListing::Aggregated(result) => {
                self.audit
                    .record(
                        AuditAction::FetchCommentsAll,
                        json!({ "total": result.items.len(), "fetchedAll": result.fetched_all }),
                    )
                    .await
            }
        }
        Ok(listing)
    }

    /// Post a top-level comment, or a reply when `parent_id` is set
    pub async fn post_comment(
        &self,
        text: &str,
        parent_id: Option<&str>,
    ) -> Result<PostedComment, AppError> {
        self.require_credential()?;
        if text.trim().is_empty() {
            return Err(AppError::BadRequest("Comment text required".to_string()));
        }
        if parent_id.is_some_and(|p| p.trim().is_empty()) {
            return Err(AppError::BadRequest("Parent comment id required".to_string()));
        }

        let posted = match parent_id {
            Some(parent_id) => {
                PostedComment::Reply(self.youtube.create_reply(parent_id, text).await?)
            }
            None => {
                let video_id = self.require_video_id()?;
                PostedComment::Thread(self.youtube.create_comment_thread(video_id, text).await?)
            }
        };

        self.audit
            .record(
                AuditAction::PostComment,
                json!({ "text": text, "parentId": parent_id }),
            )
            .await;
        Ok(posted)
    }

    /// Delete a comment or, failing that, a thread with the same id
    pub async fn delete_comment(&self, id: &str) -> Result<ResourceKind, AppError> {
        self.require_credential()?;
        if id.trim().is_empty() {
            return Err(AppError::BadRequest("Comment id required".to_string()));
        }

        let deleted = self.deleter.delete(id).await?;

        tracing::info!(id, deleted = %deleted, "Deleted from YouTube");
        self.audit
            .record(deleted.delete_action(), json!({ "id": id }))
            .await;
        Ok(deleted)
    }
}
