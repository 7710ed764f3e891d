//! Comment handlers
//!
//! Listing, posting and deleting comments on the configured video.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::{FetchMode, ListComments};
use crate::domain::entities::{CommentListing, PostedComment, ResourceKind};
use crate::domain::ports::{AuditLogRepository, NoteRepository, YouTubeClient};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing comments
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsQuery {
    /// Only the literal `true` selects full aggregation
    pub all: Option<String>,
    pub max_results: Option<u32>,
    pub page_token: Option<String>,
}

impl From<ListCommentsQuery> for ListComments {
    fn from(query: ListCommentsQuery) -> Self {
        let mode = match query.all.as_deref() {
            Some("true") => FetchMode::All,
            _ => FetchMode::Single,
        };
        ListComments {
            mode,
            max_results: query.max_results,
            page_token: query.page_token.filter(|t| !t.is_empty()),
        }
    }
}

/// Request to post a comment or reply
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentRequest {
    #[serde(default)]
    pub text: String,
    pub parent_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteCommentResponse {
    pub id: String,
    pub deleted: ResourceKind,
}

/// GET /api/comments
///
/// One page of comment threads, or every page when `all=true`.
pub async fn list_comments<U, A, N>(
    State(state): State<AppState<U, A, N>>,
    query: Result<Query<ListCommentsQuery>, QueryRejection>,
) -> Result<Json<CommentListing>, AppError>
where
    U: YouTubeClient + 'static,
    A: AuditLogRepository + 'static,
    N: NoteRepository + 'static,
{
    let Query(query) = query?;
    let listing = state.moderation.list_comments(query.into()).await?;
    Ok(Json(listing))
}

/// POST /api/comment
pub async fn post_comment<U, A, N>(
    State(state): State<AppState<U, A, N>>,
    req: Result<Json<PostCommentRequest>, JsonRejection>,
) -> Result<Json<PostedComment>, AppError>
where
    U: YouTubeClient + 'static,
    A: AuditLogRepository + 'static,
    N: NoteRepository + 'static,
{
    let Json(req) = req?;
    // An empty parentId means a top-level post; anything else is a reply
    let parent_id = req.parent_id.as_deref().filter(|p| !p.is_empty());
    let posted = state.moderation.post_comment(&req.text, parent_id).await?;
    Ok(Json(posted))
}

/// DELETE /api/comment/:id
///
/// Deletes a comment, or the thread with that id when YouTube rejects the
/// id as a comment.
pub async fn delete_comment<U, A, N>(
    State(state): State<AppState<U, A, N>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteCommentResponse>, AppError>
where
    U: YouTubeClient + 'static,
    A: AuditLogRepository + 'static,
    N: NoteRepository + 'static,
{
    let deleted = state.moderation.delete_comment(&id).await?;
    Ok(Json(DeleteCommentResponse { id, deleted }))
}
