//! Video handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::domain::entities::{Video, VideoListResponse, VideoUpdate};
use crate::domain::ports::{AuditLogRepository, NoteRepository, YouTubeClient};
use crate::error::AppError;
use crate::AppState;

/// GET /api/video
///
/// Snippet and statistics of the configured video, as YouTube returns them.
pub async fn get_video<U, A, N>(
    State(state): State<AppState<U, A, N>>,
) -> Result<Json<VideoListResponse>, AppError>
where
    U: YouTubeClient + 'static,
    A: AuditLogRepository + 'static,
    N: NoteRepository + 'static,
{
    let video = state.moderation.fetch_video().await?;
    Ok(Json(video))
}

/// PUT /api/video
pub async fn update_video<U, A, N>(
    State(state): State<AppState<U, A, N>>,
    req: Result<Json<VideoUpdate>, JsonRejection>,
) -> Result<Json<Video>, AppError>
where
    U: YouTubeClient + 'static,
    A: AuditLogRepository + 'static,
    N: NoteRepository + 'static,
{
    let Json(req) = req?;
    let video = state.moderation.update_video(req).await?;
    Ok(Json(video))
}
