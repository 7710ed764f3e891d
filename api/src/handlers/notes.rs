//! Note handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use serde::Deserialize;

use crate::domain::entities::Note;
use crate::domain::ports::{AuditLogRepository, NoteRepository, YouTubeClient};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddNoteRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchNotesQuery {
    pub q: Option<String>,
}

/// POST /api/note
pub async fn add_note<U, A, N>(
    State(state): State<AppState<U, A, N>>,
    req: Result<Json<AddNoteRequest>, JsonRejection>,
) -> Result<Json<Note>, AppError>
where
    U: YouTubeClient + 'static,
    A: AuditLogRepository + 'static,
    N: NoteRepository + 'static,
{
    let Json(req) = req?;
    let note = state.notes.add_note(&req.content, req.tags).await?;
    Ok(Json(note))
}

/// GET /api/note/search?q=<pattern>
///
/// Case-insensitive regex search over note content, newest first.
pub async fn search_notes<U, A, N>(
    State(state): State<AppState<U, A, N>>,
    query: Result<Query<SearchNotesQuery>, QueryRejection>,
) -> Result<Json<Vec<Note>>, AppError>
where
    U: YouTubeClient + 'static,
    A: AuditLogRepository + 'static,
    N: NoteRepository + 'static,
{
    let Query(query) = query?;
    let notes = state.notes.search(query.q.as_deref()).await?;
    Ok(Json(notes))
}
