//! Note service
//!
//! Stores free-form annotations for the managed video and searches them.

use regex::RegexBuilder;
use serde_json::json;
use std::sync::Arc;

use crate::app::AuditLog;
use crate::domain::entities::{AuditAction, NewNote, Note};
use crate::domain::ports::{AuditLogRepository, NoteRepository};
use crate::error::AppError;

pub struct NoteService<N, A>
where
    N: NoteRepository,
    A: AuditLogRepository,
{
    notes: Arc<N>,
    audit: AuditLog<A>,
    video_id: Option<String>,
}

impl<N, A> NoteService<N, A>
where
    N: NoteRepository,
    A: AuditLogRepository,
{
    pub fn new(notes: Arc<N>, audit: AuditLog<A>, video_id: Option<String>) -> Self {
        Self {
            notes,
            audit,
            video_id,
        }
    }

    /// Store a note against the managed video
    pub async fn add_note(&self, content: &str, tags: Vec<String>) -> Result<Note, AppError> {
        let new_note = NewNote::new(self.video_id.clone(), content, tags)?;

        let note = self.notes.create(&new_note).await?;

        self.audit
            .record(
                AuditAction::AddNote,
                json!({ "content": note.content, "tags": note.tags }),
            )
            .await;
        Ok(note)
    }

    /// Notes matching a case-insensitive pattern; blank matches everything
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Note>, AppError> {
        let pattern = query.filter(|q| !q.is_empty());

        if let Some(pattern) = pattern {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| AppError::BadRequest(format!("Invalid search pattern: {}", e)))?;
        }

        Ok(self.notes.search(pattern).await?)
    }
}
