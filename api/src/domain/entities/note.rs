//! Note domain entity
//!
//! Free-form annotations kept next to the managed video.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Unique identifier for a note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(pub Uuid);

/// A stored note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub video_id: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new note
#[derive(Debug, Clone, PartialEq)]
pub struct NewNote {
    pub video_id: Option<String>,
    pub content: String,
    pub tags: Vec<String>,
}

impl NewNote {
    /// Build a note, rejecting blank content. Tags are trimmed and blanks dropped.
    pub fn new(
        video_id: Option<String>,
        content: &str,
        tags: Vec<String>,
    ) -> Result<Self, DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::Validation("Note content required".to_string()));
        }

        let tags = tags
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Self {
            video_id,
            content: content.to_string(),
            tags,
        })
    }
}
