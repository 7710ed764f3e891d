//! Audit log domain entity
//!
//! An append-only record of actions taken against the managed video.
//! Entries are written after the upstream call succeeded and never changed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Unique identifier for an audit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuditEntryId(pub Uuid);

impl AuditEntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AuditEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuditEntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Action recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditAction {
    #[serde(rename = "FETCH_VIDEO_DETAILS")]
    FetchVideoDetails,
    #[serde(rename = "POST_COMMENT")]
    PostComment,
    #[serde(rename = "FETCH_COMMENTS_PAGE")]
    FetchCommentsPage,
    #[serde(rename = "FETCH_COMMENTS_ALL")]
    FetchCommentsAll,
    #[serde(rename = "DELETE_COMMENT")]
    DeleteComment,
    #[serde(rename = "DELETE_COMMENTTHREAD")]
    DeleteCommentThread,
    #[serde(rename = "UPDATE_VIDEO_DETAILS")]
    UpdateVideoDetails,
    #[serde(rename = "ADD_NOTE")]
    AddNote,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::FetchVideoDetails => "FETCH_VIDEO_DETAILS",
            AuditAction::PostComment => "POST_COMMENT",
            AuditAction::FetchCommentsPage => "FETCH_COMMENTS_PAGE",
            AuditAction::FetchCommentsAll => "FETCH_COMMENTS_ALL",
            AuditAction::DeleteComment => "DELETE_COMMENT",
            AuditAction::DeleteCommentThread => "DELETE_COMMENTTHREAD",
            AuditAction::UpdateVideoDetails => "UPDATE_VIDEO_DETAILS",
            AuditAction::AddNote => "ADD_NOTE",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AuditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FETCH_VIDEO_DETAILS" => Ok(AuditAction::FetchVideoDetails),
            "POST_COMMENT" => Ok(AuditAction::PostComment),
            "FETCH_COMMENTS_PAGE" => Ok(AuditAction::FetchCommentsPage),
            "FETCH_COMMENTS_ALL" => Ok(AuditAction::FetchCommentsAll),
            "DELETE_COMMENT" => Ok(AuditAction::DeleteComment),
            "DELETE_COMMENTTHREAD" => Ok(AuditAction::DeleteCommentThread),
            "UPDATE_VIDEO_DETAILS" => Ok(AuditAction::UpdateVideoDetails),
            "ADD_NOTE" => Ok(AuditAction::AddNote),
            _ => Err(format!("Unknown audit action: {}", s)),
        }
    }
}

/// A stored audit entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: AuditEntryId,
    pub action: AuditAction,
    /// Action-specific metadata; keys vary by action
    pub meta: Value,
    pub created_at: DateTime<Utc>,
}

/// Data for appending a new audit entry
#[derive(Debug, Clone, PartialEq)]
pub struct NewAuditEntry {
    pub action: AuditAction,
    pub meta: Value,
}
