//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use regex::RegexBuilder;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::fixtures::{test_comment, test_thread, test_video, test_video_list};
use crate::domain::entities::{
    AuditEntry, AuditEntryId, Comment, CommentThread, CommentThreadPage, NewAuditEntry, NewNote,
    Note, NoteId, Video, VideoListResponse, VideoUpdate,
};
use crate::domain::ports::{AuditLogRepository, NoteRepository, YouTubeClient};
use crate::error::{DomainError, YouTubeError};

// ============================================================================
// Mock YouTube Client
// ============================================================================

/// One recorded upstream call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamCall {
    GetVideo(String),
    UpdateVideo {
        video_id: String,
        title: String,
        description: String,
    },
    ListCommentThreads {
        video_id: String,
        page_size: u32,
        page_token: Option<String>,
    },
    CreateCommentThread {
        video_id: String,
        text: String,
    },
    CreateReply {
        parent_id: String,
        text: String,
    },
    DeleteComment(String),
    DeleteCommentThread(String),
}

/// Page served for a token, or the status to fail with
type PageResult = Result<CommentThreadPage, u16>;

fn upstream_error(status: u16) -> YouTubeError {
    YouTubeError::Api {
        status,
        body: json!({ "error": { "code": status, "message": "mock upstream failure" } }),
    }
}

/// A mock YouTube client that records calls and returns configured responses
pub struct MockYouTubeClient {
    credential: bool,
    /// Pages keyed by the token that requests them (`None` = first page)
    pages: HashMap<Option<String>, PageResult>,
    video: Option<VideoListResponse>,
    comment_delete_status: Option<u16>,
    thread_delete_status: Option<u16>,
    /// Failure status for posts and video updates
    write_status: Option<u16>,
    calls: Arc<RwLock<Vec<UpstreamCall>>>,
}

impl Default for MockYouTubeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockYouTubeClient {
    /// A client with a credential where every call succeeds
    pub fn new() -> Self {
        Self {
            credential: true,
            pages: HashMap::new(),
            video: None,
            comment_delete_status: None,
            thread_delete_status: None,
            write_status: None,
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn without_credential(mut self) -> Self {
        self.credential = false;
        self
    }

    /// Serve `page` when `token` is requested
    pub fn with_page(mut self, token: Option<&str>, page: CommentThreadPage) -> Self {
        self.pages.insert(token.map(str::to_string), Ok(page));
        self
    }

    /// Fail with `status` when `token` is requested
    pub fn with_failing_page(mut self, token: Option<&str>, status: u16) -> Self {
        self.pages.insert(token.map(str::to_string), Err(status));
        self
    }

    pub fn with_video(mut self, video: VideoListResponse) -> Self {
        self.video = Some(video);
        self
    }

    pub fn with_comment_delete_status(mut self, status: u16) -> Self {
        self.comment_delete_status = Some(status);
        self
    }

    pub fn with_thread_delete_status(mut self, status: u16) -> Self {
        self.thread_delete_status = Some(status);
        self
    }

    pub fn with_write_status(mut self, status: u16) -> Self {
        self.write_status = Some(status);
        self
    }

    /// Every upstream call made so far, in order
    pub fn calls(&self) -> Vec<UpstreamCall> {
        self.calls.read().unwrap().clone()
    }

    /// Page tokens requested so far, in order
    pub fn list_tokens(&self) -> Vec<Option<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                UpstreamCall::ListCommentThreads { page_token, .. } => Some(page_token),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: UpstreamCall) {
        self.calls.write().unwrap().push(call);
    }

    fn check_write(&self) -> Result<(), YouTubeError> {
        match self.write_status {
            Some(status) => Err(upstream_error(status)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl YouTubeClient for MockYouTubeClient {
    fn has_credential(&self) -> bool {
        self.credential
    }

    async fn get_video(&self, video_id: &str) -> Result<VideoListResponse, YouTubeError> {
        self.record(UpstreamCall::GetVideo(video_id.to_string()));
        Ok(self
            .video
            .clone()
            .unwrap_or_else(|| test_video_list(video_id)))
    }

    async fn update_video(
        &self,
        video_id: &str,
        update: &VideoUpdate,
    ) -> Result<Video, YouTubeError> {
        self.record(UpstreamCall::UpdateVideo {
            video_id: video_id.to_string(),
            title: update.title.clone(),
            description: update.description.clone(),
        });
        self.check_write()?;
        Ok(test_video(video_id, &update.title, &update.description))
    }

    async fn list_comment_threads(
        &self,
        video_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentThreadPage, YouTubeError> {
        self.record(UpstreamCall::ListCommentThreads {
            video_id: video_id.to_string(),
            page_size,
            page_token: page_token.map(str::to_string),
        });

        match self.pages.get(&page_token.map(str::to_string)) {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(status)) => Err(upstream_error(*status)),
            None => Err(upstream_error(400)),
        }
    }

    async fn create_comment_thread(
        &self,
        video_id: &str,
        text: &str,
    ) -> Result<CommentThread, YouTubeError> {
        self.record(UpstreamCall::CreateCommentThread {
            video_id: video_id.to_string(),
            text: text.to_string(),
        });
        self.check_write()?;
        Ok(test_thread("new-thread", video_id, text))
    }

    async fn create_reply(&self, parent_id: &str, text: &str) -> Result<Comment, YouTubeError> {
        self.record(UpstreamCall::CreateReply {
            parent_id: parent_id.to_string(),
            text: text.to_string(),
        });
        self.check_write()?;
        Ok(test_comment(
            &format!("{}.new-reply", parent_id),
            Some(parent_id),
            text,
        ))
    }

    async fn delete_comment(&self, id: &str) -> Result<(), YouTubeError> {
        self.record(UpstreamCall::DeleteComment(id.to_string()));
        match self.comment_delete_status {
            Some(status) => Err(upstream_error(status)),
            None => Ok(()),
        }
    }

    async fn delete_comment_thread(&self, id: &str) -> Result<(), YouTubeError> {
        self.record(UpstreamCall::DeleteCommentThread(id.to_string()));
        match self.thread_delete_status {
            Some(status) => Err(upstream_error(status)),
            None => Ok(()),
        }
    }
}

// ============================================================================
// In-Memory Audit Log Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryAuditLogRepository {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
    should_fail: bool,
}

impl InMemoryAuditLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail
    pub fn failing() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            should_fail: true,
        }
    }

    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.read().unwrap().clone()
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryAuditLogRepository {
    async fn append(&self, entry: &NewAuditEntry) -> Result<AuditEntry, DomainError> {
        if self.should_fail {
            return Err(DomainError::Database("audit store unavailable".to_string()));
        }

        let stored = AuditEntry {
            id: AuditEntryId::new(),
            action: entry.action,
            meta: entry.meta.clone(),
            created_at: Utc::now(),
        };
        self.entries.write().unwrap().push(stored.clone());
        Ok(stored)
    }
}

// ============================================================================
// In-Memory Note Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: Arc<RwLock<Vec<Note>>>,
}

impl InMemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn create(&self, note: &NewNote) -> Result<Note, DomainError> {
        let stored = Note {
            id: NoteId(uuid::Uuid::new_v4()),
            video_id: note.video_id.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
            created_at: Utc::now(),
        };
        self.notes.write().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn search(&self, pattern: Option<&str>) -> Result<Vec<Note>, DomainError> {
        let regex = pattern
            .map(|p| RegexBuilder::new(p).case_insensitive(true).build())
            .transpose()
            .map_err(|e| DomainError::Validation(e.to_string()))?;

        let notes = self.notes.read().unwrap();
        Ok(notes
            .iter()
            .rev()
            .filter(|n| regex.as_ref().map_or(true, |r| r.is_match(&n.content)))
            .cloned()
            .collect())
    }
}
