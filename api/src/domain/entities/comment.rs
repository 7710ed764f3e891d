//! Comment domain entities
//!
//! Comment threads live on YouTube (source of truth). These types mirror the
//! parts of the upstream payload the console reasons about; every other field
//! is kept in `extra` so a page can be handed back to the caller verbatim.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::AuditAction;

/// A single comment: either the top-level comment of a thread or a reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub snippet: CommentSnippet,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_display_name: Option<String>,
    /// Thread id for replies, absent on top-level comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A top-level comment plus its nested replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    pub id: String,
    pub snippet: ThreadSnippet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replies: Option<ThreadReplies>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSnippet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub top_level_comment: Comment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_reply_count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadReplies {
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// One page of the upstream comment thread listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadPage {
    #[serde(default)]
    pub items: Vec<CommentThread>,
    /// Opaque cursor for the next page; absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Threads collected across several pages
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationResult {
    /// Upstream order, page after page
    pub items: Vec<CommentThread>,
    /// Last token seen; `None` once the listing is exhausted
    pub next_page_token: Option<String>,
    /// True iff aggregation stopped because no further page existed
    pub fetched_all: bool,
}

/// Response of a comment listing: the raw page or the aggregated result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CommentListing {
    Page(CommentThreadPage),
    Aggregated(AggregationResult),
}

/// What a successful post returned upstream
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PostedComment {
    Thread(CommentThread),
    Reply(Comment),
}

/// The kind of resource a delete actually removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Comment,
    CommentThread,
}

impl ResourceKind {
    /// Audit action recorded once a delete of this kind succeeded
    pub fn delete_action(&self) -> AuditAction {
        match self {
            ResourceKind::Comment => AuditAction::DeleteComment,
            ResourceKind::CommentThread => AuditAction::DeleteCommentThread,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Comment => write!(f, "comment"),
            ResourceKind::CommentThread => write!(f, "commentThread"),
        }
    }
}
