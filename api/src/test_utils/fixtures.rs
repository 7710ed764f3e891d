//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{TimeZone, Utc};
use serde_json::Map;

use crate::domain::entities::{
    Comment, CommentSnippet, CommentThread, CommentThreadPage, ThreadSnippet, Video,
    VideoListResponse, VideoSnippet, VideoStatistics,
};

/// Create a comment with the given id and text
pub fn test_comment(id: &str, parent_id: Option<&str>, text: &str) -> Comment {
    Comment {
        id: id.to_string(),
        snippet: CommentSnippet {
            author_display_name: Some("Test Author".to_string()),
            parent_id: parent_id.map(str::to_string),
            text_display: Some(text.to_string()),
            text_original: Some(text.to_string()),
            published_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()),
            extra: Map::new(),
        },
        extra: Map::new(),
    }
}

/// Create a comment thread without replies
pub fn test_thread(id: &str, video_id: &str, text: &str) -> CommentThread {
    CommentThread {
        id: id.to_string(),
        snippet: ThreadSnippet {
            video_id: Some(video_id.to_string()),
            top_level_comment: test_comment(id, None, text),
            total_reply_count: Some(0),
            extra: Map::new(),
        },
        replies: None,
        extra: Map::new(),
    }
}

/// Create a page of `count` threads with ids `{prefix}-0..`
pub fn test_page(prefix: &str, count: usize, next_page_token: Option<&str>) -> CommentThreadPage {
    CommentThreadPage {
        items: (0..count)
            .map(|i| test_thread(&format!("{}-{}", prefix, i), "vid-1", "hello"))
            .collect(),
        next_page_token: next_page_token.map(str::to_string),
        extra: Map::new(),
    }
}

/// Create a video resource
pub fn test_video(id: &str, title: &str, description: &str) -> Video {
    Video {
        id: id.to_string(),
        snippet: Some(VideoSnippet {
            title: title.to_string(),
            description: description.to_string(),
            channel_title: Some("Test Channel".to_string()),
            extra: Map::new(),
        }),
        statistics: Some(VideoStatistics {
            view_count: Some("42".to_string()),
            like_count: Some("7".to_string()),
            comment_count: Some("3".to_string()),
            extra: Map::new(),
        }),
        extra: Map::new(),
    }
}

/// Create a videos.list response holding one video
pub fn test_video_list(id: &str) -> VideoListResponse {
    VideoListResponse {
        items: vec![test_video(id, "Test Video", "A video for tests")],
        extra: Map::new(),
    }
}
