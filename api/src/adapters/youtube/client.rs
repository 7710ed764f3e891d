//! YouTube Data API client implementation

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{
    Comment, CommentThread, CommentThreadPage, Video, VideoListResponse, VideoUpdate,
};
use crate::domain::ports::YouTubeClient;
use crate::error::YouTubeError;

/// Credentials shared by every upstream call
#[derive(Debug, Clone, Default)]
pub struct YouTubeCredentials {
    /// OAuth bearer token (youtube.force-ssl scope)
    pub access_token: Option<String>,
    /// API key for unauthenticated reads
    pub api_key: Option<String>,
}

/// Implementation of the YouTube Data API client
pub struct YouTubeClientImpl {
    http: Client,
    base_url: String,
    credentials: YouTubeCredentials,
}

impl YouTubeClientImpl {
    pub fn new(base_url: String, credentials: YouTubeCredentials) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer token when available, otherwise the API key as a query param
    fn read_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match (&self.credentials.access_token, &self.credentials.api_key) {
            (Some(token), _) => request.header("Authorization", format!("Bearer {}", token)),
            (None, Some(key)) => request.query(&[("key", key.as_str())]),
            (None, None) => request,
        }
    }

    fn write_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials.access_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, YouTubeError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| YouTubeError::Deserialization(e.to_string()))
        } else {
            Err(api_error(status.as_u16(), response).await)
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), YouTubeError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(api_error(status.as_u16(), response).await)
        }
    }
}

/// Keep the upstream error payload as JSON; wrap plain text bodies as a string
async fn api_error(status: u16, response: reqwest::Response) -> YouTubeError {
    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
    YouTubeError::Api { status, body }
}

/// Request types for the YouTube Data API
#[derive(Serialize)]
struct UpdateVideoRequest<'a> {
    id: &'a str,
    snippet: UpdateVideoSnippet<'a>,
}

#[derive(Serialize)]
struct UpdateVideoSnippet<'a> {
    title: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TextSnippet<'a> {
    text_original: &'a str,
}

#[derive(Serialize)]
struct CreateReplyRequest<'a> {
    snippet: CreateReplySnippet<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateReplySnippet<'a> {
    parent_id: &'a str,
    text_original: &'a str,
}

#[derive(Serialize)]
struct CreateThreadRequest<'a> {
    snippet: CreateThreadSnippet<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateThreadSnippet<'a> {
    video_id: &'a str,
    top_level_comment: TopLevelComment<'a>,
}

#[derive(Serialize)]
struct TopLevelComment<'a> {
    snippet: TextSnippet<'a>,
}

#[async_trait]
impl YouTubeClient for YouTubeClientImpl {
    fn has_credential(&self) -> bool {
        self.credentials.access_token.is_some()
    }

    async fn get_video(&self, video_id: &str) -> Result<VideoListResponse, YouTubeError> {
        let request = self
            .http
            .get(self.api_url("/videos"))
            .query(&[("part", "snippet,statistics"), ("id", video_id)]);

        let resp = self.read_auth(request).send().await?;

        self.handle_response(resp).await
    }

    async fn update_video(
        &self,
        video_id: &str,
        update: &VideoUpdate,
    ) -> Result<Video, YouTubeError> {
        let request = self
            .http
            .put(self.api_url("/videos"))
            .query(&[("part", "snippet")])
            .json(&UpdateVideoRequest {
                id: video_id,
                snippet: UpdateVideoSnippet {
                    title: &update.title,
                    description: &update.description,
                },
            });

        let resp = self.write_auth(request).send().await?;

        self.handle_response(resp).await
    }

    async fn list_comment_threads(
        &self,
        video_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentThreadPage, YouTubeError> {
        let page_size = page_size.to_string();
        let mut request = self.http.get(self.api_url("/commentThreads")).query(&[
            ("part", "snippet,replies"),
            ("videoId", video_id),
            ("maxResults", page_size.as_str()),
        ]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let resp = self.read_auth(request).send().await?;

        self.handle_response(resp).await
    }

    async fn create_comment_thread(
        &self,
        video_id: &str,
        text: &str,
    ) -> Result<CommentThread, YouTubeError> {
        let request = self
            .http
            .post(self.api_url("/commentThreads"))
            .query(&[("part", "snippet")])
            .json(&CreateThreadRequest {
                snippet: CreateThreadSnippet {
                    video_id,
                    top_level_comment: TopLevelComment {
                        snippet: TextSnippet {
                            text_original: text,
                        },
                    },
                },
            });

        let resp = self.write_auth(request).send().await?;

        self.handle_response(resp).await
    }

    async fn create_reply(&self, parent_id: &str, text: &str) -> Result<Comment, YouTubeError> {
        let request = self
            .http
            .post(self.api_url("/comments"))
            .query(&[("part", "snippet")])
            .json(&CreateReplyRequest {
                snippet: CreateReplySnippet {
                    parent_id,
                    text_original: text,
                },
            });

        let resp = self.write_auth(request).send().await?;

        self.handle_response(resp).await
    }

    async fn delete_comment(&self, id: &str) -> Result<(), YouTubeError> {
        let request = self
            .http
            .delete(self.api_url("/comments"))
            .query(&[("id", id)]);

        let resp = self.write_auth(request).send().await?;

        self.handle_empty_response(resp).await
    }

    async fn delete_comment_thread(&self, id: &str) -> Result<(), YouTubeError> {
        let request = self
            .http
            .delete(self.api_url("/commentThreads"))
            .query(&[("id", id)]);

        let resp = self.write_auth(request).send().await?;

        self.handle_empty_response(resp).await
    }
}
