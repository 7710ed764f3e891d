//! Unified error types for the video console API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `YouTubeError`: YouTube Data API client errors
//! - `DeleteError`: Outcome of a failed comment/thread delete
//! - `AppError`: Application layer errors (mapped to HTTP responses)

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// How the upstream API classified a failed call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamErrorKind {
    /// Missing, expired or invalid credential
    Unauthorized,
    /// Authenticated but not allowed to touch this resource
    Forbidden,
    /// Malformed identifier or parameters
    BadRequest,
    NotFound,
    /// Upstream 5xx or a transport failure
    ServerError,
    Other,
}

impl UpstreamErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => UpstreamErrorKind::BadRequest,
            401 => UpstreamErrorKind::Unauthorized,
            403 => UpstreamErrorKind::Forbidden,
            404 => UpstreamErrorKind::NotFound,
            500..=599 => UpstreamErrorKind::ServerError,
            _ => UpstreamErrorKind::Other,
        }
    }
}

/// YouTube Data API client errors
#[derive(Debug, Error)]
pub enum YouTubeError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Api { status: u16, body: Value },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl YouTubeError {
    /// HTTP status to surface for this failure. Anything without an
    /// upstream response is reported as 500.
    pub fn status(&self) -> u16 {
        match self {
            YouTubeError::Api { status, .. } => *status,
            YouTubeError::Request(e) => e.status().map(|s| s.as_u16()).unwrap_or(500),
            YouTubeError::Deserialization(_) => 500,
        }
    }

    pub fn kind(&self) -> UpstreamErrorKind {
        UpstreamErrorKind::from_status(self.status())
    }

    /// Upstream error payload, passed through to callers untouched
    pub fn payload(&self) -> Value {
        match self {
            YouTubeError::Api { body, .. } => body.clone(),
            other => json!({ "message": other.to_string() }),
        }
    }
}

/// Explanation attached to a rejected delete with a 401 from upstream
pub const DELETE_UNAUTHORIZED_HINT: &str =
    "Unauthorized: token missing/expired/invalid or missing scope";

/// Explanation attached to a rejected delete with a 403 from upstream
pub const DELETE_FORBIDDEN_HINT: &str =
    "Forbidden: you likely do not have permission to delete this comment (not the comment owner or channel owner)";

/// Failure of the comment delete resolver
#[derive(Debug, Error)]
pub enum DeleteError {
    /// The comment delete failed with a classification that is never retried
    #[error("Comment delete rejected: {0}")]
    Rejected(YouTubeError),

    /// The comment delete was a bad request and the thread delete failed too
    #[error("Comment thread fallback failed: {0}")]
    FallbackFailed(YouTubeError),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("YouTube error: {0}")]
    YouTube(#[from] YouTubeError),

    #[error("{hint}")]
    YouTubeRejected {
        hint: &'static str,
        source: YouTubeError,
    },

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl From<DeleteError> for AppError {
    fn from(e: DeleteError) -> Self {
        match e {
            DeleteError::Rejected(source) => match source.kind() {
                UpstreamErrorKind::Unauthorized => AppError::YouTubeRejected {
                    hint: DELETE_UNAUTHORIZED_HINT,
                    source,
                },
                UpstreamErrorKind::Forbidden => AppError::YouTubeRejected {
                    hint: DELETE_FORBIDDEN_HINT,
                    source,
                },
                _ => AppError::YouTube(source),
            },
            DeleteError::FallbackFailed(source) => AppError::YouTube(source),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

fn upstream_status(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            AppError::Domain(DomainError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, Value::String(msg), None)
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Value::from("Internal server error"),
                    None,
                )
            }
            AppError::YouTube(e) => {
                tracing::error!(status = e.status(), "YouTube API error: {}", e);
                (upstream_status(e.status()), e.payload(), None)
            }
            AppError::YouTubeRejected { hint, source } => {
                tracing::error!(status = source.status(), "YouTube API error: {}", source);
                (
                    upstream_status(source.status()),
                    Value::from(hint),
                    Some(source.payload()),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Value::String(msg), None),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, Value::String(msg), None),
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}
