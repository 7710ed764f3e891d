use std::env;

use crate::app::SAFETY_LIMIT;

pub const DEFAULT_YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Base URL of the YouTube Data API
    pub youtube_api_base: String,
    /// OAuth bearer token; required for post/delete/update
    pub youtube_access_token: Option<String>,
    /// API key used for reads when no bearer token is configured
    pub youtube_api_key: Option<String>,
    /// The video this console manages
    pub video_id: Option<String>,
    /// Stop full comment aggregation once this many threads are collected
    pub comments_safety_limit: usize,
    /// Directory with the frontend, served as the router fallback
    pub static_dir: Option<String>,
    pub port: u16,
}

/// Treat empty variables the same as unset ones
fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            youtube_api_base: non_empty("YOUTUBE_API_BASE")
                .unwrap_or_else(|| DEFAULT_YOUTUBE_API_BASE.to_string()),
            youtube_access_token: non_empty("YOUTUBE_ACCESS_TOKEN"),
            youtube_api_key: non_empty("YOUTUBE_API_KEY"),
            video_id: non_empty("VIDEO_ID"),
            comments_safety_limit: env::var("COMMENTS_SAFETY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(SAFETY_LIMIT),
            static_dir: non_empty("STATIC_DIR"),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
        }
    }
}
