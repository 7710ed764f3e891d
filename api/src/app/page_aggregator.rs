//! Comment page aggregation
//!
//! Walks the upstream comment thread listing page by page. Tokens are strictly
//! sequential, so pages are fetched one at a time. Full aggregation stops when
//! the listing runs out, when the collected thread count reaches a safety
//! limit, or when `limit / page_size + 1` requests have been made. Both bounds
//! are only checked between pages.

use std::sync::Arc;

use crate::domain::entities::{AggregationResult, CommentListing, CommentThreadPage};
use crate::domain::ports::YouTubeClient;
use crate::error::YouTubeError;

/// Upstream maximum for `maxResults` on commentThreads.list
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Stop full aggregation once this many threads are collected
pub const SAFETY_LIMIT: usize = 1000;

/// Whether to return one page or walk the whole listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Single,
    All,
}

/// Clamp a requested page size to what the upstream accepts
pub fn clamp_page_size(requested: Option<u32>) -> u32 {
    requested
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE)
}

/// Decision taken after each page
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    /// Fetch the page behind this token
    Continue(String),
    /// No further page exists
    Exhausted,
    /// Safety limit or request cap reached; the token is kept so a caller
    /// could resume
    Truncated(String),
}

/// Bounds of one full aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Budget {
    /// Threads to collect before stopping
    pub limit: usize,
    /// Upstream requests to make before stopping, even if pages come back empty
    pub max_requests: usize,
}

impl Budget {
    pub(crate) fn new(limit: usize, page_size: u32) -> Self {
        Self {
            limit,
            max_requests: limit / page_size.max(1) as usize + 1,
        }
    }
}

/// Stop predicate: `token absent OR collected >= limit OR requests >= max_requests`.
/// An absent token wins, so a listing that ends exactly at a bound still
/// counts as fully fetched.
pub(crate) fn next_step(
    collected: usize,
    requests: usize,
    budget: Budget,
    next_token: Option<String>,
) -> Step {
    match next_token {
        None => Step::Exhausted,
        Some(token) if collected >= budget.limit || requests >= budget.max_requests => {
            Step::Truncated(token)
        }
        Some(token) => Step::Continue(token),
    }
}

/// Drives repeated commentThreads.list calls for one video
pub struct PageAggregator<U>
where
    U: YouTubeClient,
{
    youtube: Arc<U>,
    safety_limit: usize,
}

impl<U> PageAggregator<U>
where
    U: YouTubeClient,
{
    pub fn new(youtube: Arc<U>) -> Self {
        Self {
            youtube,
            safety_limit: SAFETY_LIMIT,
        }
    }

    pub fn with_safety_limit(mut self, safety_limit: usize) -> Self {
        self.safety_limit = safety_limit;
        self
    }

    /// Fetch one page or the whole listing, depending on `mode`
    pub async fn aggregate(
        &self,
        mode: FetchMode,
        video_id: &str,
        page_size: Option<u32>,
        page_token: Option<String>,
    ) -> Result<CommentListing, YouTubeError> {
        let page_size = clamp_page_size(page_size);

        match mode {
            FetchMode::Single => Ok(CommentListing::Page(
                self.fetch_page(video_id, page_size, page_token.as_deref())
                    .await?,
            )),
            FetchMode::All => Ok(CommentListing::Aggregated(
                self.fetch_all(video_id, page_size, page_token).await?,
            )),
        }
    }

    /// Exactly one upstream call; the page is returned as the upstream sent it
    pub async fn fetch_page(
        &self,
        video_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentThreadPage, YouTubeError> {
        self.youtube
            .list_comment_threads(video_id, page_size, page_token)
            .await
    }

    /// Concatenate pages until the listing ends or a bound is hit.
    /// Any failed page aborts the whole aggregation; nothing partial is returned.
    pub async fn fetch_all(
        &self,
        video_id: &str,
        page_size: u32,
        start_token: Option<String>,
    ) -> Result<AggregationResult, YouTubeError> {
        let budget = Budget::new(self.safety_limit, page_size);
        let mut items = Vec::new();
        let mut requests = 0;
        let mut token = start_token;

        loop {
            let page = self
                .fetch_page(video_id, page_size, token.as_deref())
                .await?;
            requests += 1;
            items.extend(page.items);

            match next_step(items.len(), requests, budget, page.next_page_token) {
                Step::Continue(next) => token = Some(next),
                Step::Exhausted => {
                    return Ok(AggregationResult {
                        items,
                        next_page_token: None,
                        fetched_all: true,
                    })
                }
                Step::Truncated(next) => {
                    tracing::warn!(
                        video_id,
                        collected = items.len(),
                        requests,
                        limit = self.safety_limit,
                        "comments: reached safety limit while paginating"
                    );
                    return Ok(AggregationResult {
                        items,
                        next_page_token: Some(next),
                        fetched_all: false,
                    });
                }
            }
        }
    }
}
