//! Comment delete resolver
//!
//! Callers hand over one unqualified id, but YouTube deletes comments and
//! comment threads through different endpoints. The id is first deleted as a
//! comment; a bad-request answer is taken as a hint that it names a thread and
//! the delete is retried once against the thread endpoint. Nothing else is
//! retried.
//!
//! The bad-request trigger is a heuristic: YouTube does not send a dedicated
//! "wrong resource kind" reason, so any 400 from the comment delete leads to
//! the thread attempt.

use std::sync::Arc;

use crate::domain::entities::ResourceKind;
use crate::domain::ports::YouTubeClient;
use crate::error::{DeleteError, UpstreamErrorKind, YouTubeError};

/// What to do once the comment delete came back
#[derive(Debug)]
pub(crate) enum AfterCommentAttempt {
    Deleted,
    RetryAsThread(YouTubeError),
    Surface(YouTubeError),
}

pub(crate) fn after_comment_attempt(result: Result<(), YouTubeError>) -> AfterCommentAttempt {
    match result {
        Ok(()) => AfterCommentAttempt::Deleted,
        Err(e) if e.kind() == UpstreamErrorKind::BadRequest => {
            AfterCommentAttempt::RetryAsThread(e)
        }
        Err(e) => AfterCommentAttempt::Surface(e),
    }
}

/// Resolves an id to a comment or thread delete
pub struct CommentDeleter<U>
where
    U: YouTubeClient,
{
    youtube: Arc<U>,
}

impl<U> CommentDeleter<U>
where
    U: YouTubeClient,
{
    pub fn new(youtube: Arc<U>) -> Self {
        Self { youtube }
    }

    /// Delete `id`, returning which kind of resource was removed
    pub async fn delete(&self, id: &str) -> Result<ResourceKind, DeleteError> {
        let first = self.youtube.delete_comment(id).await;

        match after_comment_attempt(first) {
            AfterCommentAttempt::Deleted => Ok(ResourceKind::Comment),
            AfterCommentAttempt::Surface(e) => Err(DeleteError::Rejected(e)),
            AfterCommentAttempt::RetryAsThread(e) => {
                tracing::info!(
                    id,
                    error = %e,
                    "Attempting fallback: delete as commentThread (thread id)"
                );
                self.youtube
                    .delete_comment_thread(id)
                    .await
                    .map(|()| ResourceKind::CommentThread)
                    .map_err(|e| {
                        tracing::error!(id, status = e.status(), "Fallback delete error: {}", e);
                        DeleteError::FallbackFailed(e)
                    })
            }
        }
    }
}
