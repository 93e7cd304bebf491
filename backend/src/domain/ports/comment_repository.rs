//! Port for comment persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pagination::PageWindow;

use crate::domain::content::{Comment, CommentId, PostId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "comment repository query failed: {message}",
    }
}

/// Port for comment storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment.
    async fn insert(&self, comment: &Comment) -> Result<(), CommentRepositoryError>;

    /// Fetch a comment by id.
    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Replace the text of an existing comment.
    async fn update_text(
        &self,
        id: &CommentId,
        text: &str,
        at: DateTime<Utc>,
    ) -> Result<(), CommentRepositoryError>;

    /// Fetch every comment on `post_id`.
    async fn find_by_post(&self, post_id: &PostId) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Fetch one window of comments, newest first.
    async fn find_page(&self, window: PageWindow) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Count every comment.
    async fn count(&self) -> Result<u64, CommentRepositoryError>;

    /// Physically remove a comment.
    ///
    /// Returns `Ok(false)` when no row matched.
    async fn delete(&self, id: &CommentId) -> Result<bool, CommentRepositoryError>;
}
