//! Port for reply persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::content::{CommentId, Reply, ReplyId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by reply repository adapters.
    pub enum ReplyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "reply repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "reply repository query failed: {message}",
    }
}

/// Port for reply storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Persist a new reply.
    async fn insert(&self, reply: &Reply) -> Result<(), ReplyRepositoryError>;

    /// Fetch a reply by id.
    async fn find_by_id(&self, id: &ReplyId) -> Result<Option<Reply>, ReplyRepositoryError>;

    /// Replace the text of an existing reply.
    async fn update_text(
        &self,
        id: &ReplyId,
        text: &str,
        at: DateTime<Utc>,
    ) -> Result<(), ReplyRepositoryError>;

    /// Physically remove a reply.
    ///
    /// Returns `Ok(false)` when no row matched.
    async fn delete(&self, id: &ReplyId) -> Result<bool, ReplyRepositoryError>;

    /// Physically remove every reply to `comment_id`, returning the count.
    async fn delete_by_comment(&self, comment_id: &CommentId) -> Result<u64, ReplyRepositoryError>;
}
