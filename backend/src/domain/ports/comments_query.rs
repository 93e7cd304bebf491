//! Driving port for comment and reply reads.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::Error;
use crate::domain::content::{Comment, CommentId, Reply, ReplyId};

/// Domain use-case port for reading comments and replies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentsQuery: Send + Sync {
    /// Fetch a comment by id.
    async fn get_comment(&self, comment_id: &CommentId) -> Result<Comment, Error>;

    /// Page through all comments, newest first.
    async fn list_comments(&self, request: PageRequest) -> Result<Page<Comment>, Error>;

    /// Fetch a reply by id.
    async fn get_reply(&self, reply_id: &ReplyId) -> Result<Reply, Error>;
}
