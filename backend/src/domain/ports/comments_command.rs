//! Driving port for comment and reply mutations.

use async_trait::async_trait;

use crate::domain::content::{Comment, CommentId, DeletionReceipt, PostId, Reply, ReplyId};
use crate::domain::{AuthenticatedUser, Error};

/// Request to comment on a post.
#[derive(Debug, Clone)]
pub struct AddCommentRequest {
    /// The user performing the request.
    pub actor: AuthenticatedUser,
    /// Post receiving the comment.
    pub post_id: PostId,
    /// Comment body.
    pub text: String,
}

/// Request to edit a comment.
#[derive(Debug, Clone)]
pub struct EditCommentRequest {
    /// The user performing the request.
    pub actor: AuthenticatedUser,
    /// Target comment.
    pub comment_id: CommentId,
    /// Replacement body.
    pub text: String,
}

/// Request to delete a comment and its replies.
#[derive(Debug, Clone)]
pub struct DeleteCommentRequest {
    /// The user performing the request.
    pub actor: AuthenticatedUser,
    /// Target comment.
    pub comment_id: CommentId,
}

/// Request to reply to a comment.
#[derive(Debug, Clone)]
pub struct AddReplyRequest {
    /// The user performing the request.
    pub actor: AuthenticatedUser,
    /// Comment receiving the reply.
    pub comment_id: CommentId,
    /// Reply body.
    pub text: String,
}

/// Request to edit a reply.
#[derive(Debug, Clone)]
pub struct EditReplyRequest {
    /// The user performing the request.
    pub actor: AuthenticatedUser,
    /// Target reply.
    pub reply_id: ReplyId,
    /// Replacement body.
    pub text: String,
}

/// Request to delete a reply.
#[derive(Debug, Clone)]
pub struct DeleteReplyRequest {
    /// The user performing the request.
    pub actor: AuthenticatedUser,
    /// Target reply.
    pub reply_id: ReplyId,
}

/// Domain use-case port for comment and reply mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentsCommand: Send + Sync {
    /// Attach a comment to a live post.
    async fn add_comment(&self, request: AddCommentRequest) -> Result<Comment, Error>;

    /// Replace a comment's text and return the re-read record.
    async fn edit_comment(&self, request: EditCommentRequest) -> Result<Comment, Error>;

    /// Delete a comment after deleting its replies.
    async fn delete_comment(&self, request: DeleteCommentRequest)
    -> Result<DeletionReceipt, Error>;

    /// Attach a reply to an existing comment.
    async fn add_reply(&self, request: AddReplyRequest) -> Result<Reply, Error>;

    /// Replace a reply's text and return the re-read record.
    async fn edit_reply(&self, request: EditReplyRequest) -> Result<Reply, Error>;

    /// Delete a reply.
    async fn delete_reply(&self, request: DeleteReplyRequest) -> Result<DeletionReceipt, Error>;
}
