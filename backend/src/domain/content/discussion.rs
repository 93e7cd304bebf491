//! Comments on posts and replies to comments.

use chrono::{DateTime, Utc};

use super::{CommentId, PostId, ReplyId};

/// A comment attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Stable identifier.
    pub id: CommentId,
    /// Owning post.
    pub post_id: PostId,
    /// Comment body.
    pub text: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Reserved; comments are hard-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A reply attached to exactly one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Stable identifier.
    pub id: ReplyId,
    /// Owning comment.
    pub comment_id: CommentId,
    /// Reply body.
    pub text: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Reserved; replies are hard-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}
