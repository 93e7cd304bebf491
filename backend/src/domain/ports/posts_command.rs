//! Driving port for post mutations.

use async_trait::async_trait;

use crate::domain::content::{DeletionReceipt, Post, PostChanges, PostId, PostStatus};
use crate::domain::{AuthenticatedUser, Error};

/// Request to create a post.
#[derive(Debug, Clone)]
pub struct CreatePostRequest {
    /// The user performing the request.
    pub actor: AuthenticatedUser,
    /// Headline.
    pub title: String,
    /// Body text.
    pub description: String,
    /// Initial status; [`PostStatus::Draft`] when absent.
    pub status: Option<PostStatus>,
}

/// Request to edit a post.
#[derive(Debug, Clone)]
pub struct UpdatePostRequest {
    /// The user performing the request.
    pub actor: AuthenticatedUser,
    /// Target post.
    pub post_id: PostId,
    /// Fields to replace.
    pub changes: PostChanges,
}

/// Request to soft-delete a post and cascade to its dependants.
#[derive(Debug, Clone)]
pub struct DeletePostRequest {
    /// The user performing the request.
    pub actor: AuthenticatedUser,
    /// Target post.
    pub post_id: PostId,
}

/// Domain use-case port for post mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsCommand: Send + Sync {
    /// Create a post, defaulting the status to draft.
    async fn create_post(&self, request: CreatePostRequest) -> Result<Post, Error>;

    /// Apply the supplied field changes and return the re-read post.
    ///
    /// # Errors
    /// `not_found` when the post is absent or soft-deleted.
    async fn update_post(&self, request: UpdatePostRequest) -> Result<Post, Error>;

    /// Soft-delete the post, remove its comments and their replies, then
    /// remove its linked category.
    ///
    /// # Errors
    /// `not_found` when the post is absent or already soft-deleted.
    async fn delete_post(&self, request: DeletePostRequest) -> Result<DeletionReceipt, Error>;
}
