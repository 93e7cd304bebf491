//! Port for post persistence.
//!
//! Posts are the only soft-deleted kind: adapters expose
//! [`PostRepository::mark_deleted`] instead of a physical delete.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pagination::PageWindow;

use crate::domain::content::{CategoryId, Post, PostFilter, PostId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by post repository adapters.
    pub enum PostRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "post repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "post repository query failed: {message}",
    }
}

/// Port for post storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a new post.
    async fn insert(&self, post: &Post) -> Result<(), PostRepositoryError>;

    /// Fetch a post by id, including soft-deleted posts.
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostRepositoryError>;

    /// Persist the mutable content fields (`title`, `description`, `status`,
    /// `updated_at`) of an existing post.
    async fn update_content(&self, post: &Post) -> Result<(), PostRepositoryError>;

    /// Point the post at `category`, or clear the link with `None`.
    async fn set_category(
        &self,
        id: &PostId,
        category: Option<CategoryId>,
        at: DateTime<Utc>,
    ) -> Result<(), PostRepositoryError>;

    /// Fetch every post linked to `category_id`, soft-deleted posts included.
    async fn find_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Post>, PostRepositoryError>;

    /// Stamp `deleted_at` and clear `is_active` in a single write.
    async fn mark_deleted(&self, id: &PostId, at: DateTime<Utc>)
    -> Result<(), PostRepositoryError>;

    /// Fetch listed posts matching `filter`, newest first.
    ///
    /// `None` returns every match; `Some` restricts to the window.
    async fn find_listed(
        &self,
        filter: &PostFilter,
        window: Option<PageWindow>,
    ) -> Result<Vec<Post>, PostRepositoryError>;

    /// Count listed posts matching `filter`.
    async fn count_listed(&self, filter: &PostFilter) -> Result<u64, PostRepositoryError>;
}
