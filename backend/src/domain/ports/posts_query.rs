//! Driving port for post reads and published feeds.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::content::{Post, PostFilter, PostId};
use crate::domain::{Error, PostWithCategory, SearchResults};

/// Domain use-case port for reading posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostsQuery: Send + Sync {
    /// Fetch a post by id. Soft-deleted posts are returned with
    /// `is_active = false`.
    async fn get_post(&self, post_id: &PostId) -> Result<Post, Error>;

    /// Search the published feed.
    async fn search_posts(&self, filter: PostFilter) -> Result<SearchResults, Error>;

    /// Page through the published feed, newest first.
    async fn list_posts(&self, request: PageRequest) -> Result<Page<Post>, Error>;

    /// Page through the published feed with each post's category joined.
    async fn list_posts_with_categories(
        &self,
        request: PageRequest,
    ) -> Result<Page<PostWithCategory>, Error>;
}
