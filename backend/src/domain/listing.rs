//! Bounded, newest-first listings and the post/category join.
//!
//! Page size ceilings are fixed policy: posts clamp to
//! [`POST_PAGE_LIMIT`] and comments to [`COMMENT_PAGE_LIMIT`].

use std::collections::HashMap;

use pagination::{Page, PageRequest};

use super::Error;
use super::content::{Category, CategoryId, CategorySummary, Comment, Post, PostFilter};
use super::store::{ContentStore, map_category_error, map_comment_error, map_post_error};

/// Largest page of posts a listing returns.
pub const POST_PAGE_LIMIT: u32 = 5;

/// Largest page of comments a listing returns.
pub const COMMENT_PAGE_LIMIT: u32 = 15;

/// Unpaged search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    /// Matching posts, newest first.
    pub data: Vec<Post>,
    /// Number of matches.
    pub total: u64,
}

/// A post with its category resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostWithCategory {
    /// The post.
    pub post: Post,
    /// The linked category, or an empty summary when none resolves.
    pub category: CategorySummary,
}

/// Attach category summaries to posts by id lookup.
///
/// Posts without a link, or whose link no longer resolves, receive
/// [`CategorySummary::empty`].
pub fn join_categories(posts: Vec<Post>, categories: &[Category]) -> Vec<PostWithCategory> {
    let by_id: HashMap<CategoryId, &Category> = categories.iter().map(|c| (c.id, c)).collect();
    posts
        .into_iter()
        .map(|post| {
            let category = post
                .category_id
                .and_then(|id| by_id.get(&id))
                .map_or_else(CategorySummary::empty, |found| CategorySummary::from(*found));
            PostWithCategory { post, category }
        })
        .collect()
}

/// Computes pages over the content store.
#[derive(Clone)]
pub struct ListingEngine {
    store: ContentStore,
}

impl ListingEngine {
    /// Build an engine over the content store.
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }

    /// Every listed post matching `filter`.
    pub async fn search_posts(&self, filter: &PostFilter) -> Result<SearchResults, Error> {
        let data = self
            .store
            .posts
            .find_listed(filter, None)
            .await
            .map_err(map_post_error)?;
        let total = data.len() as u64;
        Ok(SearchResults { data, total })
    }

    /// One page of the published feed.
    pub async fn list_posts(&self, request: PageRequest) -> Result<Page<Post>, Error> {
        let window = request.clamp(POST_PAGE_LIMIT);
        let filter = PostFilter::listed();
        let total = self
            .store
            .posts
            .count_listed(&filter)
            .await
            .map_err(map_post_error)?;
        let data = self
            .store
            .posts
            .find_listed(&filter, Some(window))
            .await
            .map_err(map_post_error)?;
        Ok(Page::new(data, total, window))
    }

    /// One page of the published feed with categories joined.
    ///
    /// The page is fetched first; the full category set is loaded
    /// separately and matched per post.
    pub async fn list_posts_with_categories(
        &self,
        request: PageRequest,
    ) -> Result<Page<PostWithCategory>, Error> {
        let page = self.list_posts(request).await?;
        let categories = self
            .store
            .categories
            .find_all()
            .await
            .map_err(map_category_error)?;
        let Page {
            data,
            total,
            page,
            limit,
        } = page;
        Ok(Page {
            data: join_categories(data, &categories),
            total,
            page,
            limit,
        })
    }

    /// One page of comments.
    pub async fn list_comments(&self, request: PageRequest) -> Result<Page<Comment>, Error> {
        let window = request.clamp(COMMENT_PAGE_LIMIT);
        let total = self
            .store
            .comments
            .count()
            .await
            .map_err(map_comment_error)?;
        let data = self
            .store
            .comments
            .find_page(window)
            .await
            .map_err(map_comment_error)?;
        Ok(Page::new(data, total, window))
    }
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
