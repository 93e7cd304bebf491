//! Ordered multi-record mutations triggered by deleting or linking content.
//!
//! Every cascade is a fixed sequence of storage calls. Steps run strictly in
//! order within one request and are not wrapped in a transaction: once the
//! first mutation lands, a later failure leaves the earlier steps applied.

use std::sync::Arc;

use mockable::Clock;
use tracing::info;

use super::Error;
use super::content::{CategoryId, CommentId, DeletionReceipt, EntityKind, Post, PostId};
use super::hierarchy::HierarchyValidator;
use super::store::{
    ContentStore, map_category_error, map_comment_error, map_post_error, map_reply_error,
};

/// Message returned when a post already carries a category.
pub const CATEGORY_ALREADY_LINKED_MESSAGE: &str = "Category for this post already exists!";

/// Outcome of detaching posts and deleting a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCascade {
    /// Posts whose category link was cleared.
    pub detached_posts: Vec<PostId>,
}

/// Orchestrates dependent-record cleanup for posts, comments, and
/// categories.
#[derive(Clone)]
pub struct CascadeCoordinator {
    store: ContentStore,
    clock: Arc<dyn Clock>,
}

impl CascadeCoordinator {
    /// Build a coordinator over the content store.
    pub fn new(store: ContentStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Fetch a post that is live (not soft-deleted).
    ///
    /// # Errors
    /// `not_found` when the post is absent or soft-deleted.
    pub async fn live_post(&self, post_id: &PostId) -> Result<Post, Error> {
        self.store
            .posts
            .find_by_id(post_id)
            .await
            .map_err(map_post_error)?
            .filter(|post| !post.is_deleted())
            .ok_or_else(|| Error::not_found(EntityKind::Post.not_found_message()))
    }

    /// Check that a new category may be linked to the post.
    ///
    /// # Errors
    /// `not_found` when the post is absent or soft-deleted; `conflict` when
    /// it already links a category.
    pub async fn ensure_category_attachable(&self, post_id: &PostId) -> Result<Post, Error> {
        let post = self.live_post(post_id).await?;
        if post.category_id.is_some() {
            return Err(Error::conflict(CATEGORY_ALREADY_LINKED_MESSAGE));
        }
        Ok(post)
    }

    /// Soft-delete the post, delete its comments (and their replies), then
    /// hard-delete its linked category without consulting the hierarchy.
    pub async fn delete_post(&self, post: &Post) -> Result<DeletionReceipt, Error> {
        let now = self.clock.utc();
        self.store
            .posts
            .mark_deleted(&post.id, now)
            .await
            .map_err(map_post_error)?;

        let comments = self
            .store
            .comments
            .find_by_post(&post.id)
            .await
            .map_err(map_comment_error)?;
        let comment_count = comments.len();
        for comment in comments {
            self.delete_comment(&comment.id).await?;
        }

        if let Some(category_id) = post.category_id {
            self.store
                .categories
                .delete(&category_id)
                .await
                .map_err(map_category_error)?;
        }

        info!(
            post_id = %post.id,
            comments_removed = comment_count,
            category_removed = post.category_id.is_some(),
            policy = ?EntityKind::Post.deletion_policy(),
            "post deleted"
        );
        Ok(DeletionReceipt::new(EntityKind::Post, post.id))
    }

    /// Delete every reply to the comment, then the comment itself.
    ///
    /// Returns the number of replies removed.
    pub async fn delete_comment(&self, comment_id: &CommentId) -> Result<u64, Error> {
        let replies_removed = self
            .store
            .replies
            .delete_by_comment(comment_id)
            .await
            .map_err(map_reply_error)?;
        self.store
            .comments
            .delete(comment_id)
            .await
            .map_err(map_comment_error)?;
        info!(
            %comment_id,
            replies_removed,
            policy = ?EntityKind::Comment.deletion_policy(),
            "comment deleted"
        );
        Ok(replies_removed)
    }

    /// Clear the category link on every referencing post, run the hierarchy
    /// check, then hard-delete the category.
    ///
    /// # Errors
    /// `conflict` when the category is a root with a child. Links cleared
    /// before the refusal are not restored.
    pub async fn delete_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<CategoryCascade, Error> {
        let now = self.clock.utc();
        let linked = self
            .store
            .posts
            .find_by_category(category_id)
            .await
            .map_err(map_post_error)?;
        let mut detached_posts = Vec::with_capacity(linked.len());
        for post in linked {
            self.store
                .posts
                .set_category(&post.id, None, now)
                .await
                .map_err(map_post_error)?;
            detached_posts.push(post.id);
        }

        HierarchyValidator::new(self.store.categories.as_ref())
            .ensure_deletable(category_id)
            .await?;

        self.store
            .categories
            .delete(category_id)
            .await
            .map_err(map_category_error)?;
        info!(
            %category_id,
            detached = detached_posts.len(),
            policy = ?EntityKind::Category.deletion_policy(),
            "category deleted"
        );
        Ok(CategoryCascade { detached_posts })
    }
}

#[cfg(test)]
#[path = "cascade_tests.rs"]
mod tests;
