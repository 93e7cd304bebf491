//! Content service: the single entry point for post, category, comment, and
//! reply use-cases.
//!
//! Every mutation re-reads its target by id and fails with `not_found`
//! before acting, then delegates multi-record work to the
//! [`CascadeCoordinator`] and listings to the [`ListingEngine`].

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{Page, PageRequest};
use tracing::info;

use super::cascade::CascadeCoordinator;
use super::content::{
    Category, CategoryId, Comment, CommentId, DeletionReceipt, EntityKind, Post, PostFilter,
    PostId, Reply, ReplyId, require_text,
};
use super::hierarchy::HierarchyValidator;
use super::listing::{ListingEngine, PostWithCategory, SearchResults};
use super::ports::{
    AddCommentRequest, AddReplyRequest, CategoriesCommand, CategoriesQuery, CommentsCommand,
    CommentsQuery, CreateCategoryRequest, CreatePostRequest, DeleteCategoryRequest,
    DeleteCommentRequest, DeletePostRequest, DeleteReplyRequest, EditCommentRequest,
    EditReplyRequest, PostsCommand, PostsQuery, RenameCategoryRequest, UpdatePostRequest,
};
use super::store::{
    ContentStore, map_category_error, map_comment_error, map_post_error, map_reply_error,
};
use super::Error;

/// Content service implementing every content driving port.
#[derive(Clone)]
pub struct ContentService {
    store: ContentStore,
    clock: Arc<dyn Clock>,
    cascade: CascadeCoordinator,
    listing: ListingEngine,
}

impl ContentService {
    /// Create a service over the content store.
    ///
    /// # Examples
    /// ```no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use blog_backend::domain::{ContentService, ContentStore};
    /// # fn build(store: ContentStore) -> ContentService {
    /// ContentService::new(store, Arc::new(DefaultClock))
    /// # }
    /// ```
    pub fn new(store: ContentStore, clock: Arc<dyn Clock>) -> Self {
        let cascade = CascadeCoordinator::new(store.clone(), Arc::clone(&clock));
        let listing = ListingEngine::new(store.clone());
        Self {
            store,
            clock,
            cascade,
            listing,
        }
    }

    async fn find_post(&self, post_id: &PostId) -> Result<Post, Error> {
        self.store
            .posts
            .find_by_id(post_id)
            .await
            .map_err(map_post_error)?
            .ok_or_else(|| Error::not_found(EntityKind::Post.not_found_message()))
    }

    async fn find_category(&self, category_id: &CategoryId) -> Result<Category, Error> {
        self.store
            .categories
            .find_by_id(category_id)
            .await
            .map_err(map_category_error)?
            .ok_or_else(|| Error::not_found(EntityKind::Category.not_found_message()))
    }

    async fn find_comment(&self, comment_id: &CommentId) -> Result<Comment, Error> {
        self.store
            .comments
            .find_by_id(comment_id)
            .await
            .map_err(map_comment_error)?
            .ok_or_else(|| Error::not_found(EntityKind::Comment.not_found_message()))
    }

    async fn find_reply(&self, reply_id: &ReplyId) -> Result<Reply, Error> {
        self.store
            .replies
            .find_by_id(reply_id)
            .await
            .map_err(map_reply_error)?
            .ok_or_else(|| Error::not_found(EntityKind::Reply.not_found_message()))
    }
}

#[async_trait]
impl PostsCommand for ContentService {
    async fn create_post(&self, request: CreatePostRequest) -> Result<Post, Error> {
        let CreatePostRequest {
            actor,
            title,
            description,
            status,
        } = request;
        let now = self.clock.utc();
        let post = Post {
            id: PostId::random(),
            title: require_text(title, "title")?,
            description: require_text(description, "description")?,
            status: status.unwrap_or_default(),
            is_active: true,
            category_id: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.store
            .posts
            .insert(&post)
            .await
            .map_err(map_post_error)?;
        info!(post_id = %post.id, actor = %actor.id, status = %post.status, "post created");
        Ok(post)
    }

    async fn update_post(&self, request: UpdatePostRequest) -> Result<Post, Error> {
        let UpdatePostRequest {
            actor,
            post_id,
            changes,
        } = request;
        let mut post = self.cascade.live_post(&post_id).await?;
        if let Some(title) = &changes.title {
            require_text(title.clone(), "title")?;
        }
        if let Some(description) = &changes.description {
            require_text(description.clone(), "description")?;
        }
        if !changes.is_empty() {
            changes.apply_to(&mut post, self.clock.utc());
            self.store
                .posts
                .update_content(&post)
                .await
                .map_err(map_post_error)?;
            info!(%post_id, actor = %actor.id, "post updated");
        }
        self.find_post(&post_id).await
    }

    async fn delete_post(&self, request: DeletePostRequest) -> Result<DeletionReceipt, Error> {
        let post = self.cascade.live_post(&request.post_id).await?;
        info!(post_id = %post.id, actor = %request.actor.id, "deleting post");
        self.cascade.delete_post(&post).await
    }
}

#[async_trait]
impl PostsQuery for ContentService {
    async fn get_post(&self, post_id: &PostId) -> Result<Post, Error> {
        self.find_post(post_id).await
    }

    async fn search_posts(&self, filter: PostFilter) -> Result<SearchResults, Error> {
        self.listing.search_posts(&filter).await
    }

    async fn list_posts(&self, request: PageRequest) -> Result<Page<Post>, Error> {
        self.listing.list_posts(request).await
    }

    async fn list_posts_with_categories(
        &self,
        request: PageRequest,
    ) -> Result<Page<PostWithCategory>, Error> {
        self.listing.list_posts_with_categories(request).await
    }
}

#[async_trait]
impl CategoriesCommand for ContentService {
    async fn create_category(&self, request: CreateCategoryRequest) -> Result<Category, Error> {
        let CreateCategoryRequest {
            actor,
            post_id,
            name,
            parent_id,
        } = request;
        let name = require_text(name, "name")?;
        let post = self.cascade.ensure_category_attachable(&post_id).await?;
        let parent_id = HierarchyValidator::new(self.store.categories.as_ref())
            .resolve_parent(parent_id)
            .await?;

        let now = self.clock.utc();
        let category = Category {
            id: CategoryId::random(),
            name,
            parent_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.store
            .categories
            .insert(&category)
            .await
            .map_err(map_category_error)?;
        self.store
            .posts
            .set_category(&post.id, Some(category.id), now)
            .await
            .map_err(map_post_error)?;
        info!(
            category_id = %category.id,
            post_id = %post.id,
            actor = %actor.id,
            "category created"
        );
        Ok(category)
    }

    async fn rename_category(&self, request: RenameCategoryRequest) -> Result<Category, Error> {
        let RenameCategoryRequest {
            actor,
            category_id,
            name,
        } = request;
        let name = require_text(name, "name")?;
        self.find_category(&category_id).await?;
        self.store
            .categories
            .rename(&category_id, &name, self.clock.utc())
            .await
            .map_err(map_category_error)?;
        info!(%category_id, actor = %actor.id, "category renamed");
        self.find_category(&category_id).await
    }

    async fn delete_category(
        &self,
        request: DeleteCategoryRequest,
    ) -> Result<DeletionReceipt, Error> {
        let category = self.find_category(&request.category_id).await?;
        info!(category_id = %category.id, actor = %request.actor.id, "deleting category");
        self.cascade.delete_category(&category.id).await?;
        Ok(DeletionReceipt::new(EntityKind::Category, category.id))
    }
}

#[async_trait]
impl CategoriesQuery for ContentService {
    async fn get_category(&self, category_id: &CategoryId) -> Result<Category, Error> {
        self.find_category(category_id).await
    }
}

#[async_trait]
impl CommentsCommand for ContentService {
    async fn add_comment(&self, request: AddCommentRequest) -> Result<Comment, Error> {
        let AddCommentRequest {
            actor,
            post_id,
            text,
        } = request;
        let text = require_text(text, "comment")?;
        let post = self.cascade.live_post(&post_id).await?;
        let now = self.clock.utc();
        let comment = Comment {
            id: CommentId::random(),
            post_id: post.id,
            text,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.store
            .comments
            .insert(&comment)
            .await
            .map_err(map_comment_error)?;
        info!(comment_id = %comment.id, %post_id, actor = %actor.id, "comment added");
        Ok(comment)
    }

    async fn edit_comment(&self, request: EditCommentRequest) -> Result<Comment, Error> {
        let EditCommentRequest {
            actor,
            comment_id,
            text,
        } = request;
        let text = require_text(text, "comment")?;
        self.find_comment(&comment_id).await?;
        self.store
            .comments
            .update_text(&comment_id, &text, self.clock.utc())
            .await
            .map_err(map_comment_error)?;
        info!(%comment_id, actor = %actor.id, "comment edited");
        self.find_comment(&comment_id).await
    }

    async fn delete_comment(
        &self,
        request: DeleteCommentRequest,
    ) -> Result<DeletionReceipt, Error> {
        let comment = self.find_comment(&request.comment_id).await?;
        info!(comment_id = %comment.id, actor = %request.actor.id, "deleting comment");
        self.cascade.delete_comment(&comment.id).await?;
        Ok(DeletionReceipt::new(EntityKind::Comment, comment.id))
    }

    async fn add_reply(&self, request: AddReplyRequest) -> Result<Reply, Error> {
        let AddReplyRequest {
            actor,
            comment_id,
            text,
        } = request;
        let text = require_text(text, "reply")?;
        let comment = self.find_comment(&comment_id).await?;
        let now = self.clock.utc();
        let reply = Reply {
            id: ReplyId::random(),
            comment_id: comment.id,
            text,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.store
            .replies
            .insert(&reply)
            .await
            .map_err(map_reply_error)?;
        info!(reply_id = %reply.id, %comment_id, actor = %actor.id, "reply added");
        Ok(reply)
    }

    async fn edit_reply(&self, request: EditReplyRequest) -> Result<Reply, Error> {
        let EditReplyRequest {
            actor,
            reply_id,
            text,
        } = request;
        let text = require_text(text, "reply")?;
        self.find_reply(&reply_id).await?;
        self.store
            .replies
            .update_text(&reply_id, &text, self.clock.utc())
            .await
            .map_err(map_reply_error)?;
        info!(%reply_id, actor = %actor.id, "reply edited");
        self.find_reply(&reply_id).await
    }

    async fn delete_reply(&self, request: DeleteReplyRequest) -> Result<DeletionReceipt, Error> {
        let reply = self.find_reply(&request.reply_id).await?;
        self.store
            .replies
            .delete(&reply.id)
            .await
            .map_err(map_reply_error)?;
        info!(
            reply_id = %reply.id,
            actor = %request.actor.id,
            policy = ?EntityKind::Reply.deletion_policy(),
            "reply deleted"
        );
        Ok(DeletionReceipt::new(EntityKind::Reply, reply.id))
    }
}

#[async_trait]
impl CommentsQuery for ContentService {
    async fn get_comment(&self, comment_id: &CommentId) -> Result<Comment, Error> {
        self.find_comment(comment_id).await
    }

    async fn list_comments(&self, request: PageRequest) -> Result<Page<Comment>, Error> {
        self.listing.list_comments(request).await
    }

    async fn get_reply(&self, reply_id: &ReplyId) -> Result<Reply, Error> {
        self.find_reply(reply_id).await
    }
}

#[cfg(test)]
#[path = "content_service_tests.rs"]
mod tests;
