//! Content repository ports over [`MemoryStore`].

use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pagination::PageWindow;

use crate::domain::content::{
    Category, CategoryId, Comment, CommentId, Post, PostFilter, PostId, Reply, ReplyId,
};
use crate::domain::ports::{
    CategoryRepository, CategoryRepositoryError, CommentRepository, CommentRepositoryError,
    PostRepository, PostRepositoryError, ReplyRepository, ReplyRepositoryError,
};

use super::MemoryStore;

fn newest_first<T: Clone>(
    rows: impl DoubleEndedIterator<Item = T>,
    key: impl Fn(&T) -> DateTime<Utc>,
) -> Vec<T> {
    let mut out: Vec<T> = rows.rev().collect();
    out.sort_by_key(|row| Reverse(key(row)));
    out
}

fn window_slice<T>(rows: Vec<T>, window: PageWindow) -> Vec<T> {
    let skip = usize::try_from(window.offset()).unwrap_or(usize::MAX);
    rows.into_iter()
        .skip(skip)
        .take(window.limit() as usize)
        .collect()
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn insert(&self, post: &Post) -> Result<(), PostRepositoryError> {
        self.tables.write().await.posts.push(post.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().find(|post| post.id == *id).cloned())
    }

    async fn update_content(&self, post: &Post) -> Result<(), PostRepositoryError> {
        let mut tables = self.tables.write().await;
        if let Some(row) = tables.posts.iter_mut().find(|row| row.id == post.id) {
            row.title.clone_from(&post.title);
            row.description.clone_from(&post.description);
            row.status = post.status;
            row.updated_at = post.updated_at;
        }
        Ok(())
    }

    async fn set_category(
        &self,
        id: &PostId,
        category: Option<CategoryId>,
        at: DateTime<Utc>,
    ) -> Result<(), PostRepositoryError> {
        let mut tables = self.tables.write().await;
        if let Some(row) = tables.posts.iter_mut().find(|row| row.id == *id) {
            row.category_id = category;
            row.updated_at = at;
        }
        Ok(())
    }

    async fn find_by_category(
        &self,
        category_id: &CategoryId,
    ) -> Result<Vec<Post>, PostRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .iter()
            .filter(|post| post.category_id == Some(*category_id))
            .cloned()
            .collect())
    }

    async fn mark_deleted(
        &self,
        id: &PostId,
        at: DateTime<Utc>,
    ) -> Result<(), PostRepositoryError> {
        let mut tables = self.tables.write().await;
        if let Some(row) = tables.posts.iter_mut().find(|row| row.id == *id) {
            row.deleted_at = Some(at);
            row.is_active = false;
            row.updated_at = at;
        }
        Ok(())
    }

    async fn find_listed(
        &self,
        filter: &PostFilter,
        window: Option<PageWindow>,
    ) -> Result<Vec<Post>, PostRepositoryError> {
        let tables = self.tables.read().await;
        let matching = newest_first(
            tables.posts.iter().filter(|post| filter.matches(post)).cloned(),
            |post| post.created_at,
        );
        Ok(match window {
            Some(window) => window_slice(matching, window),
            None => matching,
        })
    }

    async fn count_listed(&self, filter: &PostFilter) -> Result<u64, PostRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.posts.iter().filter(|post| filter.matches(post)).count() as u64)
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn insert(&self, category: &Category) -> Result<(), CategoryRepositoryError> {
        self.tables.write().await.categories.push(category.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|row| row.id == *id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        Ok(self.tables.read().await.categories.clone())
    }

    async fn find_child_of(
        &self,
        parent_id: &CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .iter()
            .find(|row| row.parent_id == Some(*parent_id))
            .cloned())
    }

    async fn rename(
        &self,
        id: &CategoryId,
        name: &str,
        at: DateTime<Utc>,
    ) -> Result<(), CategoryRepositoryError> {
        let mut tables = self.tables.write().await;
        if let Some(row) = tables.categories.iter_mut().find(|row| row.id == *id) {
            name.clone_into(&mut row.name);
            row.updated_at = at;
        }
        Ok(())
    }

    async fn delete(&self, id: &CategoryId) -> Result<bool, CategoryRepositoryError> {
        let mut tables = self.tables.write().await;
        let before = tables.categories.len();
        tables.categories.retain(|row| row.id != *id);
        let removed = tables.categories.len() != before;
        if removed {
            // Mirrors ON DELETE SET NULL on posts.category_id.
            for post in tables.posts.iter_mut().filter(|post| post.category_id == Some(*id)) {
                post.category_id = None;
            }
        }
        Ok(removed)
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn insert(&self, comment: &Comment) -> Result<(), CommentRepositoryError> {
        self.tables.write().await.comments.push(comment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &CommentId) -> Result<Option<Comment>, CommentRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.comments.iter().find(|row| row.id == *id).cloned())
    }

    async fn update_text(
        &self,
        id: &CommentId,
        text: &str,
        at: DateTime<Utc>,
    ) -> Result<(), CommentRepositoryError> {
        let mut tables = self.tables.write().await;
        if let Some(row) = tables.comments.iter_mut().find(|row| row.id == *id) {
            text.clone_into(&mut row.text);
            row.updated_at = at;
        }
        Ok(())
    }

    async fn find_by_post(&self, post_id: &PostId) -> Result<Vec<Comment>, CommentRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables
            .comments
            .iter()
            .filter(|row| row.post_id == *post_id)
            .cloned()
            .collect())
    }

    async fn find_page(&self, window: PageWindow) -> Result<Vec<Comment>, CommentRepositoryError> {
        let tables = self.tables.read().await;
        let ordered = newest_first(tables.comments.iter().cloned(), |row| row.created_at);
        Ok(window_slice(ordered, window))
    }

    async fn count(&self) -> Result<u64, CommentRepositoryError> {
        Ok(self.tables.read().await.comments.len() as u64)
    }

    async fn delete(&self, id: &CommentId) -> Result<bool, CommentRepositoryError> {
        let mut tables = self.tables.write().await;
        let before = tables.comments.len();
        tables.comments.retain(|row| row.id != *id);
        Ok(tables.comments.len() != before)
    }
}

#[async_trait]
impl ReplyRepository for MemoryStore {
    async fn insert(&self, reply: &Reply) -> Result<(), ReplyRepositoryError> {
        self.tables.write().await.replies.push(reply.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ReplyId) -> Result<Option<Reply>, ReplyRepositoryError> {
        let tables = self.tables.read().await;
        Ok(tables.replies.iter().find(|row| row.id == *id).cloned())
    }

    async fn update_text(
        &self,
        id: &ReplyId,
        text: &str,
        at: DateTime<Utc>,
    ) -> Result<(), ReplyRepositoryError> {
        let mut tables = self.tables.write().await;
        if let Some(row) = tables.replies.iter_mut().find(|row| row.id == *id) {
            text.clone_into(&mut row.text);
            row.updated_at = at;
        }
        Ok(())
    }

    async fn delete(&self, id: &ReplyId) -> Result<bool, ReplyRepositoryError> {
        let mut tables = self.tables.write().await;
        let before = tables.replies.len();
        tables.replies.retain(|row| row.id != *id);
        Ok(tables.replies.len() != before)
    }

    async fn delete_by_comment(&self, comment_id: &CommentId) -> Result<u64, ReplyRepositoryError> {
        let mut tables = self.tables.write().await;
        let before = tables.replies.len();
        tables.replies.retain(|row| row.comment_id != *comment_id);
        Ok((before - tables.replies.len()) as u64)
    }
}
