//! Driving port for category mutations.

use async_trait::async_trait;

use crate::domain::content::{Category, CategoryId, DeletionReceipt, PostId};
use crate::domain::{AuthenticatedUser, Error};

/// Request to create a category and link it to a post.
#[derive(Debug, Clone)]
pub struct CreateCategoryRequest {
    /// The user performing the request.
    pub actor: AuthenticatedUser,
    /// Post that receives the category.
    pub post_id: PostId,
    /// Display name.
    pub name: String,
    /// Optional parent category.
    pub parent_id: Option<CategoryId>,
}

/// Request to rename a category.
#[derive(Debug, Clone)]
pub struct RenameCategoryRequest {
    /// The user performing the request.
    pub actor: AuthenticatedUser,
    /// Target category.
    pub category_id: CategoryId,
    /// Replacement name.
    pub name: String,
}

/// Request to delete a category directly.
#[derive(Debug, Clone)]
pub struct DeleteCategoryRequest {
    /// The user performing the request.
    pub actor: AuthenticatedUser,
    /// Target category.
    pub category_id: CategoryId,
}

/// Domain use-case port for category mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoriesCommand: Send + Sync {
    /// Create a category and link it to the post.
    ///
    /// # Errors
    /// `not_found` when the post or the named parent is absent; `conflict`
    /// when the post already has a category.
    async fn create_category(&self, request: CreateCategoryRequest) -> Result<Category, Error>;

    /// Rename a category and return the re-read record.
    async fn rename_category(&self, request: RenameCategoryRequest) -> Result<Category, Error>;

    /// Detach the category from its posts, then delete it unless it is a
    /// root with children.
    ///
    /// # Errors
    /// `conflict` when a child category still references this root. Posts
    /// detached before the refusal stay detached.
    async fn delete_category(
        &self,
        request: DeleteCategoryRequest,
    ) -> Result<DeletionReceipt, Error>;
}
