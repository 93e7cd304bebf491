//! Port for category persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::content::{Category, CategoryId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by category repository adapters.
    pub enum CategoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "category repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "category repository query failed: {message}",
    }
}

/// Port for category storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Persist a new category.
    async fn insert(&self, category: &Category) -> Result<(), CategoryRepositoryError>;

    /// Fetch a category by id.
    async fn find_by_id(&self, id: &CategoryId)
    -> Result<Option<Category>, CategoryRepositoryError>;

    /// Fetch every category.
    async fn find_all(&self) -> Result<Vec<Category>, CategoryRepositoryError>;

    /// Fetch any one category whose parent is `parent_id`.
    async fn find_child_of(
        &self,
        parent_id: &CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError>;

    /// Replace the name of an existing category.
    async fn rename(
        &self,
        id: &CategoryId,
        name: &str,
        at: DateTime<Utc>,
    ) -> Result<(), CategoryRepositoryError>;

    /// Physically remove a category.
    ///
    /// Posts still linked to it lose the link, matching an
    /// `ON DELETE SET NULL` foreign key. Child categories keep their
    /// `parent_id`. Returns `Ok(false)` when no row matched.
    async fn delete(&self, id: &CategoryId) -> Result<bool, CategoryRepositoryError>;
}
