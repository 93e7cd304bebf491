//! Driving port for category reads.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::content::{Category, CategoryId};

/// Domain use-case port for reading categories.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoriesQuery: Send + Sync {
    /// Fetch a category by id.
    async fn get_category(&self, category_id: &CategoryId) -> Result<Category, Error>;
}
