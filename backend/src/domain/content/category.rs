//! Categories and the summary shape used when joining them onto posts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::CategoryId;

/// A category. Categories form a tree through `parent_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Parent category; `None` marks a root.
    pub parent_id: Option<CategoryId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Reserved; categories are hard-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Whether the category has no parent.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Category fields carried alongside a post in joined listings.
///
/// Posts without a resolvable category carry an explicit empty summary with
/// both fields `null`, never an omitted field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// Category identifier.
    pub id: Option<CategoryId>,
    /// Category name.
    pub name: Option<String>,
}

impl CategorySummary {
    /// The null-id, null-name placeholder.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl From<&Category> for CategorySummary {
    fn from(value: &Category) -> Self {
        Self {
            id: Some(value.id),
            name: Some(value.name.clone()),
        }
    }
}
