//! Category hierarchy rules.
//!
//! Categories form a tree through `parent_id`. Only one level of protection
//! applies: a root category cannot be deleted while a child references it.
//! Deleting a non-root category never inspects its own children, and
//! cycles are not detected.

use tracing::debug;

use super::Error;
use super::content::{Category, CategoryId, EntityKind};
use super::ports::CategoryRepository;
use super::store::map_category_error;

/// Message returned when a root category still has children.
pub const PARENT_HAS_CHILD_MESSAGE: &str =
    "category could not be deleted, parent has an existing child category";

/// Read-then-decide checks over the category tree.
pub struct HierarchyValidator<'a> {
    categories: &'a dyn CategoryRepository,
}

impl<'a> HierarchyValidator<'a> {
    /// Build a validator over the given category lookup.
    pub fn new(categories: &'a dyn CategoryRepository) -> Self {
        Self { categories }
    }

    /// Decide whether the category may be deleted.
    ///
    /// # Errors
    /// `not_found` when the category is absent; `conflict` when it is a root
    /// with at least one child.
    pub async fn ensure_deletable(&self, target: &CategoryId) -> Result<(), Error> {
        let category = self
            .categories
            .find_by_id(target)
            .await
            .map_err(map_category_error)?
            .ok_or_else(|| Error::not_found(EntityKind::Category.not_found_message()))?;
        self.check(&category).await
    }

    async fn check(&self, category: &Category) -> Result<(), Error> {
        if !category.is_root() {
            return Ok(());
        }
        let child = self
            .categories
            .find_child_of(&category.id)
            .await
            .map_err(map_category_error)?;
        match child {
            Some(child) => {
                debug!(
                    category_id = %category.id,
                    child_id = %child.id,
                    "root category still has a child"
                );
                Err(Error::conflict(PARENT_HAS_CHILD_MESSAGE))
            }
            None => Ok(()),
        }
    }

    /// Confirm a requested parent exists before linking to it.
    ///
    /// # Errors
    /// `not_found` when `parent` names a missing category.
    pub async fn resolve_parent(
        &self,
        parent: Option<CategoryId>,
    ) -> Result<Option<CategoryId>, Error> {
        let Some(parent_id) = parent else {
            return Ok(None);
        };
        self.categories
            .find_by_id(&parent_id)
            .await
            .map_err(map_category_error)?
            .map(|found| Some(found.id))
            .ok_or_else(|| Error::not_found("parent category not found!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{CategoryRepositoryError, MockCategoryRepository};
    use chrono::Utc;
    use rstest::rstest;

    fn category(parent_id: Option<CategoryId>) -> Category {
        let now = Utc::now();
        Category {
            id: CategoryId::random(),
            name: "News".to_owned(),
            parent_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn root_without_children_is_deletable() {
        let root = category(None);
        let mut repo = MockCategoryRepository::new();
        let found = root.clone();
        repo.expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(found)));
        repo.expect_find_child_of().times(1).return_once(|_| Ok(None));

        HierarchyValidator::new(&repo)
            .ensure_deletable(&root.id)
            .await
            .expect("root without children is deletable");
    }

    #[tokio::test]
    async fn root_with_child_is_refused() {
        let root = category(None);
        let root_id = root.id;
        let child = category(Some(root_id));
        let mut repo = MockCategoryRepository::new();
        let found = root.clone();
        repo.expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(found)));
        repo.expect_find_child_of()
            .withf(move |parent| *parent == root_id)
            .times(1)
            .return_once(move |_| Ok(Some(child)));

        let err = HierarchyValidator::new(&repo)
            .ensure_deletable(&root.id)
            .await
            .expect_err("root with child must be refused");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), PARENT_HAS_CHILD_MESSAGE);
    }

    #[tokio::test]
    async fn child_categories_skip_the_child_lookup() {
        let child = category(Some(CategoryId::random()));
        let mut repo = MockCategoryRepository::new();
        let found = child.clone();
        repo.expect_find_by_id()
            .times(1)
            .return_once(move |_| Ok(Some(found)));
        repo.expect_find_child_of().never();

        HierarchyValidator::new(&repo)
            .ensure_deletable(&child.id)
            .await
            .expect("non-root categories are always deletable");
    }

    #[tokio::test]
    async fn missing_target_is_not_found() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let err = HierarchyValidator::new(&repo)
            .ensure_deletable(&CategoryId::random())
            .await
            .expect_err("missing category");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn lookup_failures_surface_as_internal() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id()
            .times(1)
            .return_once(|_| Err(CategoryRepositoryError::connection("refused")));

        let err = HierarchyValidator::new(&repo)
            .ensure_deletable(&CategoryId::random())
            .await
            .expect_err("storage failure");
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn absent_parent_resolves_to_none() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().never();

        let parent = HierarchyValidator::new(&repo)
            .resolve_parent(None)
            .await
            .expect("no parent requested");
        assert_eq!(parent, None);
    }

    #[tokio::test]
    async fn unknown_parent_is_not_found() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let err = HierarchyValidator::new(&repo)
            .resolve_parent(Some(CategoryId::random()))
            .await
            .expect_err("unknown parent");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), "parent category not found!");
    }
}
