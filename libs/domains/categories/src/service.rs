//! Category Service - operation orchestration layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CategoryError, CategoryResult};
use crate::models::{Category, CreateCategory, PatchCategory, UpsertCategory};
use crate::repository::CategoryRepository;

/// Category service translating API operations into repository calls
///
/// The service layer builds entities from DTOs and carries the one piece of
/// non-passthrough behavior: the conditional write of a partial update.
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Create a new CategoryService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all categories
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> CategoryResult<Vec<Category>> {
        self.repository.find_all().await
    }

    /// Get a category by id, or `None` when no record matches.
    ///
    /// Absence is not an error here; the handler serializes `None` as a JSON
    /// null body with a 200 status.
    #[instrument(skip(self))]
    pub async fn get_category(&self, id: Uuid) -> CategoryResult<Option<Category>> {
        self.repository.find_by_id(id).await
    }

    /// Create a batch of categories (a single request body may carry one
    /// object or an array), assigning each a fresh id.
    ///
    /// Completion of the bulk save is the only success signal; per-item
    /// outcomes are not reported.
    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    pub async fn create_categories(
        &self,
        inputs: Vec<CreateCategory>,
    ) -> CategoryResult<Vec<Category>> {
        let categories = inputs.into_iter().map(Category::new).collect();
        self.repository.save_all(categories).await
    }

    /// Replace the category at `id` with the given payload.
    ///
    /// Any id in the payload is overwritten by the path id; the save has
    /// insert-or-replace semantics.
    #[instrument(skip(self, input))]
    pub async fn update_category(
        &self,
        id: Uuid,
        input: UpsertCategory,
    ) -> CategoryResult<Category> {
        self.repository.save(Category::from_upsert(id, input)).await
    }

    /// Partially update the category at `id`.
    ///
    /// Fetches the stored record, compares each provided field, and issues a
    /// single save only when at least one field differs. Returns the stored
    /// record untouched otherwise.
    #[instrument(skip(self, patch))]
    pub async fn patch_category(&self, id: Uuid, patch: PatchCategory) -> CategoryResult<Category> {
        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        if patch.apply(&mut existing) {
            return self.repository.save(existing).await;
        }

        Ok(existing)
    }

    /// Delete the category at `id`; succeeds whether or not it existed
    #[instrument(skip(self))]
    pub async fn delete_category(&self, id: Uuid) -> CategoryResult<()> {
        self.repository.delete_by_id(id).await
    }
}

impl<R: CategoryRepository> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCategoryRepository;
    use mockall::predicate;

    fn stored(id: Uuid, description: &str) -> Category {
        Category {
            id,
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_category_missing_is_none_not_error() {
        let mut mock_repo = MockCategoryRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_find_by_id()
            .with(predicate::eq(id))
            .returning(|_| Ok(None));

        let service = CategoryService::new(mock_repo);
        let result = service.get_category(id).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_bulk_saves() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_save_all()
            .withf(|categories: &Vec<Category>| {
                categories.len() == 2 && categories.iter().all(|c| !c.id.is_nil())
            })
            .returning(|categories| Ok(categories));

        let service = CategoryService::new(mock_repo);
        let created = service
            .create_categories(vec![
                CreateCategory {
                    description: "Fruits".to_string(),
                },
                CreateCategory {
                    description: "Nuts".to_string(),
                },
            ])
            .await
            .unwrap();

        assert_eq!(created.len(), 2);
        assert_ne!(created[0].id, created[1].id);
    }

    #[tokio::test]
    async fn test_create_empty_batch() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_save_all()
            .with(predicate::eq(Vec::<Category>::new()))
            .returning(|categories| Ok(categories));

        let service = CategoryService::new(mock_repo);
        let created = service.create_categories(vec![]).await.unwrap();

        assert!(created.is_empty());
    }

    #[tokio::test]
    async fn test_update_forces_path_id() {
        let mut mock_repo = MockCategoryRepository::new();
        let path_id = Uuid::now_v7();
        let body_id = Uuid::now_v7();

        mock_repo
            .expect_save()
            .withf(move |category: &Category| category.id == path_id)
            .returning(|category| Ok(category));

        let service = CategoryService::new(mock_repo);
        let saved = service
            .update_category(
                path_id,
                UpsertCategory {
                    id: Some(body_id),
                    description: "new".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(saved.id, path_id);
        assert_eq!(saved.description, "new");
    }

    #[tokio::test]
    async fn test_patch_changed_field_saves_once() {
        let mut mock_repo = MockCategoryRepository::new();
        let id = Uuid::now_v7();
        let existing = stored(id, "Fresh");

        mock_repo
            .expect_find_by_id()
            .with(predicate::eq(id))
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo
            .expect_save()
            .times(1)
            .withf(move |category: &Category| {
                category.id == id && category.description == "Frozen"
            })
            .returning(|category| Ok(category));

        let service = CategoryService::new(mock_repo);
        let patched = service
            .patch_category(
                id,
                PatchCategory {
                    description: Some("Frozen".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(patched.description, "Frozen");
    }

    #[tokio::test]
    async fn test_patch_equal_field_never_saves() {
        let mut mock_repo = MockCategoryRepository::new();
        let id = Uuid::now_v7();
        let existing = stored(id, "Fresh");

        mock_repo
            .expect_find_by_id()
            .with(predicate::eq(id))
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_save().times(0);

        let service = CategoryService::new(mock_repo);
        let result = service
            .patch_category(
                id,
                PatchCategory {
                    description: Some("Fresh".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(result, stored(id, "Fresh"));
    }

    #[tokio::test]
    async fn test_patch_absent_field_never_saves() {
        let mut mock_repo = MockCategoryRepository::new();
        let id = Uuid::now_v7();
        let existing = stored(id, "Fresh");

        mock_repo
            .expect_find_by_id()
            .with(predicate::eq(id))
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_save().times(0);

        let service = CategoryService::new(mock_repo);
        let result = service
            .patch_category(id, PatchCategory { description: None })
            .await
            .unwrap();

        assert_eq!(result.description, "Fresh");
    }

    #[tokio::test]
    async fn test_patch_missing_id_is_not_found() {
        let mut mock_repo = MockCategoryRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_find_by_id()
            .with(predicate::eq(id))
            .returning(|_| Ok(None));
        mock_repo.expect_save().times(0);

        let service = CategoryService::new(mock_repo);
        let result = service
            .patch_category(
                id,
                PatchCategory {
                    description: Some("anything".to_string()),
                },
            )
            .await;

        assert!(matches!(result, Err(CategoryError::NotFound(found)) if found == id));
    }

    #[tokio::test]
    async fn test_delete_is_unconditional() {
        let mut mock_repo = MockCategoryRepository::new();
        let id = Uuid::now_v7();

        // No existence check; the repository call is the whole operation
        mock_repo
            .expect_delete_by_id()
            .with(predicate::eq(id))
            .times(1)
            .returning(|_| Ok(()));

        let service = CategoryService::new(mock_repo);
        assert!(service.delete_category(id).await.is_ok());
    }
}
