use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CategoryResult;
use crate::models::Category;

/// Repository trait for Category persistence
///
/// This trait defines the data access interface for categories.
/// Implementations can use different storage backends (MongoDB, in-memory, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Get every stored category, in whatever order the store returns them
    async fn find_all(&self) -> CategoryResult<Vec<Category>>;

    /// Get a category by id, or `None` when no record matches
    async fn find_by_id(&self, id: Uuid) -> CategoryResult<Option<Category>>;

    /// Persist a category with insert-or-replace semantics
    async fn save(&self, category: Category) -> CategoryResult<Category>;

    /// Persist a batch of categories; an empty batch is a no-op
    async fn save_all(&self, categories: Vec<Category>) -> CategoryResult<Vec<Category>>;

    /// Delete a category by id; succeeds whether or not the id existed
    async fn delete_by_id(&self, id: Uuid) -> CategoryResult<()>;
}
