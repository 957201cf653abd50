//! MongoDB implementation of CategoryRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, Document, doc, to_bson},
    options::{IndexOptions, ReplaceOptions},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::CategoryResult;
use crate::models::Category;
use crate::repository::CategoryRepository;

/// MongoDB implementation of the CategoryRepository
pub struct MongoCategoryRepository {
    collection: Collection<Category>,
}

impl MongoCategoryRepository {
    /// Create a new MongoCategoryRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Category>("categories");
        Self { collection }
    }

    /// Create a new MongoCategoryRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Category>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for optimal query performance
    pub async fn init_indexes(&self) -> CategoryResult<()> {
        let indexes = vec![
            // Unique id index; documents are keyed by the `id` field so the
            // API and the store share one identifier
            IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_id_unique".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Category indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Category> {
        &self.collection
    }

    /// Build the filter document matching a single category by id
    fn id_filter(id: Uuid) -> Document {
        doc! { "id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> CategoryResult<Vec<Category>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let categories: Vec<Category> = cursor.try_collect().await?;

        Ok(categories)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> CategoryResult<Option<Category>> {
        let category = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(category)
    }

    #[instrument(skip(self, category), fields(category_id = %category.id))]
    async fn save(&self, category: Category) -> CategoryResult<Category> {
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(Self::id_filter(category.id), &category)
            .with_options(options)
            .await?;

        tracing::info!(category_id = %category.id, "Category saved successfully");
        Ok(category)
    }

    #[instrument(skip(self, categories), fields(count = categories.len()))]
    async fn save_all(&self, categories: Vec<Category>) -> CategoryResult<Vec<Category>> {
        // insert_many rejects an empty batch; nothing to persist anyway
        if categories.is_empty() {
            return Ok(categories);
        }

        self.collection.insert_many(&categories).await?;

        tracing::info!(count = categories.len(), "Categories saved successfully");
        Ok(categories)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> CategoryResult<()> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        tracing::info!(
            category_id = %id,
            deleted_count = result.deleted_count,
            "Category delete completed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_keys_on_id_field() {
        let id = Uuid::now_v7();
        let filter = MongoCategoryRepository::id_filter(id);
        assert!(filter.contains_key("id"));
        assert_eq!(filter.get("id"), Some(&Bson::String(id.to_string())));
    }
}
