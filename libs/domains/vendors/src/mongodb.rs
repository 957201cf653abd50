//! MongoDB implementation of VendorRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, Document, doc, to_bson},
    options::{IndexOptions, ReplaceOptions},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::VendorResult;
use crate::models::Vendor;
use crate::repository::VendorRepository;

/// MongoDB implementation of the VendorRepository
pub struct MongoVendorRepository {
    collection: Collection<Vendor>,
}

impl MongoVendorRepository {
    /// Create a new MongoVendorRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Vendor>("vendors");
        Self { collection }
    }

    /// Create a new MongoVendorRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Vendor>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for optimal query performance
    pub async fn init_indexes(&self) -> VendorResult<()> {
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
        tracing::info!("Vendor indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Vendor> {
        &self.collection
    }

    /// Build the filter document matching a single vendor by id
    fn id_filter(id: Uuid) -> Document {
        doc! { "id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl VendorRepository for MongoVendorRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> VendorResult<Vec<Vendor>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let vendors: Vec<Vendor> = cursor.try_collect().await?;

        Ok(vendors)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> VendorResult<Option<Vendor>> {
        let vendor = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(vendor)
    }

    #[instrument(skip(self, vendor), fields(vendor_id = %vendor.id))]
    async fn save(&self, vendor: Vendor) -> VendorResult<Vendor> {
        let options = ReplaceOptions::builder().upsert(true).build();

        self.collection
            .replace_one(Self::id_filter(vendor.id), &vendor)
            .with_options(options)
            .await?;

        tracing::info!(vendor_id = %vendor.id, "Vendor saved successfully");
        Ok(vendor)
    }

    #[instrument(skip(self, vendors), fields(count = vendors.len()))]
    async fn save_all(&self, vendors: Vec<Vendor>) -> VendorResult<Vec<Vendor>> {
        // insert_many rejects an empty batch; nothing to persist anyway
        if vendors.is_empty() {
            return Ok(vendors);
        }

        self.collection.insert_many(&vendors).await?;

        tracing::info!(count = vendors.len(), "Vendors saved successfully");
        Ok(vendors)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: Uuid) -> VendorResult<()> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        tracing::info!(
            vendor_id = %id,
            deleted_count = result.deleted_count,
            "Vendor delete completed"
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
        let filter = MongoVendorRepository::id_filter(id);
        assert!(filter.contains_key("id"));
        assert_eq!(filter.get("id"), Some(&Bson::String(id.to_string())));
    }
}
