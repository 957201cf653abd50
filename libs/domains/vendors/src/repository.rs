use async_trait::async_trait;
use uuid::Uuid;

use crate::error::VendorResult;
use crate::models::Vendor;

/// Repository trait for Vendor persistence
///
/// This trait defines the data access interface for vendors.
/// Implementations can use different storage backends (MongoDB, in-memory, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Get every stored vendor, in whatever order the store returns them
    async fn find_all(&self) -> VendorResult<Vec<Vendor>>;

    /// Get a vendor by id, or `None` when no record matches
    async fn find_by_id(&self, id: Uuid) -> VendorResult<Option<Vendor>>;

    /// Persist a vendor with insert-or-replace semantics
    async fn save(&self, vendor: Vendor) -> VendorResult<Vendor>;

    /// Persist a batch of vendors; an empty batch is a no-op
    async fn save_all(&self, vendors: Vec<Vendor>) -> VendorResult<Vec<Vendor>>;

    /// Delete a vendor by id; succeeds whether or not the id existed
    async fn delete_by_id(&self, id: Uuid) -> VendorResult<()>;
}
