//! Vendor Service - operation orchestration layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{VendorError, VendorResult};
use crate::models::{CreateVendor, PatchVendor, UpsertVendor, Vendor};
use crate::repository::VendorRepository;

/// Vendor service translating API operations into repository calls
pub struct VendorService<R: VendorRepository> {
    repository: Arc<R>,
}

impl<R: VendorRepository> VendorService<R> {
    /// Create a new VendorService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all vendors
    #[instrument(skip(self))]
    pub async fn list_vendors(&self) -> VendorResult<Vec<Vendor>> {
        self.repository.find_all().await
    }

    /// Get a vendor by id, or `None` when no record matches.
    ///
    /// Absence is not an error here; the handler serializes `None` as a JSON
    /// null body with a 200 status.
    #[instrument(skip(self))]
    pub async fn get_vendor(&self, id: Uuid) -> VendorResult<Option<Vendor>> {
        self.repository.find_by_id(id).await
    }

    /// Create a batch of vendors (a single request body may carry one
    /// object or an array), assigning each a fresh id.
    ///
    /// Completion of the bulk save is the only success signal; per-item
    /// outcomes are not reported.
    #[instrument(skip(self, inputs), fields(count = inputs.len()))]
    pub async fn create_vendors(&self, inputs: Vec<CreateVendor>) -> VendorResult<Vec<Vendor>> {
        let vendors = inputs.into_iter().map(Vendor::new).collect();
        self.repository.save_all(vendors).await
    }

    /// Replace the vendor at `id` with the given payload.
    ///
    /// Any id in the payload is overwritten by the path id; the save has
    /// insert-or-replace semantics.
    #[instrument(skip(self, input))]
    pub async fn update_vendor(&self, id: Uuid, input: UpsertVendor) -> VendorResult<Vendor> {
        self.repository.save(Vendor::from_upsert(id, input)).await
    }

    /// Partially update the vendor at `id`.
    ///
    /// Fetches the stored record, compares both name fields independently,
    /// applies every provided field that differs, and issues at most one
    /// save. Returns the stored record untouched when nothing differs.
    #[instrument(skip(self, patch))]
    pub async fn patch_vendor(&self, id: Uuid, patch: PatchVendor) -> VendorResult<Vendor> {
        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(VendorError::NotFound(id))?;

        if patch.apply(&mut existing) {
            return self.repository.save(existing).await;
        }

        Ok(existing)
    }

    /// Delete the vendor at `id`; succeeds whether or not it existed
    #[instrument(skip(self))]
    pub async fn delete_vendor(&self, id: Uuid) -> VendorResult<()> {
        self.repository.delete_by_id(id).await
    }
}

impl<R: VendorRepository> Clone for VendorService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
