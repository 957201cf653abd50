use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Vendor entity - represents a vendor stored in MongoDB
///
/// Wire format uses camelCase (`firstName`/`lastName`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// Unique identifier, assigned on first persistence
    pub id: Uuid,
    /// Vendor first name
    pub first_name: String,
    /// Vendor last name
    pub last_name: String,
}

/// DTO for creating a new vendor
///
/// Carries no id; one is assigned when the entity is persisted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVendor {
    pub first_name: String,
    pub last_name: String,
}

/// Request body for vendor creation.
///
/// The endpoint accepts either a single vendor object or an array of
/// zero or more objects; both deserialize into this type.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CreateVendorBatch {
    One(CreateVendor),
    Many(Vec<CreateVendor>),
}

impl CreateVendorBatch {
    /// Flatten the body into a list of create DTOs
    pub fn into_items(self) -> Vec<CreateVendor> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

/// DTO for full replacement of a vendor via PUT.
///
/// A client-supplied id is accepted but ignored; the path id always wins.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertVendor {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
}

/// DTO for partial update of a vendor via PATCH.
///
/// Fields left as `None` are not compared and not changed.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchVendor {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Vendor {
    /// Create a new vendor from a CreateVendor DTO, assigning a fresh id
    pub fn new(input: CreateVendor) -> Self {
        Self {
            id: Uuid::now_v7(),
            first_name: input.first_name,
            last_name: input.last_name,
        }
    }

    /// Build the full entity a PUT request describes, with the path id
    pub fn from_upsert(id: Uuid, input: UpsertVendor) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
        }
    }
}

impl PatchVendor {
    /// Apply the provided fields that differ from the stored values.
    ///
    /// Both fields are compared independently and all changed fields are
    /// applied before the caller issues its single save.
    /// Returns `true` if any field changed.
    pub fn apply(self, vendor: &mut Vendor) -> bool {
        let mut changed = false;

        if let Some(first_name) = self.first_name {
            if first_name != vendor.first_name {
                vendor.first_name = first_name;
                changed = true;
            }
        }

        if let Some(last_name) = self.last_name {
            if last_name != vendor.last_name {
                vendor.last_name = last_name;
                changed = true;
            }
        }

        changed
    }
}
