use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Category entity - represents a category stored in MongoDB
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier, assigned on first persistence
    pub id: Uuid,
    /// Category description
    pub description: String,
}

/// DTO for creating a new category
///
/// Carries no id; one is assigned when the entity is persisted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCategory {
    pub description: String,
}

/// Request body for category creation.
///
/// The endpoint accepts either a single category object or an array of
/// zero or more objects; both deserialize into this type.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum CreateCategoryBatch {
    One(CreateCategory),
    Many(Vec<CreateCategory>),
}

impl CreateCategoryBatch {
    /// Flatten the body into a list of create DTOs
    pub fn into_items(self) -> Vec<CreateCategory> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

/// DTO for full replacement of a category via PUT.
///
/// A client-supplied id is accepted but ignored; the path id always wins.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertCategory {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub description: String,
}

/// DTO for partial update of a category via PATCH.
///
/// Fields left as `None` are not compared and not changed.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PatchCategory {
    pub description: Option<String>,
}

impl Category {
    /// Create a new category from a CreateCategory DTO, assigning a fresh id
    pub fn new(input: CreateCategory) -> Self {
        Self {
            id: Uuid::now_v7(),
            description: input.description,
        }
    }

    /// Build the full entity a PUT request describes, with the path id
    pub fn from_upsert(id: Uuid, input: UpsertCategory) -> Self {
        Self {
            id,
            description: input.description,
        }
    }
}

impl PatchCategory {
    /// Apply the provided fields that differ from the stored values.
    ///
    /// Returns `true` if any field changed, i.e. whether a save is needed.
    pub fn apply(self, category: &mut Category) -> bool {
        let mut changed = false;

        if let Some(description) = self.description {
            if description != category.description {
                category.description = description;
                changed = true;
            }
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_id() {
        let category = Category::new(CreateCategory {
            description: "Fruits".to_string(),
        });
        assert!(!category.id.is_nil());
        assert_eq!(category.description, "Fruits");
    }

    #[test]
    fn test_from_upsert_uses_path_id() {
        let path_id = Uuid::now_v7();
        let body_id = Uuid::now_v7();
        let category = Category::from_upsert(
            path_id,
            UpsertCategory {
                id: Some(body_id),
                description: "Dried".to_string(),
            },
        );
        assert_eq!(category.id, path_id);
    }

    #[test]
    fn test_patch_apply_changed_field() {
        let mut category = Category::new(CreateCategory {
            description: "Fresh".to_string(),
        });
        let patch = PatchCategory {
            description: Some("Frozen".to_string()),
        };

        assert!(patch.apply(&mut category));
        assert_eq!(category.description, "Frozen");
    }

    #[test]
    fn test_patch_apply_equal_field_is_noop() {
        let mut category = Category::new(CreateCategory {
            description: "Fresh".to_string(),
        });
        let patch = PatchCategory {
            description: Some("Fresh".to_string()),
        };

        assert!(!patch.apply(&mut category));
        assert_eq!(category.description, "Fresh");
    }

    #[test]
    fn test_patch_apply_absent_field_is_noop() {
        let mut category = Category::new(CreateCategory {
            description: "Fresh".to_string(),
        });
        let patch = PatchCategory { description: None };

        assert!(!patch.apply(&mut category));
        assert_eq!(category.description, "Fresh");
    }

    #[test]
    fn test_patch_treats_empty_string_as_a_value() {
        let mut category = Category::new(CreateCategory {
            description: String::new(),
        });

        // Empty string stored, empty string provided: equal, no change
        let patch = PatchCategory {
            description: Some(String::new()),
        };
        assert!(!patch.apply(&mut category));

        // Empty string stored, non-empty provided: differs
        let patch = PatchCategory {
            description: Some("Exotic".to_string()),
        };
        assert!(patch.apply(&mut category));
    }

    #[test]
    fn test_category_json_uses_id_field() {
        let category = Category::new(CreateCategory {
            description: "Fruits".to_string(),
        });
        let json = serde_json::to_value(&category).unwrap();
        assert!(json.get("id").is_some());
        assert_eq!(json["description"], "Fruits");
    }

    #[test]
    fn test_batch_accepts_single_object() {
        let batch: CreateCategoryBatch =
            serde_json::from_str(r#"{"description": "Some Category"}"#).unwrap();
        let items = batch.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Some Category");
    }

    #[test]
    fn test_batch_accepts_array() {
        let batch: CreateCategoryBatch =
            serde_json::from_str(r#"[{"description": "A"}, {"description": "B"}]"#).unwrap();
        let items = batch.into_items();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_batch_accepts_empty_array() {
        let batch: CreateCategoryBatch = serde_json::from_str("[]").unwrap();
        assert!(batch.into_items().is_empty());
    }
}
