//! Item entity model, read models, and DTOs.
//!
//! Items own two many-to-many link sets (locations, interactions). The read
//! models always project those relations as resolved id lists rather than raw
//! rows, so callers never see join-table internals.

use cvstodia_core::image::ImagePatch;
use cvstodia_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::category::Category;
use crate::models::interaction::Interaction;
use crate::models::location::Location;

/// An item row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub cost: Option<i64>,
    pub indispensable: bool,
    pub category_id: Option<DbId>,
    pub image_url: Option<String>,
    #[serde(skip_serializing)]
    pub active: bool,
}

/// Read model: an item plus its resolved link-id sets.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    #[serde(flatten)]
    pub item: Item,
    pub location_ids: Vec<DbId>,
    pub interaction_ids: Vec<DbId>,
}

/// Detailed read model: an item with its related rows materialized.
///
/// Related rows are included as stored, without re-checking their own active
/// flags; a link to a soft-deleted entity stays visible until the item is
/// re-reconciled.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    #[serde(flatten)]
    pub item: Item,
    pub category: Option<Category>,
    pub locations: Vec<Location>,
    pub interactions: Vec<Interaction>,
}

/// DTO for creating a new item.
///
/// `location_ids` / `interaction_ids` are the initial target sets for the
/// relationship reconciler; ids that do not resolve are dropped silently.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    pub name: String,
    pub description: Option<String>,
    pub cost: Option<i64>,
    #[serde(default)]
    pub indispensable: bool,
    pub category_id: Option<DbId>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub location_ids: Vec<DbId>,
    #[serde(default)]
    pub interaction_ids: Vec<DbId>,
}

/// DTO for updating an existing item.
///
/// Scalar fields follow COALESCE semantics (only supplied fields change).
/// For the link sets, `None` means "do not touch", `Some([])` means "remove
/// all links", and `Some(ids)` replaces the set wholesale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<i64>,
    pub indispensable: Option<bool>,
    pub category_id: Option<DbId>,
    #[serde(default, deserialize_with = "ImagePatch::deserialize_field")]
    pub image_url: ImagePatch,
    pub location_ids: Option<Vec<DbId>>,
    pub interaction_ids: Option<Vec<DbId>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item {
            id: 7,
            name: "Rosario".to_string(),
            description: None,
            cost: Some(120),
            indispensable: true,
            category_id: Some(1),
            image_url: None,
            active: true,
        }
    }

    #[test]
    fn item_view_serializes_camel_case_without_active() {
        let view = ItemView {
            item: sample_item(),
            location_ids: vec![1, 2],
            interaction_ids: vec![],
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["categoryId"], 1);
        assert_eq!(json["locationIds"], serde_json::json!([1, 2]));
        assert_eq!(json["interactionIds"], serde_json::json!([]));
        assert!(json.get("active").is_none());
    }

    #[test]
    fn update_item_distinguishes_omitted_and_empty_link_sets() {
        let omitted: UpdateItem = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert_eq!(omitted.location_ids, None);

        let emptied: UpdateItem = serde_json::from_str(r#"{"locationIds": []}"#).unwrap();
        assert_eq!(emptied.location_ids, Some(vec![]));
    }

    #[test]
    fn create_item_defaults_link_sets_to_empty() {
        let input: CreateItem = serde_json::from_str(r#"{"name": "Relic"}"#).unwrap();
        assert!(input.location_ids.is_empty());
        assert!(input.interaction_ids.is_empty());
        assert!(!input.indispensable);
    }
}
