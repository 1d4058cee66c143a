//! Shared DTO constructors for the db integration tests.

#![allow(dead_code)]

use cvstodia_core::types::DbId;
use cvstodia_db::models::category::CreateCategory;
use cvstodia_db::models::interaction::CreateInteraction;
use cvstodia_db::models::item::CreateItem;
use cvstodia_db::models::location::CreateLocation;

pub fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        description: Some("test category".to_string()),
        image_url: None,
    }
}

pub fn new_location(name: &str) -> CreateLocation {
    CreateLocation {
        name: name.to_string(),
        kind: Some("zone".to_string()),
        description: None,
        image_url: None,
    }
}

pub fn new_interaction(description: &str) -> CreateInteraction {
    CreateInteraction {
        description: description.to_string(),
        image_url: None,
    }
}

pub fn new_item(name: &str, category_id: Option<DbId>) -> CreateItem {
    CreateItem {
        name: name.to_string(),
        description: None,
        cost: None,
        indispensable: false,
        category_id,
        image_url: None,
        location_ids: vec![],
        interaction_ids: vec![],
    }
}
