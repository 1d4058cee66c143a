//! Category entity model and DTOs.

use cvstodia_core::image::ImagePatch;
use cvstodia_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(skip_serializing)]
    pub active: bool,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for updating an existing category. Only supplied fields change; the
/// image field follows the tri-state patch semantics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "ImagePatch::deserialize_field")]
    pub image_url: ImagePatch,
}
