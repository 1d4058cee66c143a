//! Location entity model and DTOs.

use cvstodia_core::image::ImagePatch;
use cvstodia_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A location row from the `locations` table.
///
/// The type tag is stored as `kind` (avoiding the Rust keyword) but keeps its
/// `type` name on the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(skip_serializing)]
    pub active: bool,
}

/// DTO for creating a new location.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocation {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for updating an existing location.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocation {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "ImagePatch::deserialize_field")]
    pub image_url: ImagePatch,
}
