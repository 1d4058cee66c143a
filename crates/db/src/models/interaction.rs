//! Interaction entity model and DTOs.

use cvstodia_core::image::ImagePatch;
use cvstodia_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An interaction row from the `interactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: DbId,
    pub description: String,
    pub image_url: Option<String>,
    #[serde(skip_serializing)]
    pub active: bool,
}

/// DTO for creating a new interaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInteraction {
    pub description: String,
    pub image_url: Option<String>,
}

/// DTO for updating an existing interaction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInteraction {
    pub description: Option<String>,
    #[serde(default, deserialize_with = "ImagePatch::deserialize_field")]
    pub image_url: ImagePatch,
}
