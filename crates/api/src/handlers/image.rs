//! Handler for the `/images/upload` endpoint.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/images/upload
///
/// Accepts a single multipart `file` part, uploads it to the object-storage
/// bucket, and returns the public URL. Non-image content types are rejected
/// before anything leaves the process.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let storage = state
        .storage
        .clone()
        .ok_or(AppError::StorageUnconfigured)?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest("file must be an image".to_string()));
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let url = storage
            .upload(bytes.to_vec(), &content_type, &filename)
            .await?;
        return Ok((StatusCode::CREATED, Json(serde_json::json!({ "url": url }))));
    }

    Err(AppError::BadRequest(
        "missing multipart field 'file'".to_string(),
    ))
}
