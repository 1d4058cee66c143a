//! Handlers for the `/locations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cvstodia_core::error::CoreError;
use cvstodia_core::types::DbId;
use cvstodia_core::validate::{require_non_blank, require_non_blank_if_present};
use cvstodia_db::models::location::{CreateLocation, Location, UpdateLocation};
use cvstodia_db::repositories::LocationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/locations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    require_non_blank("name", &input.name)?;
    let location = LocationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

/// GET /api/v1/locations
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Location>>> {
    let locations = LocationRepo::list(&state.pool).await?;
    Ok(Json(locations))
}

/// GET /api/v1/locations/deleted
pub async fn list_deleted(State(state): State<AppState>) -> AppResult<Json<Vec<Location>>> {
    let locations = LocationRepo::list_deleted(&state.pool).await?;
    Ok(Json(locations))
}

/// GET /api/v1/locations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Location>> {
    let location = LocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;
    Ok(Json(location))
}

/// PUT /api/v1/locations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLocation>,
) -> AppResult<Json<Location>> {
    require_non_blank_if_present("name", input.name.as_deref())?;
    let location = LocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;
    Ok(Json(location))
}

/// DELETE /api/v1/locations/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LocationRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))
    }
}

/// POST /api/v1/locations/{id}/restore
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let restored = LocationRepo::restore(&state.pool, id).await?;
    if restored {
        Ok(Json(serde_json::json!({ "restored": true, "id": id })))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))
    }
}
