//! Handlers for the `/items` resource.
//!
//! Items carry the two many-to-many link sets, so the create/update handlers
//! feed the relationship reconciler, and two extra read endpoints exist:
//! `/search` with conjunctive filters and `/{id}/details` with nested
//! related objects.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cvstodia_core::error::CoreError;
use cvstodia_core::search::ItemFilter;
use cvstodia_core::types::DbId;
use cvstodia_core::validate::{require_non_blank, require_non_blank_if_present};
use cvstodia_db::models::item::{CreateItem, ItemDetail, ItemView, UpdateItem};
use cvstodia_db::repositories::ItemRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /items/search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub category_id: Option<DbId>,
    pub location_id: Option<DbId>,
    pub indispensable: Option<bool>,
    pub name: Option<String>,
}

impl From<SearchParams> for ItemFilter {
    fn from(params: SearchParams) -> Self {
        ItemFilter {
            category_id: params.category_id,
            location_id: params.location_id,
            indispensable: params.indispensable,
            name: params.name,
        }
    }
}

/// POST /api/v1/items
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateItem>,
) -> AppResult<(StatusCode, Json<ItemView>)> {
    require_non_blank("name", &input.name)?;
    let item = ItemRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/items
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ItemView>>> {
    let items = ItemRepo::list(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/v1/items/deleted
pub async fn list_deleted(State(state): State<AppState>) -> AppResult<Json<Vec<ItemView>>> {
    let items = ItemRepo::list_deleted(&state.pool).await?;
    Ok(Json(items))
}

/// GET /api/v1/items/search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<ItemView>>> {
    let items = ItemRepo::search(&state.pool, &params.into()).await?;
    Ok(Json(items))
}

/// GET /api/v1/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItemView>> {
    let item = ItemRepo::find_view(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(item))
}

/// GET /api/v1/items/{id}/details
pub async fn get_details(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItemDetail>> {
    let detail = ItemRepo::find_detailed(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(detail))
}

/// PUT /api/v1/items/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateItem>,
) -> AppResult<Json<ItemView>> {
    require_non_blank_if_present("name", input.name.as_deref())?;
    let item = ItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;
    Ok(Json(item))
}

/// DELETE /api/v1/items/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ItemRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Item", id }))
    }
}

/// POST /api/v1/items/{id}/restore
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let restored = ItemRepo::restore(&state.pool, id).await?;
    if restored {
        Ok(Json(serde_json::json!({ "restored": true, "id": id })))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Item", id }))
    }
}
