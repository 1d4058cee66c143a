//! Handlers for the `/interactions` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cvstodia_core::error::CoreError;
use cvstodia_core::types::DbId;
use cvstodia_core::validate::{require_non_blank, require_non_blank_if_present};
use cvstodia_db::models::interaction::{CreateInteraction, Interaction, UpdateInteraction};
use cvstodia_db::repositories::InteractionRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/interactions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateInteraction>,
) -> AppResult<(StatusCode, Json<Interaction>)> {
    require_non_blank("description", &input.description)?;
    let interaction = InteractionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(interaction)))
}

/// GET /api/v1/interactions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Interaction>>> {
    let interactions = InteractionRepo::list(&state.pool).await?;
    Ok(Json(interactions))
}

/// GET /api/v1/interactions/deleted
pub async fn list_deleted(State(state): State<AppState>) -> AppResult<Json<Vec<Interaction>>> {
    let interactions = InteractionRepo::list_deleted(&state.pool).await?;
    Ok(Json(interactions))
}

/// GET /api/v1/interactions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Interaction>> {
    let interaction = InteractionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Interaction",
            id,
        }))?;
    Ok(Json(interaction))
}

/// PUT /api/v1/interactions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateInteraction>,
) -> AppResult<Json<Interaction>> {
    require_non_blank_if_present("description", input.description.as_deref())?;
    let interaction = InteractionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Interaction",
            id,
        }))?;
    Ok(Json(interaction))
}

/// DELETE /api/v1/interactions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = InteractionRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Interaction",
            id,
        }))
    }
}

/// POST /api/v1/interactions/{id}/restore
pub async fn restore(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let restored = InteractionRepo::restore(&state.pool, id).await?;
    if restored {
        Ok(Json(serde_json::json!({ "restored": true, "id": id })))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Interaction",
            id,
        }))
    }
}
