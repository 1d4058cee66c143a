pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{category, image, interaction, item, location};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy (mirrored for categories / locations / interactions,
/// extended for items):
///
/// ```text
/// /categories                      list, create
/// /categories/deleted              list soft-deleted
/// /categories/{id}                 get, update, delete (soft)
/// /categories/{id}/restore         restore (POST)
///
/// /locations ...                   same shape
/// /interactions ...                same shape
///
/// /items                           list, create
/// /items/deleted                   list soft-deleted
/// /items/search                    conjunctive filter search
/// /items/{id}                      get, update, delete (soft)
/// /items/{id}/details              nested detail view
/// /items/{id}/restore              restore (POST)
///
/// /images/upload                   multipart upload (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    let categories = Router::new()
        .route("/", get(category::list).post(category::create))
        .route("/deleted", get(category::list_deleted))
        .route(
            "/{id}",
            get(category::get_by_id)
                .put(category::update)
                .delete(category::delete),
        )
        .route("/{id}/restore", post(category::restore));

    let locations = Router::new()
        .route("/", get(location::list).post(location::create))
        .route("/deleted", get(location::list_deleted))
        .route(
            "/{id}",
            get(location::get_by_id)
                .put(location::update)
                .delete(location::delete),
        )
        .route("/{id}/restore", post(location::restore));

    let interactions = Router::new()
        .route("/", get(interaction::list).post(interaction::create))
        .route("/deleted", get(interaction::list_deleted))
        .route(
            "/{id}",
            get(interaction::get_by_id)
                .put(interaction::update)
                .delete(interaction::delete),
        )
        .route("/{id}/restore", post(interaction::restore));

    let items = Router::new()
        .route("/", get(item::list).post(item::create))
        .route("/deleted", get(item::list_deleted))
        .route("/search", get(item::search))
        .route(
            "/{id}",
            get(item::get_by_id).put(item::update).delete(item::delete),
        )
        .route("/{id}/details", get(item::get_details))
        .route("/{id}/restore", post(item::restore));

    Router::new()
        .nest("/categories", categories)
        .nest("/locations", locations)
        .nest("/interactions", interactions)
        .nest("/items", items)
        .route("/images/upload", post(image::upload))
}
