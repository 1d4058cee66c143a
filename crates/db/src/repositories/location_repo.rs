//! Repository for the `locations` table.

use cvstodia_core::types::DbId;
use sqlx::PgPool;

use crate::models::location::{CreateLocation, Location, UpdateLocation};

const COLUMNS: &str = "id, name, kind, description, image_url, active";

/// Provides CRUD operations for locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a new location, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (name, kind, description, image_url)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an active location by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1 AND active");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all active locations.
    pub async fn list(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE active ORDER BY id");
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }

    /// List soft-deleted locations.
    pub async fn list_deleted(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE NOT active ORDER BY id");
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }

    /// Update an active location. Only supplied fields change.
    ///
    /// Returns `None` if the row is missing or soft-deleted.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLocation,
    ) -> Result<Option<Location>, sqlx::Error> {
        let (touch_image, image_url) = input.image_url.as_update();
        let query = format!(
            "UPDATE locations SET
                name = COALESCE($2, name),
                kind = COALESCE($3, kind),
                description = COALESCE($4, description),
                image_url = CASE WHEN $5 THEN $6 ELSE image_url END
             WHERE id = $1 AND active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.description)
            .bind(touch_image)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a location. Returns `false` if the row is missing or
    /// already inactive.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE locations SET active = FALSE WHERE id = $1 AND active")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore a location. Returns `false` only when the id does not exist.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE locations SET active = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
