//! Repository for the `interactions` table.

use cvstodia_core::types::DbId;
use sqlx::PgPool;

use crate::models::interaction::{CreateInteraction, Interaction, UpdateInteraction};

const COLUMNS: &str = "id, description, image_url, active";

/// Provides CRUD operations for interactions.
pub struct InteractionRepo;

impl InteractionRepo {
    /// Insert a new interaction, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInteraction,
    ) -> Result<Interaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO interactions (description, image_url)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interaction>(&query)
            .bind(&input.description)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an active interaction by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Interaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interactions WHERE id = $1 AND active");
        sqlx::query_as::<_, Interaction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all active interactions.
    pub async fn list(pool: &PgPool) -> Result<Vec<Interaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interactions WHERE active ORDER BY id");
        sqlx::query_as::<_, Interaction>(&query)
            .fetch_all(pool)
            .await
    }

    /// List soft-deleted interactions.
    pub async fn list_deleted(pool: &PgPool) -> Result<Vec<Interaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interactions WHERE NOT active ORDER BY id");
        sqlx::query_as::<_, Interaction>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an active interaction. Only supplied fields change.
    ///
    /// Returns `None` if the row is missing or soft-deleted.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateInteraction,
    ) -> Result<Option<Interaction>, sqlx::Error> {
        let (touch_image, image_url) = input.image_url.as_update();
        let query = format!(
            "UPDATE interactions SET
                description = COALESCE($2, description),
                image_url = CASE WHEN $3 THEN $4 ELSE image_url END
             WHERE id = $1 AND active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interaction>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(touch_image)
            .bind(image_url)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an interaction. Returns `false` if the row is missing or
    /// already inactive.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE interactions SET active = FALSE WHERE id = $1 AND active")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore an interaction. Returns `false` only when the id does not
    /// exist.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE interactions SET active = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
