//! Repository for the `items` table and its two join tables.
//!
//! Besides the uniform soft-delete CRUD, this repository owns the
//! relationship reconciler: every write of a link set is a full replace
//! (delete then insert) of that relation, executed in the same transaction as
//! the item row itself so a crash can never leave a half-replaced set behind.

use cvstodia_core::search::ItemFilter;
use cvstodia_core::types::DbId;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};

use crate::models::category::Category;
use crate::models::interaction::Interaction;
use crate::models::item::{CreateItem, Item, ItemDetail, ItemView, UpdateItem};
use crate::models::location::Location;

const COLUMNS: &str = "id, name, description, cost, indispensable, category_id, image_url, active";

/// Provides CRUD, search, and link reconciliation for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item and its initial link sets in one transaction.
    ///
    /// The target sets go through the same reconciliation as updates, which
    /// against a freshly created item amounts to "delete none, insert the
    /// valid subset".
    pub async fn create(pool: &PgPool, input: &CreateItem) -> Result<ItemView, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert = format!(
            "INSERT INTO items (name, description, cost, indispensable, category_id, image_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, Item>(&insert)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.cost)
            .bind(input.indispensable)
            .bind(input.category_id)
            .bind(&input.image_url)
            .fetch_one(&mut *tx)
            .await?;

        Self::reconcile_links(&mut tx, "item_locations", "location_id", "locations", item.id, &input.location_ids).await?;
        Self::reconcile_links(&mut tx, "item_interactions", "interaction_id", "interactions", item.id, &input.interaction_ids).await?;

        tx.commit().await?;
        Self::load_view(pool, item).await
    }

    /// Find an active item row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1 AND active");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active item with its resolved link-id sets.
    pub async fn find_view(pool: &PgPool, id: DbId) -> Result<Option<ItemView>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(item) => Ok(Some(Self::load_view(pool, item).await?)),
            None => Ok(None),
        }
    }

    /// List all active items with their link-id sets.
    pub async fn list(pool: &PgPool) -> Result<Vec<ItemView>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE active ORDER BY id");
        let items = sqlx::query_as::<_, Item>(&query).fetch_all(pool).await?;
        Self::load_views(pool, items).await
    }

    /// List soft-deleted items with their link-id sets.
    ///
    /// Link rows are not cascaded on soft-delete, so a deleted item still
    /// reports the associations it had when it was hidden.
    pub async fn list_deleted(pool: &PgPool) -> Result<Vec<ItemView>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE NOT active ORDER BY id");
        let items = sqlx::query_as::<_, Item>(&query).fetch_all(pool).await?;
        Self::load_views(pool, items).await
    }

    /// Update an active item and, when target sets are supplied, resync its
    /// link sets — all in one transaction.
    ///
    /// Returns `None` if the row is missing or soft-deleted; update is only
    /// defined on active rows.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateItem,
    ) -> Result<Option<ItemView>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (touch_image, image_url) = input.image_url.as_update();
        let query = format!(
            "UPDATE items SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                cost = COALESCE($4, cost),
                indispensable = COALESCE($5, indispensable),
                category_id = COALESCE($6, category_id),
                image_url = CASE WHEN $7 THEN $8 ELSE image_url END
             WHERE id = $1 AND active
             RETURNING {COLUMNS}"
        );
        let item = sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.cost)
            .bind(input.indispensable)
            .bind(input.category_id)
            .bind(touch_image)
            .bind(image_url)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(item) = item else {
            // Dropping the transaction rolls back; nothing was visible yet.
            return Ok(None);
        };

        if let Some(ref location_ids) = input.location_ids {
            Self::reconcile_links(&mut tx, "item_locations", "location_id", "locations", item.id, location_ids).await?;
        }
        if let Some(ref interaction_ids) = input.interaction_ids {
            Self::reconcile_links(&mut tx, "item_interactions", "interaction_id", "interactions", item.id, interaction_ids).await?;
        }

        tx.commit().await?;
        Ok(Some(Self::load_view(pool, item).await?))
    }

    /// Soft-delete an item. Returns `false` if the row is missing or already
    /// inactive. Link rows are left in place.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE items SET active = FALSE WHERE id = $1 AND active")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Restore an item. Returns `false` only when the id does not exist.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE items SET active = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Search active items with conjunctive filters.
    ///
    /// Category, indispensability, and name-substring filters run in SQL; the
    /// location filter is applied after the link sets are materialized, which
    /// composes correctly with the others at this data volume.
    pub async fn search(pool: &PgPool, filter: &ItemFilter) -> Result<Vec<ItemView>, sqlx::Error> {
        let mut builder =
            QueryBuilder::<Postgres>::new(format!("SELECT {COLUMNS} FROM items WHERE active"));
        if let Some(category_id) = filter.category_id {
            builder.push(" AND category_id = ").push_bind(category_id);
        }
        if let Some(indispensable) = filter.indispensable {
            builder.push(" AND indispensable = ").push_bind(indispensable);
        }
        if let Some(ref name) = filter.name {
            builder.push(" AND name ILIKE ").push_bind(format!("%{name}%"));
        }
        builder.push(" ORDER BY id");

        let items = builder.build_query_as::<Item>().fetch_all(pool).await?;

        let mut views = Vec::with_capacity(items.len());
        for item in items {
            let view = Self::load_view(pool, item).await?;
            if filter.matches_location(&view.location_ids) {
                views.push(view);
            }
        }
        Ok(views)
    }

    /// Find an active item enriched with its related rows.
    ///
    /// The nested category/location/interaction rows are returned as stored,
    /// without filtering by their own active flags: soft-deleting a related
    /// entity does not cascade into existing links.
    pub async fn find_detailed(pool: &PgPool, id: DbId) -> Result<Option<ItemDetail>, sqlx::Error> {
        let Some(item) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let category = match item.category_id {
            Some(category_id) => {
                sqlx::query_as::<_, Category>(
                    "SELECT id, name, description, image_url, active
                     FROM categories WHERE id = $1",
                )
                .bind(category_id)
                .fetch_optional(pool)
                .await?
            }
            None => None,
        };

        let locations = sqlx::query_as::<_, Location>(
            "SELECT l.id, l.name, l.kind, l.description, l.image_url, l.active
             FROM locations l
             JOIN item_locations il ON il.location_id = l.id
             WHERE il.item_id = $1
             ORDER BY l.id",
        )
        .bind(item.id)
        .fetch_all(pool)
        .await?;

        let interactions = sqlx::query_as::<_, Interaction>(
            "SELECT i.id, i.description, i.image_url, i.active
             FROM interactions i
             JOIN item_interactions ii ON ii.interaction_id = i.id
             WHERE ii.item_id = $1
             ORDER BY i.id",
        )
        .bind(item.id)
        .fetch_all(pool)
        .await?;

        Ok(Some(ItemDetail {
            item,
            category,
            locations,
            interactions,
        }))
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Replace one relation's link set within an existing transaction.
    ///
    /// Deletes the existing links, then inserts one row per target id that
    /// resolves to an existing related entity. The existence check
    /// deliberately ignores the active flag, and unresolvable ids are dropped
    /// silently rather than reported. `ON CONFLICT DO NOTHING` absorbs
    /// duplicate ids in the target set.
    async fn reconcile_links(
        tx: &mut Transaction<'_, Postgres>,
        link_table: &str,
        link_column: &str,
        related_table: &str,
        item_id: DbId,
        target_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let delete = format!("DELETE FROM {link_table} WHERE item_id = $1");
        sqlx::query(&delete).bind(item_id).execute(&mut **tx).await?;

        if target_ids.is_empty() {
            return Ok(());
        }

        let insert = format!(
            "INSERT INTO {link_table} (item_id, {link_column})
             SELECT $1, id FROM {related_table} WHERE id = ANY($2)
             ON CONFLICT DO NOTHING"
        );
        sqlx::query(&insert)
            .bind(item_id)
            .bind(target_ids)
            .execute(&mut **tx)
            .await?;
        Ok(())
    }

    /// Attach the resolved link-id sets to an item row.
    async fn load_view(pool: &PgPool, item: Item) -> Result<ItemView, sqlx::Error> {
        let location_ids = sqlx::query_scalar::<_, DbId>(
            "SELECT location_id FROM item_locations WHERE item_id = $1 ORDER BY location_id",
        )
        .bind(item.id)
        .fetch_all(pool)
        .await?;

        let interaction_ids = sqlx::query_scalar::<_, DbId>(
            "SELECT interaction_id FROM item_interactions WHERE item_id = $1 ORDER BY interaction_id",
        )
        .bind(item.id)
        .fetch_all(pool)
        .await?;

        Ok(ItemView {
            item,
            location_ids,
            interaction_ids,
        })
    }

    async fn load_views(pool: &PgPool, items: Vec<Item>) -> Result<Vec<ItemView>, sqlx::Error> {
        let mut views = Vec::with_capacity(items.len());
        for item in items {
            views.push(Self::load_view(pool, item).await?);
        }
        Ok(views)
    }
}
