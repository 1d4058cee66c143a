//! Integration tests for the soft-delete / restore lifecycle.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Created rows are active and visible through default reads
//! - Soft-deleted rows disappear from `find_by_id` and `list`, and show up
//!   in `list_deleted`
//! - Soft-delete fails on a row that is missing or already inactive
//! - Restore succeeds for any existing row, including already-active ones
//! - The pattern is identical across all four entity types

mod common;

use common::{new_category, new_interaction, new_item, new_location};
use cvstodia_db::repositories::{CategoryRepo, InteractionRepo, ItemRepo, LocationRepo};
use sqlx::PgPool;

#[sqlx::test]
async fn create_returns_active_row_visible_in_reads(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Reliquia"))
        .await
        .unwrap();
    assert!(category.active);

    let found = CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .expect("created category should be readable");
    assert_eq!(found.name, "Reliquia");
    assert_eq!(found.description, category.description);

    let listed = CategoryRepo::list(&pool).await.unwrap();
    assert!(listed.iter().any(|c| c.id == category.id));
}

#[sqlx::test]
async fn soft_delete_hides_and_restore_reveals(pool: PgPool) {
    let location = LocationRepo::create(&pool, &new_location("Albero"))
        .await
        .unwrap();

    assert!(LocationRepo::soft_delete(&pool, location.id).await.unwrap());

    assert!(LocationRepo::find_by_id(&pool, location.id)
        .await
        .unwrap()
        .is_none());
    let active = LocationRepo::list(&pool).await.unwrap();
    assert!(active.iter().all(|l| l.id != location.id));
    let deleted = LocationRepo::list_deleted(&pool).await.unwrap();
    assert!(deleted.iter().any(|l| l.id == location.id));

    assert!(LocationRepo::restore(&pool, location.id).await.unwrap());

    let restored = LocationRepo::find_by_id(&pool, location.id)
        .await
        .unwrap()
        .expect("restored location should be readable again");
    assert_eq!(restored.name, location.name);
    assert_eq!(restored.kind, location.kind);
    assert!(restored.active);
}

#[sqlx::test]
async fn soft_delete_twice_fails_the_second_time(pool: PgPool) {
    let interaction = InteractionRepo::create(&pool, &new_interaction("Pull the lever"))
        .await
        .unwrap();

    assert!(InteractionRepo::soft_delete(&pool, interaction.id)
        .await
        .unwrap());
    assert!(!InteractionRepo::soft_delete(&pool, interaction.id)
        .await
        .unwrap());
}

#[sqlx::test]
async fn soft_delete_of_missing_row_fails(pool: PgPool) {
    assert!(!ItemRepo::soft_delete(&pool, 999_999).await.unwrap());
}

#[sqlx::test]
async fn restore_of_active_row_succeeds(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Cuentas"))
        .await
        .unwrap();
    // Never deleted; restore is idempotent-true.
    assert!(CategoryRepo::restore(&pool, category.id).await.unwrap());
}

#[sqlx::test]
async fn restore_of_missing_row_fails(pool: PgPool) {
    assert!(!CategoryRepo::restore(&pool, 999_999).await.unwrap());
}

#[sqlx::test]
async fn update_of_soft_deleted_row_reports_not_found(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("Rosario", None))
        .await
        .unwrap();
    assert!(ItemRepo::soft_delete(&pool, item.item.id).await.unwrap());

    let patched = ItemRepo::update(
        &pool,
        item.item.id,
        &cvstodia_db::models::item::UpdateItem {
            name: Some("Renamed".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(patched.is_none(), "update is only defined on active rows");
}

#[sqlx::test]
async fn soft_deleted_items_keep_their_link_rows(pool: PgPool) {
    let location = LocationRepo::create(&pool, &new_location("Jondo"))
        .await
        .unwrap();
    let mut input = new_item("Campana", None);
    input.location_ids = vec![location.id];
    let item = ItemRepo::create(&pool, &input).await.unwrap();

    assert!(ItemRepo::soft_delete(&pool, item.item.id).await.unwrap());

    let deleted = ItemRepo::list_deleted(&pool).await.unwrap();
    let hidden = deleted
        .iter()
        .find(|v| v.item.id == item.item.id)
        .expect("soft-deleted item should be listed");
    assert_eq!(hidden.location_ids, vec![location.id]);
}
