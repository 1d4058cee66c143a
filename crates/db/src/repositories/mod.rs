//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. All of them share the same
//! soft-delete contract: default reads see only active rows, `soft_delete`
//! fails on rows that are missing or already inactive, and `restore` succeeds
//! for any existing row.

pub mod category_repo;
pub mod interaction_repo;
pub mod item_repo;
pub mod location_repo;

pub use category_repo::CategoryRepo;
pub use interaction_repo::InteractionRepo;
pub use item_repo::ItemRepo;
pub use location_repo::LocationRepo;
