//! Entity models and DTOs.
//!
//! Each module holds the row struct for one table plus its create/update
//! DTOs. Read models serialize with camelCase field names; the `active` flag
//! drives soft-delete logic internally and is never exposed to callers.

pub mod category;
pub mod interaction;
pub mod item;
pub mod location;
