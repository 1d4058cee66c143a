//! Domain types shared across the Cvstodia wiki backend.
//!
//! Everything here is plain data and pure logic: the error taxonomy, the
//! tri-state image-field update policy, search filter types, and create-time
//! field validation. No I/O lives in this crate.

pub mod error;
pub mod image;
pub mod search;
pub mod types;
pub mod validate;
