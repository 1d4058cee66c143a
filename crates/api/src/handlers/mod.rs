//! HTTP handlers, one module per resource.

pub mod category;
pub mod image;
pub mod interaction;
pub mod item;
pub mod location;
