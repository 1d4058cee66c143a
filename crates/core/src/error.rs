use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// The set is deliberately closed so the HTTP layer can map every failure to
/// a user-facing response uniformly across all four entity types.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}
