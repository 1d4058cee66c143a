//! Input field validation shared by the write handlers.

use crate::error::CoreError;

/// Reject blank required text fields.
///
/// Whitespace-only values count as blank.
pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

/// Like [`require_non_blank`], for partial-update fields.
///
/// An absent field passes (it means "leave the stored value alone"), but a
/// supplied value must not be blank: COALESCE-style updates would otherwise
/// happily store an empty required field.
pub fn require_non_blank_if_present(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), CoreError> {
    match value {
        Some(v) => require_non_blank(field, v),
        None => Ok(()),
    }
}
