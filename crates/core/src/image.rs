//! Tri-state update policy for optional image-reference fields.
//!
//! A partial update can leave the stored image URL untouched, clear it, or
//! replace it with a new value. The HTTP layer decodes the caller's intent
//! into an [`ImagePatch`] before it reaches the repositories, so storage code
//! only ever sees the resolved three-way switch and never inspects the raw
//! request again.

use serde::{Deserialize, Deserializer};

/// Caller intent for an optional image-reference field during partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImagePatch {
    /// Field not supplied: leave the stored value untouched.
    #[default]
    Keep,
    /// Explicit `null` or empty-string sentinel: clear the stored value.
    Clear,
    /// Overwrite the stored value with a new URL.
    Set(String),
}

impl ImagePatch {
    /// Apply the patch to the currently stored value.
    pub fn apply(&self, current: Option<String>) -> Option<String> {
        match self {
            ImagePatch::Keep => current,
            ImagePatch::Clear => None,
            ImagePatch::Set(url) => Some(url.clone()),
        }
    }

    /// Split into `(touch, value)` binds for a
    /// `CASE WHEN $touch THEN $value ELSE image_url END` update clause.
    ///
    /// `Keep` yields `(false, None)` so the column is never written.
    pub fn as_update(&self) -> (bool, Option<&str>) {
        match self {
            ImagePatch::Keep => (false, None),
            ImagePatch::Clear => (true, None),
            ImagePatch::Set(url) => (true, Some(url)),
        }
    }

    /// Deserialize a JSON field into a patch.
    ///
    /// Serde only invokes this when the field is present, so pair it with
    /// `#[serde(default)]`: an absent field becomes [`ImagePatch::Keep`],
    /// JSON `null` and `""` become [`ImagePatch::Clear`], and any other
    /// string becomes [`ImagePatch::Set`].
    pub fn deserialize_field<'de, D>(deserializer: D) -> Result<ImagePatch, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(match value {
            None => ImagePatch::Clear,
            Some(s) if s.is_empty() => ImagePatch::Clear,
            Some(s) => ImagePatch::Set(s),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "ImagePatch::deserialize_field")]
        image_url: ImagePatch,
    }

    #[test]
    fn keep_preserves_current_value() {
        let current = Some("https://bucket/a.png".to_string());
        assert_eq!(ImagePatch::Keep.apply(current.clone()), current);
        assert_eq!(ImagePatch::Keep.apply(None), None);
    }

    #[test]
    fn clear_discards_current_value() {
        let current = Some("https://bucket/a.png".to_string());
        assert_eq!(ImagePatch::Clear.apply(current), None);
    }

    #[test]
    fn set_overwrites_current_value() {
        let patch = ImagePatch::Set("https://bucket/b.png".to_string());
        assert_eq!(
            patch.apply(Some("https://bucket/a.png".to_string())),
            Some("https://bucket/b.png".to_string())
        );
    }

    #[test]
    fn as_update_never_touches_on_keep() {
        assert_eq!(ImagePatch::Keep.as_update(), (false, None));
        assert_eq!(ImagePatch::Clear.as_update(), (true, None));
        assert_eq!(
            ImagePatch::Set("x".to_string()).as_update(),
            (true, Some("x"))
        );
    }

    #[test]
    fn absent_field_decodes_as_keep() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.image_url, ImagePatch::Keep);
    }

    #[test]
    fn null_field_decodes_as_clear() {
        let patch: Patch = serde_json::from_str(r#"{"image_url": null}"#).unwrap();
        assert_eq!(patch.image_url, ImagePatch::Clear);
    }

    #[test]
    fn empty_string_decodes_as_clear() {
        let patch: Patch = serde_json::from_str(r#"{"image_url": ""}"#).unwrap();
        assert_eq!(patch.image_url, ImagePatch::Clear);
    }

    #[test]
    fn string_decodes_as_set() {
        let patch: Patch = serde_json::from_str(r#"{"image_url": "https://x/y.png"}"#).unwrap();
        assert_eq!(
            patch.image_url,
            ImagePatch::Set("https://x/y.png".to_string())
        );
    }
}
