//! Domain primitives shared by the catalog layers.
//!
//! Entity kinds for error reporting, the tri-state [`Patch`] used by partial
//! updates, and the presence check applied to required text fields.

pub mod error;

pub use error::CatalogError;

use serde::{Deserialize, Deserializer};
use std::fmt;

/// The record types exposed by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Planet,
    People,
    Film,
    User,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Planet => "Planet",
            Self::People => "People",
            Self::Film => "Film",
            Self::User => "User",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Update instruction for a nullable column.
///
/// A JSON key that is absent deserializes to [`Patch::Keep`] (via
/// `#[serde(default)]`), an explicit `null` to [`Patch::Clear`] and any other
/// value to [`Patch::Set`].
///
/// # Examples
///
/// ```rust
/// use swapi::domain::Patch;
///
/// assert_eq!(Patch::Keep.apply(Some(1)), Some(1));
/// assert_eq!(Patch::<i32>::Clear.apply(Some(1)), None);
/// assert_eq!(Patch::Set(2).apply(Some(1)), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Keep,
    Clear,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T> Patch<T> {
    /// Resolves the patch against the current column value.
    #[must_use]
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Keep => current,
            Self::Clear => None,
            Self::Set(value) => Some(value),
        }
    }

    /// Returns the new column value, or `None` when the column is untouched.
    #[must_use]
    pub fn into_update(self) -> Option<Option<T>> {
        match self {
            Self::Keep => None,
            Self::Clear => Some(None),
            Self::Set(value) => Some(Some(value)),
        }
    }

    #[must_use]
    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.map_or(Self::Clear, Self::Set))
    }
}

/// Checks that a required text field is present and not blank.
pub fn required_text(field: &str, value: Option<String>) -> Result<String, CatalogError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Err(CatalogError::Validation(format!(
            "Field '{field}' cannot be empty"
        ))),
        None => Err(CatalogError::Validation(format!(
            "Field '{field}' is required"
        ))),
    }
}

/// Rejects a blank replacement for a required text field. Absent stays absent.
pub fn non_blank(field: &str, value: Option<String>) -> Result<Option<String>, CatalogError> {
    value.map(|text| required_text(field, Some(text))).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Body {
        climate: Patch<String>,
    }

    #[test]
    fn test_patch_distinguishes_absent_and_null() {
        let absent: Body = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.climate, Patch::Keep);

        let null: Body = serde_json::from_str(r#"{"climate": null}"#).unwrap();
        assert_eq!(null.climate, Patch::Clear);

        let set: Body = serde_json::from_str(r#"{"climate": "arid"}"#).unwrap();
        assert_eq!(set.climate, Patch::Set("arid".to_string()));
    }

    #[test]
    fn test_patch_into_update() {
        assert_eq!(Patch::<i32>::Keep.into_update(), None);
        assert_eq!(Patch::<i32>::Clear.into_update(), Some(None));
        assert_eq!(Patch::Set(3).into_update(), Some(Some(3)));
    }

    #[test]
    fn test_required_text() {
        assert_eq!(
            required_text("name", Some("Hoth".to_string())).unwrap(),
            "Hoth"
        );
        assert!(matches!(
            required_text("name", None),
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            required_text("name", Some("   ".to_string())),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("name", None).unwrap(), None);
        assert_eq!(
            non_blank("name", Some("Naboo".to_string())).unwrap(),
            Some("Naboo".to_string())
        );
        assert!(non_blank("name", Some(String::new())).is_err());
    }
}
