//! Conversion context: mismatch policy and per-property metadata.

use indexmap::IndexMap;

/// Strict/tolerant switch consulted by every failed scalar conversion.
///
/// Configured once per mapping session and fixed for the lifetime of a
/// conversion call-chain; the same policy applies to every operation
/// rather than per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchPolicy {
    /// Mismatches raise [`CastError::Mismatch`](crate::CastError)
    #[default]
    Strict,
    /// Mismatches silently coerce through a per-type fallback
    Tolerant,
}

impl MismatchPolicy {
    /// Check if mismatches fall back instead of raising
    #[inline]
    #[must_use]
    pub const fn is_tolerant(self) -> bool {
        matches!(self, Self::Tolerant)
    }
}

/// Schema annotation for one mapped property.
///
/// For collection-typed properties the `cast` attribute declares the
/// element type tag the engine dispatches on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyAnnotation {
    name: String,
    cast: Option<String>,
}

impl PropertyAnnotation {
    /// Create an annotation for a named property
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cast: None,
        }
    }

    /// Declare the element type tag
    #[must_use]
    pub fn with_cast(mut self, cast: impl Into<String>) -> Self {
        self.cast = Some(cast.into());
        self
    }

    /// Mapped property name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared element type tag, if any
    #[must_use]
    pub fn cast(&self) -> Option<&str> {
        self.cast.as_deref()
    }
}

/// Ad-hoc metadata attached to a caster before conversion.
///
/// Populated once per caster, read-only during conversion. The
/// originating schema annotation is the one entry the engine itself
/// consumes; the string map carries opaque caller extras.
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    annotation: Option<PropertyAnnotation>,
    extra: IndexMap<String, String>,
}

impl PropertyBag {
    /// Create an empty bag
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the originating schema annotation
    pub fn set_annotation(&mut self, annotation: PropertyAnnotation) {
        self.annotation = Some(annotation);
    }

    /// The originating schema annotation, if set
    #[must_use]
    pub fn annotation(&self) -> Option<&PropertyAnnotation> {
        self.annotation.as_ref()
    }

    /// Set an opaque metadata entry
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra.insert(key.into(), value.into());
    }

    /// Get an opaque metadata entry
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_default_is_strict() {
        assert!(!MismatchPolicy::default().is_tolerant());
        assert!(MismatchPolicy::Tolerant.is_tolerant());
    }

    #[test]
    fn test_annotation_cast_accessor() {
        let ann = PropertyAnnotation::new("tags").with_cast("integer");
        assert_eq!(ann.name(), "tags");
        assert_eq!(ann.cast(), Some("integer"));
        assert_eq!(PropertyAnnotation::new("tags").cast(), None);
    }

    #[test]
    fn test_bag_extras() {
        let mut bag = PropertyBag::new();
        bag.set("origin", "schema");
        assert_eq!(bag.get("origin"), Some("schema"));
        assert_eq!(bag.get("missing"), None);
    }
}
