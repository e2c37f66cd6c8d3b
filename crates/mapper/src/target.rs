//! Target semantic types for schema-directed coercion.
//!
//! Every tag maps to exactly one cast operation; the enum makes
//! unknown tags unrepresentable in typed code. Tags that arrive as
//! free-form strings from schema metadata go through
//! [`TargetType::from_tag`], and an unrecognized string there is a
//! configuration error at the call site, not a value of this type.

use core::fmt;

/// Declared target type of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Boolean,
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Decimal,
    String,
    Binary,
    Date,
    DateTime,
    Embedded,
    EmbeddedList,
    EmbeddedSet,
    EmbeddedMap,
    Link,
    LinkList,
    LinkSet,
    LinkMap,
}

impl TargetType {
    /// Parse a free-form schema tag (case-insensitive, with or
    /// without underscores: `"linklist"`, `"embedded_map"`, ...)
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized: String = tag
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Some(match normalized.as_str() {
            "boolean" | "bool" => Self::Boolean,
            "byte" => Self::Byte,
            "short" => Self::Short,
            "integer" | "int" => Self::Integer,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            "decimal" => Self::Decimal,
            "string" => Self::String,
            "binary" => Self::Binary,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "embedded" => Self::Embedded,
            "embeddedlist" => Self::EmbeddedList,
            "embeddedset" => Self::EmbeddedSet,
            "embeddedmap" => Self::EmbeddedMap,
            "link" => Self::Link,
            "linklist" => Self::LinkList,
            "linkset" => Self::LinkSet,
            "linkmap" => Self::LinkMap,
            _ => return None,
        })
    }

    /// Canonical lowercase tag
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::Binary => "binary",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Embedded => "embedded",
            Self::EmbeddedList => "embeddedlist",
            Self::EmbeddedSet => "embeddedset",
            Self::EmbeddedMap => "embeddedmap",
            Self::Link => "link",
            Self::LinkList => "linklist",
            Self::LinkSet => "linkset",
            Self::LinkMap => "linkmap",
        }
    }

    /// Check if this is a link-shaped target
    #[must_use]
    pub const fn is_link(&self) -> bool {
        matches!(
            self,
            Self::Link | Self::LinkList | Self::LinkSet | Self::LinkMap
        )
    }

    /// Check if this target recurses into per-element typing
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(
            self,
            Self::EmbeddedList
                | Self::EmbeddedSet
                | Self::EmbeddedMap
                | Self::LinkList
                | Self::LinkSet
                | Self::LinkMap
        )
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
