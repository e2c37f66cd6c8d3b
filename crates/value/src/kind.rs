//! Value kind classification.
//!
//! `ValueKind` is a lightweight tag describing the shape of a `Value`,
//! used for diagnostics and mismatch messages.

use core::fmt::{Display, Formatter};

use crate::number::Number;
use crate::value::Value;

/// Represents the kind/type of a Value
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Check if this kind is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }

    /// Check if this kind is a collection
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    /// Get the kind from a Value
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Boolean(_) => Self::Boolean,
            Value::Number(Number::Int(_)) => Self::Integer,
            Value::Number(Number::Float(_)) => Self::Float,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Get a descriptive name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value() {
        assert_eq!(ValueKind::from_value(&Value::Null), ValueKind::Null);
        assert_eq!(ValueKind::from_value(&Value::from(3.5)), ValueKind::Float);
        assert_eq!(ValueKind::from_value(&Value::from(3)), ValueKind::Integer);
    }

    #[test]
    fn test_predicates() {
        assert!(ValueKind::Integer.is_numeric());
        assert!(!ValueKind::String.is_numeric());
        assert!(ValueKind::Object.is_collection());
        assert!(!ValueKind::Boolean.is_collection());
    }
}
