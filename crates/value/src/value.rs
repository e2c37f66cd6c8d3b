//! Unified value enum for the decoded wire tree.
//!
//! This is the central type of the crate: everything the transport
//! layer decodes is one of these variants. The `loose_*` helpers mirror
//! the permissive casts of the textual wire format and back the
//! tolerant-mode fallbacks in the mapping layer.

use core::fmt;

use crate::array::Array;
use crate::kind::ValueKind;
use crate::number::Number;
use crate::object::Object;

/// Unified value type for decoded wire data
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Null/absent value
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Numeric value (integer or double)
    Number(Number),

    /// UTF-8 text
    String(String),

    /// Sequence of values
    Array(Array),

    /// Structured node (ordered field/value mapping)
    Object(Object),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub const fn boolean(v: bool) -> Self {
        Self::Boolean(v)
    }

    /// Create an integer value
    pub const fn int(v: i64) -> Self {
        Self::Number(Number::Int(v))
    }

    /// Create a float value
    pub const fn float(v: f64) -> Self {
        Self::Number(Number::Float(v))
    }

    /// Create a string value
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        ValueKind::from_value(self)
    }

    /// Check if this is null
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is a boolean
    #[inline]
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(_))
    }

    /// Check if this is a number variant
    #[inline]
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Check if this is a string
    #[inline]
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Check if this is an array
    #[inline]
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Check if this is a structured node
    #[inline]
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    // ==================== Accessors ====================

    /// Get as boolean
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as array
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as structured node
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Interpret this value as a number, accepting numeric text.
    ///
    /// The wire format frequently encodes numbers as strings, so a
    /// string that parses fully as `i64` or as a finite `f64` counts
    /// as numeric here. Word forms ("nan", "inf") do not.
    #[must_use]
    pub fn as_numeric(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            Self::String(s) => {
                let t = s.trim();
                if t.is_empty() {
                    return None;
                }
                if let Ok(i) = t.parse::<i64>() {
                    return Some(Number::Int(i));
                }
                if !t
                    .bytes()
                    .all(|b| matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E'))
                {
                    return None;
                }
                t.parse::<f64>().ok().filter(|f| f.is_finite()).map(Number::Float)
            }
            _ => None,
        }
    }

    // ==================== Loose coercions ====================

    /// Generic truthiness of the wire representation.
    ///
    /// Null, `0`, `0.0`, the empty string, `"0"` and the empty array
    /// are false; structured nodes are always true.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Number(Number::Int(i)) => *i != 0,
            Self::Number(Number::Float(f)) => *f != 0.0,
            Self::String(s) => !s.is_empty() && s != "0",
            Self::Array(a) => !a.is_empty(),
            Self::Object(_) => true,
        }
    }

    /// Forced integer cast: non-numeric text becomes 0, structured
    /// nodes become 1, arrays count as their non-emptiness.
    #[must_use]
    pub fn loose_int(&self) -> i64 {
        match self {
            Self::Null => 0,
            Self::Boolean(b) => i64::from(*b),
            Self::Number(n) => n.as_i64(),
            Self::String(_) => self.as_numeric().map_or(0, Number::as_i64),
            Self::Array(a) => i64::from(!a.is_empty()),
            Self::Object(_) => 1,
        }
    }

    /// Forced floating-point cast, same shape as [`Self::loose_int`]
    #[must_use]
    pub fn loose_f64(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Boolean(b) => f64::from(u8::from(*b)),
            Self::Number(n) => n.as_f64(),
            Self::String(_) => self.as_numeric().map_or(0.0, Number::as_f64),
            Self::Array(a) => f64::from(!a.is_empty()),
            Self::Object(_) => 1.0,
        }
    }

    /// Forced string cast.
    ///
    /// Arrays stringify as the literal text `Array` and structured
    /// nodes as `Object`; booleans render as `1` / empty string.
    #[must_use]
    pub fn loose_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Boolean(true) => "1".to_string(),
            Self::Boolean(false) => String::new(),
            Self::Number(n) => n.to_string(),
            Self::String(s) => s.clone(),
            Self::Array(_) => "Array".to_string(),
            Self::Object(_) => "Object".to_string(),
        }
    }
}

impl fmt::Display for Value {
    /// Diagnostic rendering: scalars as themselves, arrays as a
    /// comma-joined element list, structured nodes as their type name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Boolean(true) => f.write_str("1"),
            Self::Boolean(false) => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Array(a) => write!(f, "{a}"),
            Self::Object(o) => write!(f, "{o}"),
        }
    }
}

// ==================== From impls ====================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(Number::Int(i64::from(v)))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Number(Number::Int(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(Number::Float(v))
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v.into_iter().collect())
    }
}
