//! Conversion between the wire value tree and `serde_json::Value`.
//!
//! The transport layer decodes documents with serde_json; these
//! conversions bridge that representation into `Value` (and back for
//! diagnostics and re-serialization) with minimal allocations.

use crate::array::Array;
use crate::number::Number;
use crate::object::Object;
use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => {
                // JSON numbers that fit i64 stay integers; everything
                // else (including u64 overflow) widens to f64.
                if let Some(i) = n.as_i64() {
                    Self::Number(Number::Int(i))
                } else {
                    Self::Number(Number::Float(n.as_f64().unwrap_or(f64::MAX)))
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Extension trait for `&Value` providing conversion to `serde_json::Value`
pub trait ValueRefExt {
    /// Convert a reference to Value into serde_json::Value
    fn to_json(&self) -> serde_json::Value;
}

impl ValueRefExt for Value {
    fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(Number::Int(i)) => serde_json::Value::Number((*i).into()),
            Value::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(arr) => {
                let mut vec = Vec::with_capacity(arr.len());
                vec.extend(arr.iter().map(|v| v.to_json()));
                serde_json::Value::Array(vec)
            }
            Value::Object(obj) => {
                let mut map = serde_json::Map::with_capacity(obj.len());
                map.extend(obj.entries().map(|(k, v)| (k.clone(), v.to_json())));
                serde_json::Value::Object(map)
            }
        }
    }
}

impl ValueRefExt for Array {
    fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.iter().map(|v| v.to_json()).collect())
    }
}

impl ValueRefExt for Object {
    fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(self.len());
        map.extend(self.entries().map(|(k, v)| (k.clone(), v.to_json())));
        serde_json::Value::Object(map)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_to_value() {
        let v = Value::from(json!({"name": "kim", "age": 3, "score": 1.5}));
        let obj = v.as_object().unwrap();
        assert_eq!(obj.get("name").and_then(Value::as_str), Some("kim"));
        assert_eq!(obj.get("age"), Some(&Value::from(3)));
        assert_eq!(obj.get("score"), Some(&Value::from(1.5)));
    }

    #[test]
    fn test_roundtrip() {
        let original = json!({"a": [1, "two", null], "b": {"c": true}});
        let value = Value::from(original.clone());
        assert_eq!(value.to_json(), original);
    }

    #[test]
    fn test_large_u64_widens() {
        let v = Value::from(json!(u64::MAX));
        assert!(matches!(v, Value::Number(Number::Float(_))));
    }
}
