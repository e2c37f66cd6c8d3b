//! Structured node (document) type for the value tree.
//!
//! Wire documents are *ordered* field/value mappings: the decoder emits
//! fields in document order and the mapping layer relies on that order
//! when flattening keyed collections. Backed by `indexmap::IndexMap`,
//! which preserves insertion order.

use core::fmt;

use indexmap::IndexMap;

use crate::error::{Result, ValueError};
use crate::value::Value;

/// Insertion-ordered field/value mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    inner: IndexMap<String, Value>,
}

impl Object {
    /// Create an empty object
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Get the number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get field value by name
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Get field value by name or error
    pub fn get_or_err(&self, key: &str) -> Result<&Value> {
        self.inner
            .get(key)
            .ok_or_else(|| ValueError::key_not_found(key))
    }

    /// Check whether a field exists
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Insert a field, replacing any previous value (position kept)
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.inner.insert(key.into(), value);
    }

    /// Iterate fields in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }

    /// Iterate field names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.inner.keys()
    }

    /// Iterate field values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.inner.values()
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Object")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut obj = Object::new();
        obj.insert("z", Value::from(1));
        obj.insert("a", Value::from(2));
        obj.insert("m", Value::from(3));
        let keys: Vec<&String> = obj.keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_get_or_err() {
        let mut obj = Object::new();
        obj.insert("name", Value::from("kim"));
        assert!(obj.get_or_err("name").is_ok());
        assert_eq!(
            obj.get_or_err("missing"),
            Err(ValueError::key_not_found("missing"))
        );
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut obj = Object::new();
        obj.insert("a", Value::from(1));
        obj.insert("b", Value::from(2));
        obj.insert("a", Value::from(9));
        let entries: Vec<(&String, &Value)> = obj.entries().collect();
        assert_eq!(entries[0].0, "a");
        assert_eq!(entries[0].1, &Value::from(9));
    }
}
