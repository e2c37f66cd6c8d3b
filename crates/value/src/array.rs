//! Sequence type for the value tree.
//!
//! Backed by `im::Vector` for cheap structural-sharing clones: the
//! mapping layer clones sub-trees freely while hydrating collections.

use core::fmt;

use im::Vector;

use crate::error::{Result, ValueError};
use crate::value::Value;

/// Persistent sequence of values with efficient structural sharing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array {
    inner: Vector<Value>,
}

impl Array {
    /// Create an empty array
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Vector::new(),
        }
    }

    /// Get the number of elements
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

    /// Get element by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.inner.get(index)
    }

    /// Get element by index or error
    pub fn get_or_err(&self, index: usize) -> Result<&Value> {
        self.inner
            .get(index)
            .ok_or_else(|| ValueError::index_out_of_bounds(index, self.inner.len()))
    }

    /// Append an element
    pub fn push(&mut self, value: Value) {
        self.inner.push_back(value);
    }

    /// Iterate over elements in order
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.inner.iter()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = im::vector::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl fmt::Display for Array {
    /// Comma-joined element list, as used by diagnostics
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for item in &self.inner {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut arr = Array::new();
        arr.push(Value::from(1));
        arr.push(Value::from("two"));
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.get(1).and_then(Value::as_str), Some("two"));
        assert!(arr.get(2).is_none());
    }

    #[test]
    fn test_get_or_err() {
        let arr: Array = [Value::from(1)].into_iter().collect();
        assert!(arr.get_or_err(0).is_ok());
        assert_eq!(
            arr.get_or_err(3),
            Err(ValueError::index_out_of_bounds(3, 1))
        );
    }

    #[test]
    fn test_display_joins_elements() {
        let arr: Array = [Value::from(1), Value::from("a")].into_iter().collect();
        assert_eq!(arr.to_string(), "1, a");
    }
}
