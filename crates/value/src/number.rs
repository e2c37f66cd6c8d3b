//! Numeric scalar shared by the value tree.
//!
//! The wire format only distinguishes integers from doubles; narrower
//! widths (byte, short) are policies applied by the mapping layer, so
//! `Number` deliberately carries the full original value.

use core::fmt;

/// A wire number: 64-bit integer or double-precision float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer number (i64)
    Int(i64),
    /// Floating point number (f64)
    Float(f64),
}

impl Number {
    /// Widen to f64 (lossy above 2^53 for `Int`)
    #[inline]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Narrow to i64, truncating the fractional part of a float
    #[inline]
    #[must_use]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Int(i) => i,
            Self::Float(f) => f as i64,
        }
    }

    /// Check if the value is strictly negative
    #[inline]
    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Int(i) => i < 0,
            Self::Float(f) => f < 0.0,
        }
    }

    /// Check whether `|self| < limit`.
    ///
    /// Exact for integers (computed in u128 so `i64::MIN` does not
    /// overflow); floats compare in f64.
    #[inline]
    #[must_use]
    pub fn magnitude_below(self, limit: i64) -> bool {
        match self {
            Self::Int(i) => u128::from(i.unsigned_abs()) < limit.unsigned_abs() as u128,
            Self::Float(f) => f.abs() < limit as f64,
        }
    }

    /// Check whether the value lies in `[min, max]` (inclusive)
    #[inline]
    #[must_use]
    pub fn in_range(self, min: i64, max: i64) -> bool {
        match self {
            Self::Int(i) => i >= min && i <= max,
            Self::Float(f) => f >= min as f64 && f <= max as f64,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_below_exact_for_int() {
        assert!(Number::Int(32766).magnitude_below(32767));
        assert!(!Number::Int(32767).magnitude_below(32767));
        assert!(!Number::Int(-32767).magnitude_below(32767));
        // i64::MIN must not overflow the abs computation
        assert!(!Number::Int(i64::MIN).magnitude_below(i64::MAX));
        assert!(!Number::Int(i64::MAX).magnitude_below(i64::MAX));
        assert!(Number::Int(i64::MAX - 1).magnitude_below(i64::MAX));
    }

    #[test]
    fn test_magnitude_below_float() {
        assert!(Number::Float(-100.5).magnitude_below(32767));
        assert!(!Number::Float(40000.0).magnitude_below(32767));
    }

    #[test]
    fn test_in_range() {
        assert!(Number::Int(-128).in_range(-128, 127));
        assert!(Number::Int(127).in_range(-128, 127));
        assert!(!Number::Int(128).in_range(-128, 127));
        assert!(Number::Float(12.5).in_range(-128, 127));
        assert!(!Number::Float(-200.0).in_range(-128, 127));
    }

    #[test]
    fn test_narrowing() {
        assert_eq!(Number::Float(42.9).as_i64(), 42);
        assert_eq!(Number::Int(42).as_f64(), 42.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(7).to_string(), "7");
        assert_eq!(Number::Float(1.5).to_string(), "1.5");
    }
}
