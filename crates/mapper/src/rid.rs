//! Record identifiers.
//!
//! A `Rid` names a record by cluster and position (`#12:0`). Parsing
//! is the sole validation gate: any `Rid` in existence is well formed.
//! Negative clusters identify temporary (not yet persisted) records.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RidError;

/// Validated record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rid {
    cluster: i64,
    position: i64,
}

impl Rid {
    /// Create an identifier from raw parts
    #[must_use]
    pub const fn new(cluster: i64, position: i64) -> Self {
        Self { cluster, position }
    }

    /// Cluster component
    #[inline]
    #[must_use]
    pub const fn cluster(&self) -> i64 {
        self.cluster
    }

    /// Position within the cluster
    #[inline]
    #[must_use]
    pub const fn position(&self) -> i64 {
        self.position
    }

    /// Check if this identifies a temporary (unpersisted) record
    #[must_use]
    pub const fn is_temporary(&self) -> bool {
        self.cluster < 0
    }
}

impl FromStr for Rid {
    type Err = RidError;

    /// Parse `#<cluster>:<position>`; the leading `#` is required,
    /// the cluster may be negative, the position may not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || RidError::new(s);
        let rest = s.strip_prefix('#').ok_or_else(err)?;
        let (cluster, position) = rest.split_once(':').ok_or_else(err)?;
        let cluster = parse_signed(cluster).ok_or_else(err)?;
        let position = parse_unsigned(position).ok_or_else(err)?;
        Ok(Self { cluster, position })
    }
}

fn parse_signed(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_unsigned(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for Rid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.cluster, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let rid: Rid = "#12:0".parse().unwrap();
        assert_eq!(rid.cluster(), 12);
        assert_eq!(rid.position(), 0);
        assert!(!rid.is_temporary());
    }

    #[test]
    fn test_parse_temporary_cluster() {
        let rid: Rid = "#-2:7".parse().unwrap();
        assert_eq!(rid.cluster(), -2);
        assert!(rid.is_temporary());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["12:0", "#12", "#12:", "#:0", "#a:0", "#12:-1", "#12:0x", "", "#+1:2"] {
            assert!(bad.parse::<Rid>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_display_roundtrip() {
        let rid = Rid::new(9, 42);
        assert_eq!(rid.to_string(), "#9:42");
        assert_eq!(rid.to_string().parse::<Rid>().unwrap(), rid);
    }
}
