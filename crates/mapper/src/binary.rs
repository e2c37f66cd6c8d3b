//! Binary payload wrapper.
//!
//! The wire format carries binary fields as base64 text; the engine
//! wraps that text as a `data:;base64,<payload>` URI without decoding
//! or validating it. Decoding is offered as an accessor for callers
//! that need the raw bytes.

use core::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Lossless wrapper around a base64-encoded wire payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary {
    payload: String,
}

impl Binary {
    /// Wrap a wire payload as-is (no validation)
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// The wrapped payload, without the data-URI prefix
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Render as a `data:;base64,` URI
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:;base64,{}", self.payload)
    }

    /// Decode the payload into raw bytes.
    ///
    /// This is the first point where the payload's encoding is
    /// actually checked.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.payload)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:;base64,{}", self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_without_validation() {
        let bin = Binary::new("not!!valid!!base64");
        assert_eq!(bin.data_uri(), "data:;base64,not!!valid!!base64");
        assert!(bin.decode().is_err());
    }

    #[test]
    fn test_decode_valid_payload() {
        let bin = Binary::new(STANDARD.encode(b"tethys"));
        assert_eq!(bin.decode().unwrap(), b"tethys");
    }

    #[test]
    fn test_display_matches_data_uri() {
        let bin = Binary::new("aGk=");
        assert_eq!(bin.to_string(), bin.data_uri());
    }
}
