//! Error types for the coercion engine.
//!
//! Two domain error kinds exist (see `Caster`): `Mismatch`, which is
//! only ever raised under [`MismatchPolicy::Strict`], and
//! `Configuration`, which signals a schema authoring mistake and is
//! fatal regardless of policy. Temporal parse failures are a hard
//! error of their own kind: date coercion has no tolerant fallback.
//!
//! [`MismatchPolicy::Strict`]: crate::context::MismatchPolicy

use thiserror::Error;

/// Errors raised by casting and hydration operations
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CastError {
    /// Value could not satisfy the target type's validity predicate
    /// (strict mode only)
    #[error("trying to cast \"{value}\" as {expected}")]
    Mismatch { value: String, expected: String },

    /// Missing or invalid schema metadata; raised regardless of the
    /// mismatch policy
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    /// Temporal literal failed to parse
    #[error("invalid date/datetime literal '{input}'")]
    DateParse {
        input: String,
        #[source]
        source: chrono::format::ParseError,
    },

    /// Epoch-seconds timestamp outside the representable range
    #[error("timestamp {timestamp} is outside the representable datetime range")]
    DateOutOfRange { timestamp: i64 },

    /// Failure propagated verbatim from the external hydration
    /// component
    #[error("hydration failed: {0}")]
    Hydration(String),
}

impl CastError {
    /// Create a strict-mode mismatch error
    pub fn mismatch(value: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::Mismatch {
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Configuration error for a collection property with no declared
    /// element type
    pub fn missing_cast() -> Self {
        Self::configuration(
            "embedded collection has no declared element type: \
             please add a `cast` attribute to the mapping annotation",
        )
    }

    /// Configuration error for an element type tag with no matching
    /// cast operation
    pub fn unsupported_cast(tag: impl Into<String>) -> Self {
        Self::configuration(format!(
            "unsupported element type '{}': please supply a valid `cast` annotation value",
            tag.into()
        ))
    }

    /// Create a date parse error
    pub fn date_parse(input: impl Into<String>, source: chrono::format::ParseError) -> Self {
        Self::DateParse {
            input: input.into(),
            source,
        }
    }

    /// Create a hydration error
    pub fn hydration(reason: impl Into<String>) -> Self {
        Self::Hydration(reason.into())
    }

    /// Check if this is a (strict-mode) casting mismatch
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }

    /// Check if this is a configuration error
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::Mismatch { .. } => "CAST_MISMATCH",
            Self::Configuration { .. } => "CAST_CONFIGURATION",
            Self::DateParse { .. } => "CAST_DATE_PARSE",
            Self::DateOutOfRange { .. } => "CAST_DATE_OUT_OF_RANGE",
            Self::Hydration(_) => "CAST_HYDRATION",
        }
    }
}

/// Validation failure for a malformed record identifier.
///
/// Link-shaped conversions absorb this into an absent-link result
/// rather than propagating it; see `Rid`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid record identifier '{input}'")]
pub struct RidError {
    pub input: String,
}

impl RidError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Result type alias for casting operations
pub type CastResult<T> = std::result::Result<T, CastError>;
