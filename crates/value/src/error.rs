//! Error types for value tree access.

use thiserror::Error;

/// Errors raised by checked access into the value tree.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Object key not found
    #[error("key not found: '{key}'")]
    KeyNotFound { key: String },

    /// Array index out of bounds
    #[error("index {index} out of bounds (length: {length})")]
    IndexOutOfBounds { index: usize, length: usize },
}

impl ValueError {
    /// Create a key not found error
    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::KeyNotFound { key: key.into() }
    }

    /// Create an index out of bounds error
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Get error code for monitoring
    pub fn code(&self) -> &'static str {
        match self {
            Self::KeyNotFound { .. } => "VALUE_KEY_NOT_FOUND",
            Self::IndexOutOfBounds { .. } => "VALUE_INDEX_OUT_OF_BOUNDS",
        }
    }
}

/// Result type alias for value operations
pub type Result<T> = std::result::Result<T, ValueError>;
