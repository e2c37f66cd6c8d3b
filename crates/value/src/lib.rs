//! Untyped wire value tree for the Tethys object-document mapper.
//!
//! Documents decoded from the database wire format arrive as a loosely
//! typed tree: scalars, ordered field/value nodes and sequences, with
//! numbers, booleans and dates frequently encoded as text. This crate
//! models that tree (`Value`) and provides the loose coercion helpers
//! the mapping layer builds on.

#![warn(clippy::all)]

pub mod array;
pub mod convert;
pub mod error;
pub mod kind;
pub mod number;
pub mod object;
pub mod value;

pub use array::Array;
pub use convert::ValueRefExt;
pub use error::{Result, ValueError};
pub use kind::ValueKind;
pub use number::Number;
pub use object::Object;
pub use value::Value;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Array, Number, Object, Value, ValueKind, ValueRefExt};
}
