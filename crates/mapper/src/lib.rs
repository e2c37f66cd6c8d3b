//! Schema-directed value coercion and hydration engine.
//!
//! Given a loosely typed value decoded from the document-database wire
//! format, [`Caster`] converts it into one of a fixed set of target
//! semantic types ([`TargetType`]) according to declared schema
//! metadata. The hard parts live here: an untyped, textually encoded
//! wire representation; type-specific range and overflow policies; a
//! configurable strict-vs-tolerant [`MismatchPolicy`]; recursive
//! hydration of nested structures through an external [`Hydrator`];
//! and a known wire-format quirk where collections of links arrive as
//! identifiers, decoded objects, or a mix of both.
//!
//! ```
//! use tethys_mapper::{Caster, CastResult, Hydrator, MismatchPolicy};
//! use tethys_value::Value;
//!
//! struct NoopHydrator;
//!
//! impl Hydrator for NoopHydrator {
//!     type Document = Value;
//!
//!     fn hydrate(&self, node: &Value) -> CastResult<Value> {
//!         Ok(node.clone())
//!     }
//!
//!     fn hydrate_collection(&self, nodes: &[Value]) -> CastResult<Vec<Value>> {
//!         Ok(nodes.to_vec())
//!     }
//! }
//!
//! let hydrator = NoopHydrator;
//! let caster = Caster::new(&hydrator, MismatchPolicy::Tolerant);
//! assert!(caster.cast_boolean(&Value::from("1")).unwrap());
//! assert_eq!(caster.cast_string(&Value::from(3)).unwrap(), "3");
//! ```

#![warn(clippy::all)]

pub mod binary;
pub mod caster;
pub mod context;
pub mod error;
pub mod hydration;
pub mod rid;
pub mod target;
pub mod temporal;

pub use binary::Binary;
pub use caster::{
    BYTE_MAX, BYTE_MIN, Casted, Caster, DECIMAL_MAX, DECIMAL_MIN, LONG_LIMIT, SHORT_LIMIT,
};
pub use context::{MismatchPolicy, PropertyAnnotation, PropertyBag};
pub use error::{CastError, CastResult, RidError};
pub use hydration::{Hydrator, Link, LinkCollection, ValueProxy};
pub use rid::Rid;
pub use target::TargetType;
pub use temporal::{DateRep, normalize_fraction_separator};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        CastError, CastResult, Casted, Caster, Hydrator, Link, LinkCollection, MismatchPolicy,
        PropertyAnnotation, PropertyBag, Rid, TargetType,
    };
    pub use tethys_value::prelude::*;
}
