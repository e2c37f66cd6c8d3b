//! Hydration boundary and link result shapes.
//!
//! The engine never turns a raw node into a live domain object itself;
//! it delegates to an external [`Hydrator`] and returns its results
//! verbatim. The types here distinguish the three states a link-shaped
//! result can be in: resolved to a document, pending behind a raw
//! identifier, or absent.

use tethys_value::Value;

use crate::error::CastResult;
use crate::rid::Rid;

/// External object-hydration component.
///
/// Implementations accept exactly the raw structured-node / sequence
/// shapes the engine passes and return hydrated domain objects in
/// corresponding order. Blocking or IO behavior is the implementor's
/// concern.
pub trait Hydrator {
    /// The live domain object type
    type Document;

    /// Hydrate a single raw structured node
    fn hydrate(&self, node: &Value) -> CastResult<Self::Document>;

    /// Hydrate a sequence of raw nodes, preserving order
    fn hydrate_collection(&self, nodes: &[Value]) -> CastResult<Vec<Self::Document>>;
}

/// Wrapper marking a document that was decoded inline and hydrated
/// eagerly: resolved, but not yet registered as a managed object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueProxy<D> {
    document: D,
}

impl<D> ValueProxy<D> {
    /// Wrap a hydrated document
    pub fn new(document: D) -> Self {
        Self { document }
    }

    /// Borrow the wrapped document
    pub fn get(&self) -> &D {
        &self.document
    }

    /// Unwrap into the document
    pub fn into_inner(self) -> D {
        self.document
    }
}

/// Result of a single-link conversion.
///
/// A `Rid` result means "not yet fetched": the caller is expected to
/// issue a follow-up resolution request. The engine never performs
/// that fetch itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link<D> {
    /// Decoded inline and hydrated eagerly
    Document(ValueProxy<D>),
    /// Raw identifier, not yet fetched
    Rid(Rid),
}

impl<D> Link<D> {
    /// Check if the link is already resolved to a document
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Document(_))
    }

    /// The pending identifier, if unresolved
    #[must_use]
    pub fn as_rid(&self) -> Option<&Rid> {
        match self {
            Self::Rid(rid) => Some(rid),
            Self::Document(_) => None,
        }
    }

    /// The hydrated document, if resolved
    #[must_use]
    pub fn as_document(&self) -> Option<&D> {
        match self {
            Self::Document(proxy) => Some(proxy.get()),
            Self::Rid(_) => None,
        }
    }
}

/// Result of a link-collection conversion.
///
/// The upstream wire format serializes link collections inconsistently
/// as either arrays of identifiers or arrays of fully decoded objects;
/// the two arms reflect which shape arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkCollection<D> {
    /// Batch-hydrated from decoded objects
    Documents(Vec<D>),
    /// Validated identifiers, none fetched yet
    Rids(Vec<Rid>),
}

impl<D> LinkCollection<D> {
    /// Number of elements in either arm
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Documents(docs) => docs.len(),
            Self::Rids(rids) => rids.len(),
        }
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the collection was batch-hydrated
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        matches!(self, Self::Documents(_))
    }
}
