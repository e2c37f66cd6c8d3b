//! Schema-directed value coercion engine.
//!
//! One operation per target type plus a generic dispatch path used for
//! recursively-typed collection elements. Scalar operations that can
//! fail all route through a single policy gate: under
//! [`MismatchPolicy::Tolerant`] a per-type fallback coerces the value,
//! under [`MismatchPolicy::Strict`] the same input raises
//! [`CastError::Mismatch`]. Configuration errors (missing or invalid
//! schema metadata) raise regardless of policy.
//!
//! The engine is pure over its input: nested conversions recurse with
//! the same borrowed caster, and no state survives a call.

use std::marker::PhantomData;

use chrono::NaiveDateTime;
use tracing::{debug, trace, warn};

use tethys_value::{Number, Value};

use crate::binary::Binary;
use crate::context::{MismatchPolicy, PropertyBag};
use crate::error::{CastError, CastResult};
use crate::hydration::{Hydrator, Link, LinkCollection, ValueProxy};
use crate::rid::Rid;
use crate::target::TargetType;
use crate::temporal::{self, DateRep};

/// Inclusive byte range lower bound
pub const BYTE_MIN: i64 = -128;
/// Inclusive byte range upper bound
pub const BYTE_MAX: i64 = 127;
/// Exclusive magnitude limit for shorts
pub const SHORT_LIMIT: i64 = 32767;
/// Exclusive magnitude limit for longs
pub const LONG_LIMIT: i64 = i64::MAX;
/// Smallest positive double accepted by the decimal target
pub const DECIMAL_MIN: f64 = 4.9E-324;
/// Largest double accepted by the decimal target
pub const DECIMAL_MAX: f64 = 1.797_693_134_862_315_7E308;

/// Output of the generic dispatch path: one variant per target type.
#[derive(Debug, Clone, PartialEq)]
pub enum Casted<Doc, D = NaiveDateTime> {
    Boolean(bool),
    /// Original numeric value, width-checked but not truncated
    Byte(Number),
    Short(Number),
    Integer(i64),
    Long(Number),
    Float(f64),
    Double(f64),
    Decimal(f64),
    String(String),
    Binary(Binary),
    Date(D),
    DateTime(D),
    Embedded(Doc),
    EmbeddedList(Vec<Casted<Doc, D>>),
    EmbeddedSet(Vec<Casted<Doc, D>>),
    /// Key structure of the input node, preserved in order
    EmbeddedMap(Vec<(String, Casted<Doc, D>)>),
    /// `None` is non-fatal absence (unresolvable identifier)
    Link(Option<Link<Doc>>),
    LinkList(Option<LinkCollection<Doc>>),
    LinkSet(Option<LinkCollection<Doc>>),
    LinkMap(Option<LinkCollection<Doc>>),
}

/// Coercion engine bound to a hydrator, a mismatch policy and optional
/// per-property metadata.
///
/// `D` fixes the date/datetime representation for this caster; the
/// default is [`NaiveDateTime`]. Each caster serves one conversion
/// call-chain at a time; nested conversions borrow it immutably, so
/// nothing is shared mutably across element boundaries.
pub struct Caster<'h, H: Hydrator, D: DateRep = NaiveDateTime> {
    hydrator: &'h H,
    policy: MismatchPolicy,
    properties: PropertyBag,
    _date: PhantomData<D>,
}

impl<'h, H: Hydrator> Caster<'h, H> {
    /// Create a caster with the default date representation
    pub fn new(hydrator: &'h H, policy: MismatchPolicy) -> Self {
        Self::with_date_rep(hydrator, policy)
    }
}

impl<'h, H: Hydrator, D: DateRep> Caster<'h, H, D> {
    /// Create a caster with an explicit date representation
    pub fn with_date_rep(hydrator: &'h H, policy: MismatchPolicy) -> Self {
        Self {
            hydrator,
            policy,
            properties: PropertyBag::new(),
            _date: PhantomData,
        }
    }

    /// Attach property metadata (annotation, opaque extras)
    #[must_use]
    pub fn with_properties(mut self, properties: PropertyBag) -> Self {
        self.properties = properties;
        self
    }

    /// The property metadata attached to this caster
    pub fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    /// Mutable access to the property metadata
    pub fn properties_mut(&mut self) -> &mut PropertyBag {
        &mut self.properties
    }

    /// The configured mismatch policy
    pub fn policy(&self) -> MismatchPolicy {
        self.policy
    }

    // ==================== Mismatch gate ====================

    /// The single path by which any scalar operation fails or falls
    /// back. Tolerant mode applies `fallback` to the value; strict
    /// mode raises a mismatch carrying the rendered value.
    fn mismatch<T>(
        &self,
        value: &Value,
        expected: &'static str,
        fallback: impl FnOnce(&Value) -> T,
    ) -> CastResult<T> {
        if self.policy.is_tolerant() {
            debug!(expected, value = %value, "tolerant fallback applied");
            Ok(fallback(value))
        } else {
            // Scalars render as themselves, structured nodes as their
            // type name, arrays as a comma-joined element list.
            Err(CastError::mismatch(value.to_string(), expected))
        }
    }

    // ==================== Scalar coercion ====================

    /// Cast to boolean.
    ///
    /// Booleans pass through; otherwise the value is compared by
    /// strict identity against the fixed true set `{1, "1", "true"}`
    /// and false set `{0, "0", "false"}`, true set first. Anything
    /// else is a mismatch whose fallback is generic truthiness.
    pub fn cast_boolean(&self, value: &Value) -> CastResult<bool> {
        if let Some(b) = value.as_bool() {
            return Ok(b);
        }
        match value {
            Value::Number(Number::Int(1)) => return Ok(true),
            Value::String(s) if s == "1" || s == "true" => return Ok(true),
            Value::Number(Number::Int(0)) => return Ok(false),
            Value::String(s) if s == "0" || s == "false" => return Ok(false),
            _ => {}
        }
        self.mismatch(value, "boolean", Value::is_truthy)
    }

    /// Cast to byte.
    ///
    /// Numeric values within `[-128, 127]` pass through with their
    /// original value intact (no truncation to a byte width). The
    /// tolerant fallback clamps to `-128` for negative inputs and
    /// `127` otherwise.
    pub fn cast_byte(&self, value: &Value) -> CastResult<Number> {
        if let Some(n) = value.as_numeric() {
            if n.in_range(BYTE_MIN, BYTE_MAX) {
                return Ok(n);
            }
        }
        self.mismatch(value, "byte", |v| {
            let negative = v.as_numeric().is_some_and(Number::is_negative);
            Number::Int(if negative { BYTE_MIN } else { BYTE_MAX })
        })
    }

    /// Cast to short (magnitude limit 32767)
    pub fn cast_short(&self, value: &Value) -> CastResult<Number> {
        self.cast_bounded(value, SHORT_LIMIT, "short")
    }

    /// Cast to long (magnitude limit `i64::MAX`)
    pub fn cast_long(&self, value: &Value) -> CastResult<Number> {
        self.cast_bounded(value, LONG_LIMIT, "long")
    }

    /// Shared bounded-magnitude algorithm for short and long.
    ///
    /// Numeric input with `|v| < limit` passes through unchanged.
    /// The tolerant fallback clamps to the *positive* limit even for
    /// negative overflow, discarding the sign. Counter-intuitive, but
    /// existing consumers depend on exactly this value.
    fn cast_bounded(
        &self,
        value: &Value,
        limit: i64,
        expected: &'static str,
    ) -> CastResult<Number> {
        if let Some(n) = value.as_numeric() {
            if n.magnitude_below(limit) {
                return Ok(n);
            }
        }
        self.mismatch(value, expected, |_| Number::Int(limit))
    }

    /// Cast to integer.
    ///
    /// Numeric input narrows to `i64`; structured nodes convert to the
    /// fixed value `1`; everything else is a mismatch whose fallback
    /// applies the same integer/object rule.
    pub fn cast_integer(&self, value: &Value) -> CastResult<i64> {
        if let Some(n) = value.as_numeric() {
            return Ok(n.as_i64());
        }
        if value.is_object() {
            return Ok(1);
        }
        self.mismatch(value, "integer", Value::loose_int)
    }

    /// Cast to float; non-numeric input falls back to a forced
    /// floating-point cast
    pub fn cast_float(&self, value: &Value) -> CastResult<f64> {
        self.cast_floating(value, "float")
    }

    /// Cast to double; identical to [`Self::cast_float`]
    pub fn cast_double(&self, value: &Value) -> CastResult<f64> {
        self.cast_floating(value, "double")
    }

    fn cast_floating(&self, value: &Value, expected: &'static str) -> CastResult<f64> {
        if let Some(n) = value.as_numeric() {
            return Ok(n.as_f64());
        }
        self.mismatch(value, expected, Value::loose_f64)
    }

    /// Cast to decimal.
    ///
    /// The value is forced to a double; within
    /// `[4.9E-324, 1.7976931348623157E308]` it is returned as-is,
    /// otherwise (zero, negatives and non-numeric input included) the
    /// tolerant fallback clamps to the nearest bound.
    pub fn cast_decimal(&self, value: &Value) -> CastResult<f64> {
        let d = value.loose_f64();
        if (DECIMAL_MIN..=DECIMAL_MAX).contains(&d) {
            return Ok(d);
        }
        self.mismatch(value, "decimal", |_| {
            if d > DECIMAL_MAX { DECIMAL_MAX } else { DECIMAL_MIN }
        })
    }

    /// Cast to string.
    ///
    /// String input passes through. Arrays stringify to the literal
    /// text `Array` in both policy modes: they count as a mismatch but
    /// the array-aware fallback is applied to them unconditionally.
    /// Other non-string input goes through the gate.
    pub fn cast_string(&self, value: &Value) -> CastResult<String> {
        if value.is_string() || value.is_array() {
            return Ok(value.loose_string());
        }
        self.mismatch(value, "string", Value::loose_string)
    }

    /// Cast to binary: wraps the raw value as a base64 data-URI
    /// payload. Always succeeds; nothing is decoded or validated.
    pub fn cast_binary(&self, value: &Value) -> Binary {
        Binary::new(value.loose_string())
    }

    // ==================== Temporal coercion ====================

    /// Cast to the configured date representation.
    ///
    /// No mismatch gate: parse failures are hard errors.
    pub fn cast_date(&self, value: &Value) -> CastResult<D> {
        temporal::cast_date(value)
    }

    /// Alias of [`Self::cast_date`] with identical behavior
    pub fn cast_datetime(&self, value: &Value) -> CastResult<D> {
        self.cast_date(value)
    }

    // ==================== Generic dispatch ====================

    /// Dispatch to the operation named by `target`.
    ///
    /// This is the path recursively-typed collections use for their
    /// elements; the match is exhaustive, so every tag maps to exactly
    /// one operation.
    pub fn cast(&self, value: &Value, target: TargetType) -> CastResult<Casted<H::Document, D>> {
        trace!(tag = %target, kind = %value.kind(), "dispatch");
        Ok(match target {
            TargetType::Boolean => Casted::Boolean(self.cast_boolean(value)?),
            TargetType::Byte => Casted::Byte(self.cast_byte(value)?),
            TargetType::Short => Casted::Short(self.cast_short(value)?),
            TargetType::Integer => Casted::Integer(self.cast_integer(value)?),
            TargetType::Long => Casted::Long(self.cast_long(value)?),
            TargetType::Float => Casted::Float(self.cast_float(value)?),
            TargetType::Double => Casted::Double(self.cast_double(value)?),
            TargetType::Decimal => Casted::Decimal(self.cast_decimal(value)?),
            TargetType::String => Casted::String(self.cast_string(value)?),
            TargetType::Binary => Casted::Binary(self.cast_binary(value)),
            TargetType::Date => Casted::Date(self.cast_date(value)?),
            TargetType::DateTime => Casted::DateTime(self.cast_datetime(value)?),
            TargetType::Embedded => Casted::Embedded(self.cast_embedded(value)?),
            TargetType::EmbeddedList => Casted::EmbeddedList(self.cast_embedded_list(value)?),
            TargetType::EmbeddedSet => Casted::EmbeddedSet(self.cast_embedded_set(value)?),
            TargetType::EmbeddedMap => Casted::EmbeddedMap(self.cast_embedded_map(value)?),
            TargetType::Link => Casted::Link(self.cast_link(value)?),
            TargetType::LinkList => Casted::LinkList(self.cast_linklist(value)?),
            TargetType::LinkSet => Casted::LinkSet(self.cast_linkset(value)?),
            TargetType::LinkMap => Casted::LinkMap(self.cast_linkmap(value)?),
        })
    }

    // ==================== Embedded & collections ====================

    /// Cast to an embedded document: the whole raw node is delegated
    /// to the hydration component and its result returned verbatim.
    pub fn cast_embedded(&self, value: &Value) -> CastResult<H::Document> {
        self.hydrator.hydrate(value)
    }

    /// Cast to an embedded list
    pub fn cast_embedded_list(&self, value: &Value) -> CastResult<Vec<Casted<H::Document, D>>> {
        self.cast_embedded_sequence(value)
    }

    /// Cast to an embedded set; same algorithm as the list variant
    pub fn cast_embedded_set(&self, value: &Value) -> CastResult<Vec<Casted<H::Document, D>>> {
        self.cast_embedded_sequence(value)
    }

    fn cast_embedded_sequence(&self, value: &Value) -> CastResult<Vec<Casted<H::Document, D>>> {
        let target = self.element_target()?;
        let elements = seq_elements(value);
        if target == TargetType::Link {
            // Collections of links hydrate as one batch
            let nodes: Vec<Value> = elements.into_iter().cloned().collect();
            let docs = self.hydrator.hydrate_collection(&nodes)?;
            return Ok(docs.into_iter().map(Casted::Embedded).collect());
        }
        elements
            .into_iter()
            .map(|element| self.cast(element, target))
            .collect()
    }

    /// Cast to an embedded map.
    ///
    /// A structured node is first flattened into a keyed sequence
    /// (field name, field value); keys and insertion order are
    /// preserved in the output.
    pub fn cast_embedded_map(
        &self,
        value: &Value,
    ) -> CastResult<Vec<(String, Casted<H::Document, D>)>> {
        let target = self.element_target()?;
        let entries = keyed_entries(value);
        if target == TargetType::Link {
            let keys: Vec<String> = entries.iter().map(|(k, _)| k.clone()).collect();
            let nodes: Vec<Value> = entries.into_iter().map(|(_, v)| v.clone()).collect();
            let docs = self.hydrator.hydrate_collection(&nodes)?;
            return Ok(keys
                .into_iter()
                .zip(docs)
                .map(|(key, doc)| (key, Casted::Embedded(doc)))
                .collect());
        }
        entries
            .into_iter()
            .map(|(key, element)| Ok((key, self.cast(element, target)?)))
            .collect()
    }

    /// Declared element type of the bound collection property.
    ///
    /// Requires the schema annotation in the property bag; its absence
    /// (or an unrecognized tag) is a configuration error, never a
    /// mismatch.
    fn element_target(&self) -> CastResult<TargetType> {
        let tag = self
            .properties
            .annotation()
            .and_then(|annotation| annotation.cast())
            .ok_or_else(CastError::missing_cast)?;
        TargetType::from_tag(tag).ok_or_else(|| CastError::unsupported_cast(tag))
    }

    // ==================== Links ====================

    /// Cast to a link.
    ///
    /// An already-decoded node hydrates eagerly and comes back wrapped
    /// in a value proxy; anything else is interpreted as a record
    /// identifier. Validation failures are absorbed into `None`: an
    /// unresolved link is a normal, expected state, independent of the
    /// mismatch policy.
    pub fn cast_link(&self, value: &Value) -> CastResult<Option<Link<H::Document>>> {
        if value.is_object() {
            let document = self.hydrator.hydrate(value)?;
            return Ok(Some(Link::Document(ValueProxy::new(document))));
        }
        match value.as_str().map(str::parse::<Rid>) {
            Some(Ok(rid)) => Ok(Some(Link::Rid(rid))),
            _ => Ok(None),
        }
    }

    /// Cast to a link list
    pub fn cast_linklist(&self, value: &Value) -> CastResult<Option<LinkCollection<H::Document>>> {
        self.cast_link_collection(seq_elements(value))
    }

    /// Cast to a link set; same algorithm as the list variant
    pub fn cast_linkset(&self, value: &Value) -> CastResult<Option<LinkCollection<H::Document>>> {
        self.cast_link_collection(seq_elements(value))
    }

    /// Cast to a link map: a structured node is flattened into its
    /// field values first, then the shared algorithm applies
    pub fn cast_linkmap(&self, value: &Value) -> CastResult<Option<LinkCollection<H::Document>>> {
        self.cast_link_collection(seq_elements(value))
    }

    /// Shared link-collection algorithm.
    ///
    /// The upstream wire format serializes collections of links
    /// inconsistently as raw identifiers, decoded objects, or a mix.
    /// Any decoded object switches the whole collection to object
    /// mode: only decoded elements are kept (identifiers in the same
    /// collection are dropped) and batch-hydrated. An all-identifier
    /// collection validates every element; a single invalid identifier
    /// makes the whole collection absent.
    fn cast_link_collection(
        &self,
        elements: Vec<&Value>,
    ) -> CastResult<Option<LinkCollection<H::Document>>> {
        if elements.is_empty() {
            return Ok(Some(LinkCollection::Rids(Vec::new())));
        }

        if elements.iter().any(|element| element.is_object()) {
            let decoded: Vec<Value> = elements
                .iter()
                .filter(|element| element.is_object())
                .map(|element| (*element).clone())
                .collect();
            let dropped = elements.len() - decoded.len();
            if dropped > 0 {
                warn!(dropped, "dropping raw identifiers from mixed link collection");
            }
            let documents = self.hydrator.hydrate_collection(&decoded)?;
            return Ok(Some(LinkCollection::Documents(documents)));
        }

        let mut rids = Vec::with_capacity(elements.len());
        for element in elements {
            match element.as_str().map(str::parse::<Rid>) {
                Some(Ok(rid)) => rids.push(rid),
                _ => return Ok(None),
            }
        }
        Ok(Some(LinkCollection::Rids(rids)))
    }
}

/// Elements of a collection-shaped value: array items in order, or
/// the field values of a structured node. Scalars have no elements.
fn seq_elements(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(array) => array.iter().collect(),
        Value::Object(object) => object.values().collect(),
        _ => Vec::new(),
    }
}

/// Keyed elements: field name/value pairs of a structured node, or
/// array items keyed by their stringified index.
fn keyed_entries(value: &Value) -> Vec<(String, &Value)> {
    match value {
        Value::Object(object) => object
            .entries()
            .map(|(key, element)| (key.clone(), element))
            .collect(),
        Value::Array(array) => array
            .iter()
            .enumerate()
            .map(|(index, element)| (index.to_string(), element))
            .collect(),
        _ => Vec::new(),
    }
}
