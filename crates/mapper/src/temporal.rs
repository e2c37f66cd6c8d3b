//! Temporal coercion.
//!
//! Converts wire values into a configured date/datetime representation.
//! Unlike scalar coercion there is no mismatch gate here: parse
//! failures propagate as hard errors from the underlying parsing
//! primitive. That asymmetry is deliberate and load-bearing.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use tethys_value::Value;

use crate::error::{CastError, CastResult};

/// Accepted textual datetime layouts, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

/// Some producers encode the fractional-seconds separator as `:`
/// after the time of day (`HH:MM:SS:ffffff`).
static FRACTION_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{2}:\d{2}:\d{2}):(\d{1,6})").expect("fraction separator pattern is valid")
});

/// Rewrite the `HH:MM:SS:ffffff` wire quirk to the conventional `.`
/// separator. Idempotent: normalized input has no remaining match.
pub fn normalize_fraction_separator(input: &str) -> Cow<'_, str> {
    FRACTION_SEPARATOR.replace_all(input, "$1.$2")
}

/// A date/datetime representation the engine can materialize.
///
/// Implemented for the built-in representations ([`NaiveDateTime`],
/// [`DateTime<Utc>`]); callers may refine with their own type. The
/// representation is fixed per caster at the type level, so an invalid
/// choice is unrepresentable rather than a runtime configuration error.
pub trait DateRep: Sized {
    /// Materialize from epoch seconds; `None` if out of range
    fn from_unix_timestamp(secs: i64) -> Option<Self>;

    /// Parse a textual date/time literal
    fn parse_literal(text: &str) -> Result<Self, chrono::format::ParseError>;

    /// Epoch seconds of this representation
    fn epoch_seconds(&self) -> i64;
}

impl DateRep for NaiveDateTime {
    fn from_unix_timestamp(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(|dt| dt.naive_utc())
    }

    fn parse_literal(text: &str) -> Result<Self, chrono::format::ParseError> {
        let mut last_err = None;
        for format in DATETIME_FORMATS {
            match NaiveDateTime::parse_from_str(text, format) {
                Ok(dt) => return Ok(dt),
                Err(e) => last_err = Some(e),
            }
        }
        // Bare dates get midnight
        match NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(date) => Ok(date.and_time(NaiveTime::MIN)),
            Err(e) => Err(last_err.unwrap_or(e)),
        }
    }

    fn epoch_seconds(&self) -> i64 {
        self.and_utc().timestamp()
    }
}

impl DateRep for DateTime<Utc> {
    fn from_unix_timestamp(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0)
    }

    fn parse_literal(text: &str) -> Result<Self, chrono::format::ParseError> {
        // Offset-carrying literals first, then naive layouts read as UTC
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_literal(text).map(|naive| naive.and_utc())
    }

    fn epoch_seconds(&self) -> i64 {
        self.timestamp()
    }
}

/// Convert a wire value into the date representation `D`.
///
/// Normalizes the fractional-seconds quirk first; purely numeric
/// values (including numeric strings) are Unix timestamps; anything
/// else is parsed as a textual literal.
pub fn cast_date<D: DateRep>(value: &Value) -> CastResult<D> {
    let text = match value {
        Value::String(s) => normalize_fraction_separator(s),
        other => Cow::Owned(other.loose_string()),
    };

    if let Some(n) = Value::from(text.as_ref()).as_numeric() {
        let secs = n.as_i64();
        return D::from_unix_timestamp(secs).ok_or(CastError::DateOutOfRange { timestamp: secs });
    }

    D::parse_literal(text.as_ref()).map_err(|e| CastError::date_parse(text.as_ref(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rewrites_colon_separator() {
        assert_eq!(
            normalize_fraction_separator("2020-01-02 03:04:05:123456"),
            "2020-01-02 03:04:05.123456"
        );
        assert_eq!(
            normalize_fraction_separator("2020-01-02 03:04:05:1"),
            "2020-01-02 03:04:05.1"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_fraction_separator("2020-01-02 03:04:05:123456").into_owned();
        let twice = normalize_fraction_separator(&once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_leaves_plain_datetimes_alone() {
        assert_eq!(
            normalize_fraction_separator("2020-01-02 03:04:05"),
            "2020-01-02 03:04:05"
        );
    }

    #[test]
    fn test_timestamp_roundtrip() {
        let dt: NaiveDateTime = cast_date(&Value::from(1_577_934_245)).unwrap();
        assert_eq!(dt.epoch_seconds(), 1_577_934_245);

        // numeric strings count as timestamps too
        let dt: NaiveDateTime = cast_date(&Value::from("1577934245")).unwrap();
        assert_eq!(dt.epoch_seconds(), 1_577_934_245);
    }

    #[test]
    fn test_literal_parse() {
        let dt: NaiveDateTime = cast_date(&Value::from("2020-01-02 03:04:05")).unwrap();
        assert_eq!(dt.to_string(), "2020-01-02 03:04:05");

        let bare: NaiveDateTime = cast_date(&Value::from("2020-01-02")).unwrap();
        assert_eq!(bare.to_string(), "2020-01-02 00:00:00");
    }

    #[test]
    fn test_quirky_separator_equals_conventional() {
        let a: NaiveDateTime = cast_date(&Value::from("2020-01-02 03:04:05:123456")).unwrap();
        let b: NaiveDateTime = cast_date(&Value::from("2020-01-02 03:04:05.123456")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_failure_is_hard_error() {
        let err = cast_date::<NaiveDateTime>(&Value::from("not a date")).unwrap_err();
        assert_eq!(err.code(), "CAST_DATE_PARSE");
    }

    #[test]
    fn test_utc_representation() {
        let dt: DateTime<Utc> = cast_date(&Value::from("2020-01-02T03:04:05+00:00")).unwrap();
        assert_eq!(dt.epoch_seconds(), 1_577_934_245);
    }

    #[test]
    fn test_timestamp_out_of_range() {
        let err = cast_date::<NaiveDateTime>(&Value::from(i64::MAX)).unwrap_err();
        assert_eq!(err.code(), "CAST_DATE_OUT_OF_RANGE");
    }
}
