//! Property-based tests for the wire value tree using proptest

use proptest::prelude::*;
use tethys_value::{Number, Value, ValueRefExt};

proptest! {
    #[test]
    fn integer_json_roundtrip(x in any::<i64>()) {
        let value = Value::from(x);
        let back = Value::from(value.to_json());
        prop_assert_eq!(back, Value::from(x));
    }

    #[test]
    fn finite_float_json_roundtrip(x in proptest::num::f64::NORMAL) {
        let value = Value::from(x);
        let back = Value::from(value.to_json());
        prop_assert_eq!(back, Value::from(x));
    }

    #[test]
    fn numeric_string_parses_as_numeric(x in any::<i64>()) {
        let value = Value::from(x.to_string());
        prop_assert_eq!(value.as_numeric(), Some(Number::Int(x)));
        prop_assert_eq!(value.loose_int(), x);
    }

    #[test]
    fn nonzero_integers_are_truthy(x in any::<i64>().prop_filter("nonzero", |x| *x != 0)) {
        prop_assert!(Value::from(x).is_truthy());
    }

    #[test]
    fn loose_string_never_panics(s in ".*") {
        let value = Value::from(s.clone());
        prop_assert_eq!(value.loose_string(), s);
    }

    #[test]
    fn magnitude_below_matches_abs(x in any::<i64>(), limit in 1i64..) {
        let expected = (x as i128).abs() < limit as i128;
        prop_assert_eq!(Number::Int(x).magnitude_below(limit), expected);
    }
}
