//! Property-based tests for range policies and normalization.

use proptest::prelude::*;

use tethys_mapper::{
    Caster, CastResult, Hydrator, MismatchPolicy, SHORT_LIMIT, normalize_fraction_separator,
};
use tethys_value::{Number, Value};

struct NoopHydrator;

impl Hydrator for NoopHydrator {
    type Document = Value;

    fn hydrate(&self, node: &Value) -> CastResult<Value> {
        Ok(node.clone())
    }

    fn hydrate_collection(&self, nodes: &[Value]) -> CastResult<Vec<Value>> {
        Ok(nodes.to_vec())
    }
}

proptest! {
    #[test]
    fn short_in_range_passes_through_both_modes(x in -32766i64..=32766) {
        for policy in [MismatchPolicy::Strict, MismatchPolicy::Tolerant] {
            let caster: Caster<'_, NoopHydrator> = Caster::new(&NoopHydrator, policy);
            prop_assert_eq!(caster.cast_short(&Value::from(x)).unwrap(), Number::Int(x));
            // numeric strings behave identically
            prop_assert_eq!(
                caster.cast_short(&Value::from(x.to_string())).unwrap(),
                Number::Int(x)
            );
        }
    }

    #[test]
    fn short_overflow_always_clamps_to_positive_limit(
        x in prop_oneof![i64::MIN..=-32767, 32767..=i64::MAX]
    ) {
        let caster: Caster<'_, NoopHydrator> = Caster::new(&NoopHydrator, MismatchPolicy::Tolerant);
        prop_assert_eq!(
            caster.cast_short(&Value::from(x)).unwrap(),
            Number::Int(SHORT_LIMIT)
        );

        let strict: Caster<'_, NoopHydrator> = Caster::new(&NoopHydrator, MismatchPolicy::Strict);
        prop_assert!(strict.cast_short(&Value::from(x)).unwrap_err().is_mismatch());
    }

    #[test]
    fn byte_clamp_direction_follows_sign(x in any::<i64>()) {
        let caster: Caster<'_, NoopHydrator> = Caster::new(&NoopHydrator, MismatchPolicy::Tolerant);
        let result = caster.cast_byte(&Value::from(x)).unwrap();
        let expected = if x < -128 {
            Number::Int(-128)
        } else if x > 127 {
            Number::Int(127)
        } else {
            Number::Int(x)
        };
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn fraction_separator_normalization_is_idempotent(fraction in "[0-9]{1,6}") {
        let input = format!("2020-01-02 03:04:05:{fraction}");
        let once = normalize_fraction_separator(&input).into_owned();
        let twice = normalize_fraction_separator(&once).into_owned();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once, format!("2020-01-02 03:04:05.{fraction}"));
    }

    #[test]
    fn integer_dispatch_matches_direct_call(x in any::<i32>()) {
        use tethys_mapper::{Casted, TargetType};
        let caster: Caster<'_, NoopHydrator> = Caster::new(&NoopHydrator, MismatchPolicy::Strict);
        let direct = caster.cast_integer(&Value::from(x)).unwrap();
        let dispatched = caster.cast(&Value::from(x), TargetType::Integer).unwrap();
        prop_assert_eq!(dispatched, Casted::Integer(direct));
    }
}
