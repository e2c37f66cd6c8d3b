//! Wire JSON interop: decoded documents and roundtrips.

use pretty_assertions::assert_eq;
use serde_json::json;
use tethys_value::{Number, Value, ValueRefExt};

#[test]
fn decoded_document_exposes_nested_fields() {
    let wire = Value::from(json!({
        "name": "ada",
        "age": "36",
        "tags": ["admin", 7],
        "meta": { "active": true }
    }));

    let object = wire.as_object().unwrap();
    assert_eq!(object.get("name").and_then(Value::as_str), Some("ada"));
    assert_eq!(
        object.get("age").and_then(Value::as_numeric),
        Some(Number::Int(36))
    );

    let tags = object.get("tags").and_then(Value::as_array).unwrap();
    assert_eq!(tags.len(), 2);
    assert!(object.get("meta").unwrap().is_truthy());
}

#[test]
fn document_roundtrips_through_json() {
    let wire = json!({
        "id": 7,
        "score": 2.5,
        "items": [null, false, "x"]
    });
    let value = Value::from(wire.clone());
    assert_eq!(value.to_json(), wire);
}

#[test]
fn integer_fitting_numbers_decode_as_int() {
    assert_eq!(Value::from(json!(7)), Value::Number(Number::Int(7)));
    assert_eq!(Value::from(json!(2.5)), Value::Number(Number::Float(2.5)));
}
