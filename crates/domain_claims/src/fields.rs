//! Caller-supplied record fields
//!
//! Records are schema-free: whatever JSON object the caller sends is kept
//! verbatim, and the conventional fields are read through typed accessors
//! that return `None` when the stored value has another shape.

use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use std::str::FromStr;

/// Raw caller fields, keyed by wire name
pub type FieldMap = Map<String, Value>;

/// Drops every key in `reserved` from the field map.
///
/// Server-assigned fields are written after caller fields, so a caller value
/// under a reserved name must never survive into the stored record.
pub(crate) fn strip_reserved(fields: &mut FieldMap, reserved: &[&str]) {
    for key in reserved {
        fields.remove(*key);
    }
}

/// Reads a string field
pub(crate) fn str_field<'a>(fields: &'a FieldMap, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

/// Reads a decimal field sent either as a JSON number or a numeric string
pub(crate) fn decimal_field(fields: &FieldMap, key: &str) -> Option<Decimal> {
    let raw = match fields.get(key)? {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        _ => return None,
    };

    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .ok()
}

/// Encodes a decimal as a JSON number, or as a string if it has no exact
/// JSON number form
pub(crate) fn decimal_value(amount: Decimal) -> Value {
    let text = amount.to_string();
    match Number::from_str(&text) {
        Ok(number) => Value::Number(number),
        Err(_) => Value::String(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn fields(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_strip_reserved_keeps_other_keys() {
        let mut map = fields(json!({ "id": "caller-id", "priority": "high" }));

        strip_reserved(&mut map, &["id", "createdAt"]);

        assert!(!map.contains_key("id"));
        assert_eq!(map.get("priority"), Some(&json!("high")));
    }

    #[test]
    fn test_str_field_ignores_other_shapes() {
        let map = fields(json!({ "a": "x", "b": 7, "c": ["x"] }));

        assert_eq!(str_field(&map, "a"), Some("x"));
        assert_eq!(str_field(&map, "b"), None);
        assert_eq!(str_field(&map, "c"), None);
        assert_eq!(str_field(&map, "missing"), None);
    }

    #[test]
    fn test_decimal_field_shapes() {
        let map = fields(json!({
            "int": 1250,
            "float": 1250.5,
            "text": " 1250.00 ",
            "huge": 1e40,
            "word": "lots",
            "flag": true,
        }));

        assert_eq!(decimal_field(&map, "int"), Some(dec!(1250)));
        assert_eq!(decimal_field(&map, "float"), Some(dec!(1250.5)));
        assert_eq!(decimal_field(&map, "text"), Some(dec!(1250.00)));
        assert_eq!(decimal_field(&map, "huge"), None);
        assert_eq!(decimal_field(&map, "word"), None);
        assert_eq!(decimal_field(&map, "flag"), None);
    }

    #[test]
    fn test_decimal_value_is_a_number() {
        assert_eq!(decimal_value(dec!(2310)), json!(2310));
        assert!(decimal_value(dec!(12.34)).is_number());
    }
}
