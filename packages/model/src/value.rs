//! JSON value comparison primitives.
//!
//! Equality here is string-serialization equality, which is order-sensitive
//! for objects by contract. serde_json's default map keeps keys sorted, so
//! serialization order is canonical and the comparison behaves structurally;
//! the stringify mechanism is kept because legacy consumers compare the same
//! serialized strings.

use serde_json::Value;

/// Compact JSON serialization. Infallible for `Value` inputs.
pub fn stringify(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// JSON-stringify equality.
pub fn json_eq(a: &Value, b: &Value) -> bool {
    stringify(a) == stringify(b)
}

/// Loose equality in the spirit of JS `==`, used by the legacy border
/// branch: numeric strings compare against numbers, booleans coerce to 0/1.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    if json_eq(a, b) {
        return true;
    }

    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            s.trim().parse::<f64>().ok() == n.as_f64()
        }
        (Value::Bool(flag), other) | (other, Value::Bool(flag)) => {
            let coerced = if *flag { 1.0 } else { 0.0 };
            match other {
                Value::Number(n) => n.as_f64() == Some(coerced),
                Value::String(s) => s.trim().parse::<f64>().ok() == Some(coerced),
                _ => false,
            }
        }
        _ => false,
    }
}

/// Whether a value carries data: null, `{}`, `[]`, and `""` do not.
pub fn non_empty(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stringify_equality_distinguishes_values() {
        assert!(json_eq(&json!({"a": 1}), &json!({"a": 1})));
        assert!(!json_eq(&json!({"a": 1}), &json!({"a": 2})));
        assert!(!json_eq(&json!([1]), &json!([])));
        assert!(json_eq(&json!(null), &json!(null)));
    }

    #[test]
    fn test_loose_equality_coerces() {
        assert!(loose_eq(&json!(2), &json!("2")));
        assert!(loose_eq(&json!("2"), &json!(2.0)));
        assert!(loose_eq(&json!(1), &json!(1.0)));
        assert!(loose_eq(&json!(true), &json!(1)));
        assert!(loose_eq(&json!(false), &json!("0")));
        assert!(!loose_eq(&json!("2px"), &json!(2)));
        assert!(!loose_eq(&json!("a"), &json!("b")));
    }

    #[test]
    fn test_emptiness() {
        assert!(!non_empty(&json!(null)));
        assert!(!non_empty(&json!({})));
        assert!(!non_empty(&json!([])));
        assert!(!non_empty(&json!("")));
        assert!(non_empty(&json!(0)));
        assert!(non_empty(&json!(false)));
        assert!(non_empty(&json!([{}])));
    }
}
