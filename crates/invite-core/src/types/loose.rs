//! Loosely-typed value coercion.
//!
//! Request bodies and remote payloads are not strictly typed: a field may
//! hold a string, a number, a boolean, or nothing at all. A value counts as
//! present only when it is truthy (`null`, `false`, `0` and `""` are
//! absent); present values are rendered as a string.

use serde_json::Value;

/// Stringify `value` if it is truthy, otherwise return `None`.
pub fn truthy_string(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => {
            if n.as_f64().is_some_and(|f| f == 0.0) {
                None
            } else {
                Some(n.to_string())
            }
        }
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
