//! Record sanitization.
//!
//! Chart rows arrive as heterogeneous JSON records; every string value
//! gets the text sanitizer, every other value passes through untouched.
//! Inputs are never mutated.

use serde_json::Value;

use crate::text::sanitize_text;

/// Sanitize a single JSON value, recursing into arrays and objects.
pub fn sanitize_value(value: &Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_text(s)),
        Value::Array(items) => Value::Array(items.iter().map(sanitize_value).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, val)| (key.clone(), sanitize_value(val)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Sanitize every string-valued field of every record, returning a new
/// array.
pub fn sanitize_rows(rows: &[Value]) -> Vec<Value> {
    rows.iter().map(sanitize_value).collect()
}
