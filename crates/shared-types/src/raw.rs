//! # Raw Field Readers
//!
//! Tolerant accessors over decoded platform JSON.
//!
//! Every reader returns `None` (or an empty collection) when the key is
//! absent, `null`, or carries a JSON type other than the one expected.
//! Value objects are built exclusively through these helpers so that a
//! partially-populated payload never aborts a parse.

use serde_json::{Map, Value};
use std::collections::HashMap;

/// A decoded JSON object as delivered by the platform.
pub type RawObject = Map<String, Value>;

/// Borrow `raw` as an object, if it is one.
pub fn as_object(raw: &Value) -> Option<&RawObject> {
    raw.as_object()
}

/// Nested object under `key`.
pub fn object<'a>(raw: &'a Value, key: &str) -> Option<&'a Value> {
    raw.get(key).filter(|v| v.is_object())
}

/// String under `key`.
pub fn string(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_owned)
}

/// Boolean under `key`.
pub fn boolean(raw: &Value, key: &str) -> Option<bool> {
    raw.get(key).and_then(Value::as_bool)
}

/// Signed integer under `key`.
///
/// Integral floats (`1500.0`) are accepted since some platform clients emit them.
pub fn integer(raw: &Value, key: &str) -> Option<i64> {
    let value = raw.get(key)?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    })
}

/// Object under `key` copied into an owned key/value map.
pub fn map(raw: &Value, key: &str) -> HashMap<String, Value> {
    raw.get(key)
        .and_then(Value::as_object)
        .map(|obj| obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default()
}

/// Parse the nested object under `key` with `parse`, if present.
pub fn nested<T>(raw: &Value, key: &str, parse: impl FnOnce(&Value) -> T) -> Option<T> {
    object(raw, key).map(parse)
}
