//! Provider payload decoding and envelope unwrapping.
//!
//! The request endpoint may wrap the SERP payload in a `body` field, and that
//! field may itself be a JSON document encoded as a string. Text that is not
//! JSON is carried forward as `{"raw": <text>}` so the extractor can still
//! try its text heuristic.

use serde_json::{Map, Value};

/// Wrap opaque text as a raw payload.
pub fn raw_payload(text: &str) -> Value {
    let mut map = Map::new();
    map.insert("raw".to_string(), Value::String(text.to_string()));
    Value::Object(map)
}

/// Strip a `body` envelope from a decoded payload.
///
/// - `body` object: becomes the payload.
/// - `body` string: decoded as JSON, or wrapped as raw text if that fails.
/// - anything else: the payload is returned unchanged.
pub fn unwrap_payload(payload: Value) -> Value {
    let Value::Object(mut map) = payload else {
        return payload;
    };

    match map.remove("body") {
        Some(Value::Object(inner)) => Value::Object(inner),
        Some(Value::String(text)) => serde_json::from_str(&text).unwrap_or_else(|_| raw_payload(&text)),
        Some(other) => {
            map.insert("body".to_string(), other);
            Value::Object(map)
        }
        None => Value::Object(map),
    }
}
