//! Field-name translation between the store's snake_case columns and the
//! API's camelCase fields.
//!
//! The translation is pure and total: it rewrites object keys in either
//! direction without touching values, and never drops or merges keys. It is
//! applied to whole bodies so responses carry a single consistent convention.

use serde_json::Value;

/// `cover_url` -> `coverUrl`.
pub fn camelize(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// `coverUrl` -> `cover_url`.
pub fn decamelize(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Rewrites every object key in `value` to camelCase, recursing through
/// arrays and nested objects.
pub fn camelize_keys(value: Value) -> Value {
    map_keys(value, &camelize)
}

/// Rewrites every object key in `value` to snake_case, recursing through
/// arrays and nested objects.
pub fn decamelize_keys(value: Value) -> Value {
    map_keys(value, &decamelize)
}

fn map_keys(value: Value, f: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| (f(&key), map_keys(inner, f)))
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|inner| map_keys(inner, f)).collect())
        }
        other => other,
    }
}
