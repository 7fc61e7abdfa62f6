//! Maps the upstream's numeric `accessibility` and `price` scores (0.0..=1.0)
//! to category labels.

use crate::domain::model::{ACCESSIBILITY_FIELD, PRICE_FIELD};
use serde_json::Value;

pub fn accessibility_label(v: f64) -> &'static str {
    if v <= 0.25 {
        "High"
    } else if v <= 0.75 {
        "Medium"
    } else {
        "Low"
    }
}

pub fn price_label(v: f64) -> &'static str {
    if v == 0.0 {
        "Free"
    } else if v <= 0.5 {
        "Low"
    } else {
        "High"
    }
}

/// Only numeric `accessibility`/`price` values are rewritten; anything else
/// comes back as given.
pub fn normalize_field(field: &str, value: Value) -> Value {
    let Some(v) = value.as_f64() else {
        return value;
    };

    match field {
        ACCESSIBILITY_FIELD => Value::String(accessibility_label(v).to_string()),
        PRICE_FIELD => Value::String(price_label(v).to_string()),
        _ => value,
    }
}

/// Walks the payload bottom-up, applying [`normalize_field`] to every object
/// member. Array elements are visited but never renamed or mapped themselves.
pub fn normalize_tree(value: Value) -> Value {
    match value {
        Value::Object(obj) => Value::Object(
            obj.into_iter()
                .map(|(key, child)| {
                    let child = normalize_tree(child);
                    let mapped = normalize_field(&key, child);
                    (key, mapped)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_tree).collect()),
        other => other,
    }
}
