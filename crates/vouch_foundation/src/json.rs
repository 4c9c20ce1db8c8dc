//! JSON interop for [`Value`].
//!
//! Descriptors are frequently inferred from parsed JSON documents and
//! validated values are frequently handed back to JSON consumers, so the
//! foundation carries both directions of the `serde_json` conversion.

use crate::collections::{VMap, VVec};
use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Self::from(&json)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(*b),
            // Integers beyond 2^53 lose precision, same as any JS consumer.
            serde_json::Value::Number(n) => {
                Self::Number(n.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(s) => Self::String(s.as_str().into()),
            serde_json::Value::Array(items) => {
                Self::Array(items.iter().map(Self::from).collect::<VVec<Self>>())
            }
            serde_json::Value::Object(fields) => Self::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect::<VMap<String, Self>>(),
            ),
        }
    }
}

impl Value {
    /// Converts this value to JSON.
    ///
    /// Returns `None` for values with no JSON representation: the absence
    /// marker, regexes, functions, and non-finite numbers. Dates render as
    /// RFC 3339 strings. Record fields and array elements that are
    /// themselves unrepresentable make the whole conversion `None` rather
    /// than silently dropping data.
    #[must_use]
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Self::Undefined | Self::Regex(_) | Self::Function(_) => None,
            Self::Null => Some(serde_json::Value::Null),
            Self::Bool(b) => Some(serde_json::Value::Bool(*b)),
            Self::Number(n) => {
                serde_json::Number::from_f64(*n).map(serde_json::Value::Number)
            }
            Self::String(s) => Some(serde_json::Value::String(s.to_string())),
            Self::Array(items) => items
                .iter()
                .map(Self::to_json)
                .collect::<Option<Vec<_>>>()
                .map(serde_json::Value::Array),
            Self::Object(fields) => fields
                .iter()
                .map(|(k, v)| v.to_json().map(|j| (k.clone(), j)))
                .collect::<Option<serde_json::Map<_, _>>>()
                .map(serde_json::Value::Object),
            Self::Date(d) => Some(serde_json::Value::String(d.to_rfc3339())),
        }
    }
}
