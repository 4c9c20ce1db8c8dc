//! Canonical kind names and the total kind classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Canonical kind of a [`Value`].
///
/// Every value classifies to exactly one kind; [`Kind::of`] is total and
/// has no failure path. Kind mismatches are reported with the canonical
/// capitalized names (`Expected Number, got String`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// The absence marker.
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean values.
    Boolean,
    /// Floating point numbers.
    Number,
    /// Strings.
    String,
    /// Sequences.
    Array,
    /// String-keyed records.
    Object,
    /// Regular expressions.
    Regex,
    /// Timestamps.
    Date,
    /// Native functions.
    Function,
}

impl Kind {
    /// Classifies a value into its canonical kind.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Undefined => Self::Undefined,
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
            Value::Regex(_) => Self::Regex,
            Value::Date(_) => Self::Date,
            Value::Function(_) => Self::Function,
        }
    }

    /// Returns the canonical name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Array => "Array",
            Self::Object => "Object",
            Self::Regex => "RegExp",
            Self::Date => "Date",
            Self::Function => "Function",
        }
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
