//! Dynamic value type for vouch.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::collections::{VMap, VVec};

/// Dynamic value validated by vouch schemas.
///
/// Values are immutable and cheaply cloneable (O(1) for most variants).
/// Composite values use structural sharing via persistent data structures,
/// so validators can return fresh normalized values without copying.
///
/// `Undefined` is the absence marker: a missing array element or record
/// field validates as `Undefined`, and a validator that produces
/// `Undefined` has produced no value.
#[derive(Clone)]
pub enum Value {
    /// The absence marker.
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit floating point number (the only numeric kind).
    Number(f64),
    /// String value.
    String(Arc<str>),
    /// Persistent sequence.
    Array(VVec<Value>),
    /// Persistent string-keyed record.
    Object(VMap<String, Value>),
    /// UTC timestamp.
    Date(DateTime<Utc>),
    /// Compiled regular expression.
    Regex(ValueRegex),
    /// Native function reference.
    Function(NativeFn),
}

/// Compiled regular expression usable as a value.
///
/// Equality compares the pattern source text, since `regex::Regex` itself
/// carries no equality.
#[derive(Clone)]
pub struct ValueRegex(Arc<Regex>);

impl ValueRegex {
    /// Wraps a compiled regex.
    #[must_use]
    pub fn new(regex: Regex) -> Self {
        Self(Arc::new(regex))
    }

    /// Compiles a pattern.
    ///
    /// # Errors
    /// Returns the underlying `regex` error for an invalid pattern.
    pub fn compile(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self(Arc::new(Regex::new(pattern)?)))
    }

    /// Returns the pattern source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the underlying compiled regex.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.0
    }
}

impl PartialEq for ValueRegex {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

impl Eq for ValueRegex {}

impl fmt::Debug for ValueRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.0.as_str())
    }
}

impl fmt::Display for ValueRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.0.as_str())
    }
}

impl From<Regex> for ValueRegex {
    fn from(regex: Regex) -> Self {
        Self::new(regex)
    }
}

/// Native function callable as a value.
#[derive(Clone, Copy)]
pub struct NativeFn {
    /// Function name for debugging.
    pub name: &'static str,
    /// Function pointer.
    pub func: fn(&[Value]) -> crate::Result<Value>,
}

impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::fn_addr_eq(self.func, other.func)
    }
}

impl Eq for NativeFn {}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn {}>", self.name)
    }
}

impl Value {
    /// Returns true if this value is the absence marker.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true if this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract an array reference.
    #[must_use]
    pub const fn as_array(&self) -> Option<&VVec<Value>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to extract an object reference.
    #[must_use]
    pub const fn as_object(&self) -> Option<&VMap<String, Value>> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Attempts to extract a date.
    #[must_use]
    pub const fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Attempts to extract a regex reference.
    #[must_use]
    pub const fn as_regex(&self) -> Option<&ValueRegex> {
        match self {
            Self::Regex(r) => Some(r),
            _ => None,
        }
    }

    /// Attempts to extract a function reference.
    #[must_use]
    pub const fn as_function(&self) -> Option<&NativeFn> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }
}

// Implement PartialEq manually to handle float comparison. Bit equality
// keeps Eq reflexive under NaN.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Regex(a), Self::Regex(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(items) => write!(f, "{items:?}"),
            Self::Object(fields) => write!(f, "{fields:?}"),
            Self::Date(d) => write!(f, "{}", d.to_rfc3339()),
            Self::Regex(r) => write!(f, "{r:?}"),
            Self::Function(func) => write!(f, "{func:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Object(fields) => {
                write!(f, "{{")?;
                for (i, (k, v)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Self::Date(d) => write!(f, "{}", d.to_rfc3339()),
            Self::Regex(r) => write!(f, "{r}"),
            Self::Function(func) => write!(f, "{func:?}"),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl From<Regex> for Value {
    fn from(regex: Regex) -> Self {
        Self::Regex(ValueRegex::new(regex))
    }
}

impl From<ValueRegex> for Value {
    fn from(regex: ValueRegex) -> Self {
        Self::Regex(regex)
    }
}

impl From<NativeFn> for Value {
    fn from(func: NativeFn) -> Self {
        Self::Function(func)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Undefined, Into::into)
    }
}
