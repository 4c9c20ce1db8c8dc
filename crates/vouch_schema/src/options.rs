//! Shared options for descriptor compilation.

use std::fmt;
use std::sync::Arc;

use regex::{Captures, Regex};
use vouch_foundation::{VMap, Value, ValueRegex};

use crate::descriptor::Descriptor;

/// Conversion applied to a successful pattern match.
///
/// Receives the regex captures and produces the validated value. The
/// default conversion returns the whole matched substring as a string.
pub type Convert = Arc<dyn Fn(&Captures<'_>) -> Value + Send + Sync>;

/// Options attached to a descriptor.
///
/// All validators honor `default_value` and `optional`; the remaining
/// options belong to specific kinds (`sub_type` to Array, `sub_types` to
/// Multi, `values` to Enum, `fields` to Object, `pattern`/`convert` to
/// RegExp, `integers_only` to Number). Unknown combinations are ignored by
/// the constructor they do not apply to, mirroring an options record.
#[derive(Clone, Default)]
pub struct Options {
    /// Value substituted when the input is absent. Validated once, at
    /// compile time, against the owning constructor's expectation.
    pub default_value: Option<Value>,
    /// When true, absence produces no value and no error.
    pub optional: bool,
    /// Number only: require the value to be integer-valued.
    pub integers_only: bool,
    /// Array: the element descriptor (mandatory there).
    pub sub_type: Option<Box<Descriptor>>,
    /// Multi: one descriptor per tuple position (mandatory there, >= 2).
    pub sub_types: Vec<Descriptor>,
    /// Enum: the closed set of allowed values (mandatory there; may be
    /// empty, in which case no candidate is a member).
    pub values: Option<Vec<Value>>,
    /// Object: field name to descriptor (mandatory there; may be empty).
    pub fields: Option<VMap<String, Descriptor>>,
    /// RegExp: the pattern to match (mandatory there).
    pub pattern: Option<ValueRegex>,
    /// RegExp: conversion applied to the match.
    pub convert: Option<Convert>,
}

impl Options {
    /// Creates an empty options record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Marks the position optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Requires integer-valued numbers.
    #[must_use]
    pub fn integers_only(mut self) -> Self {
        self.integers_only = true;
        self
    }

    /// Sets the Array element descriptor.
    #[must_use]
    pub fn sub_type(mut self, descriptor: impl Into<Descriptor>) -> Self {
        self.sub_type = Some(Box::new(descriptor.into()));
        self
    }

    /// Sets the Multi positional descriptors.
    #[must_use]
    pub fn sub_types(mut self, descriptors: impl IntoIterator<Item = Descriptor>) -> Self {
        self.sub_types = descriptors.into_iter().collect();
        self
    }

    /// Sets the Enum value set.
    #[must_use]
    pub fn values(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.values = Some(values.into_iter().collect());
        self
    }

    /// Adds an Object field descriptor.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, descriptor: impl Into<Descriptor>) -> Self {
        let fields = self.fields.take().unwrap_or_default();
        self.fields = Some(fields.insert(name.into(), descriptor.into()));
        self
    }

    /// Sets the Object field descriptors.
    #[must_use]
    pub fn fields(mut self, fields: VMap<String, Descriptor>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Sets the RegExp pattern.
    #[must_use]
    pub fn pattern(mut self, pattern: impl Into<ValueRegex>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the RegExp match conversion.
    #[must_use]
    pub fn convert(
        mut self,
        convert: impl Fn(&Captures<'_>) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.convert = Some(Arc::new(convert));
        self
    }
}

impl From<Regex> for Options {
    fn from(pattern: Regex) -> Self {
        Self::new().pattern(pattern)
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Options");
        if let Some(default) = &self.default_value {
            s.field("default_value", default);
        }
        if self.optional {
            s.field("optional", &true);
        }
        if self.integers_only {
            s.field("integers_only", &true);
        }
        if let Some(sub_type) = &self.sub_type {
            s.field("sub_type", sub_type);
        }
        if !self.sub_types.is_empty() {
            s.field("sub_types", &self.sub_types);
        }
        if let Some(values) = &self.values {
            s.field("values", values);
        }
        if let Some(fields) = &self.fields {
            s.field("fields", fields);
        }
        if let Some(pattern) = &self.pattern {
            s.field("pattern", pattern);
        }
        if self.convert.is_some() {
            s.field("convert", &"<fn>");
        }
        s.finish()
    }
}
