//! Declarative shape descriptors.
//!
//! A descriptor describes an expected shape either by example (a literal
//! value doubles as "this kind, defaulting to this value") or explicitly
//! (a kind tag plus options). Descriptors form a tree mirroring the shape
//! they describe; compilation walks the tree once and the compiler never
//! mutates it.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use vouch_foundation::{Kind, Path, Result, VMap, Value, ValueRegex};

use crate::options::Options;
use crate::validator::Validator;

/// The dispatcher handed to custom compilers for recursive composition.
pub type Dispatch = fn(&Descriptor, &Path) -> Result<Validator>;

/// A user-supplied validator factory extending the compiler with a new
/// kind: `(options, path, dispatcher) -> Validator`.
pub type CustomCompiler =
    Arc<dyn Fn(&Options, &Path, Dispatch) -> Result<Validator> + Send + Sync>;

/// Built-in kind identifiers usable as explicit type tags.
///
/// This is the closed table of named constructors; anything beyond it goes
/// through [`Descriptor::custom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Exactly the absence marker.
    Undefined,
    /// Exactly null.
    Null,
    /// Booleans.
    Boolean,
    /// Numbers, optionally integer-only.
    Number,
    /// Integer-valued numbers.
    Integer,
    /// Strings parsed into numbers.
    NumberString,
    /// Strings.
    String,
    /// Timestamps.
    Date,
    /// Native functions.
    Function,
    /// Strings matched against a pattern.
    Regex,
    /// Homogeneous sequences.
    Array,
    /// Fixed-arity heterogeneous tuples.
    Multi,
    /// Closed value sets.
    Enum,
    /// Named-field records.
    Object,
}

impl TypeTag {
    /// Attaches options to this tag, like a `$type`-tagged record.
    #[must_use]
    pub fn with(self, options: Options) -> Descriptor {
        Descriptor::Tagged(self, options)
    }
}

/// Declarative description of an expected shape.
#[derive(Clone)]
pub enum Descriptor {
    /// An example literal: compiles to its own kind with the literal
    /// installed as the default value.
    Literal(Value),
    /// A bare kind identifier with empty options.
    Tag(TypeTag),
    /// A kind identifier with options.
    Tagged(TypeTag, Options),
    /// An array literal: one element describes a homogeneous array, two or
    /// more describe a fixed tuple, zero is a compile-time error.
    Seq(Vec<Descriptor>),
    /// An object-of-fields shorthand.
    Fields(VMap<String, Descriptor>),
    /// A custom validator factory with its options.
    Custom {
        /// The factory invoked at compile time.
        compiler: CustomCompiler,
        /// Options forwarded to the factory.
        options: Options,
    },
    /// An already-compiled validator; compilation passes it through
    /// unchanged.
    Compiled(Validator),
}

impl Descriptor {
    /// Describes a homogeneous array of `element`.
    #[must_use]
    pub fn array(element: impl Into<Self>) -> Self {
        TypeTag::Array.with(Options::new().sub_type(element))
    }

    /// Describes a fixed tuple of positional descriptors.
    #[must_use]
    pub fn tuple(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Seq(items.into_iter().collect())
    }

    /// Describes a closed set of allowed values.
    #[must_use]
    pub fn enumeration(values: impl IntoIterator<Item = Value>) -> Self {
        TypeTag::Enum.with(Options::new().values(values))
    }

    /// Describes a named-field record.
    #[must_use]
    pub fn fields(
        fields: impl IntoIterator<Item = (impl Into<String>, Self)>,
    ) -> Self {
        Self::Fields(
            fields
                .into_iter()
                .map(|(name, descriptor)| (name.into(), descriptor))
                .collect(),
        )
    }

    /// Wraps a custom compiler with empty options.
    #[must_use]
    pub fn custom(
        compiler: impl Fn(&Options, &Path, Dispatch) -> Result<Validator> + Send + Sync + 'static,
    ) -> Self {
        Self::Custom {
            compiler: Arc::new(compiler),
            options: Options::new(),
        }
    }

    /// Wraps a custom compiler with options.
    #[must_use]
    pub fn custom_with(
        compiler: impl Fn(&Options, &Path, Dispatch) -> Result<Validator> + Send + Sync + 'static,
        options: Options,
    ) -> Self {
        Self::Custom {
            compiler: Arc::new(compiler),
            options,
        }
    }

    /// Returns true if this descriptor is an already-compiled validator.
    #[must_use]
    pub const fn is_compiled(&self) -> bool {
        matches!(self, Self::Compiled(_))
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Self::Tagged(tag, options) => {
                f.debug_tuple("Tagged").field(tag).field(options).finish()
            }
            Self::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
            Self::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
            Self::Custom { options, .. } => f
                .debug_struct("Custom")
                .field("compiler", &"<fn>")
                .field("options", options)
                .finish(),
            Self::Compiled(validator) => {
                f.debug_tuple("Compiled").field(validator).finish()
            }
        }
    }
}

/// Classifies an example value tree into a descriptor.
///
/// Arrays and objects are restructured element-by-element so that an
/// example document (say, parsed JSON) describes its own shape: scalar
/// leaves become kind-with-default descriptors, one-element arrays become
/// homogeneous arrays, longer arrays become tuples, and records become
/// field maps.
impl From<Value> for Descriptor {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => {
                Self::Seq(items.into_iter().map(Self::from).collect())
            }
            Value::Object(fields) => Self::Fields(
                fields
                    .iter()
                    .map(|(name, field)| (name.clone(), Self::from(field.clone())))
                    .collect(),
            ),
            other => Self::Literal(other),
        }
    }
}

impl From<&Value> for Descriptor {
    fn from(value: &Value) -> Self {
        Self::from(value.clone())
    }
}

impl From<TypeTag> for Descriptor {
    fn from(tag: TypeTag) -> Self {
        Self::Tag(tag)
    }
}

impl From<Validator> for Descriptor {
    fn from(validator: Validator) -> Self {
        Self::Compiled(validator)
    }
}

impl From<bool> for Descriptor {
    fn from(b: bool) -> Self {
        Self::Literal(Value::from(b))
    }
}

impl From<f64> for Descriptor {
    fn from(n: f64) -> Self {
        Self::Literal(Value::from(n))
    }
}

impl From<i64> for Descriptor {
    fn from(n: i64) -> Self {
        Self::Literal(Value::from(n))
    }
}

impl From<i32> for Descriptor {
    fn from(n: i32) -> Self {
        Self::Literal(Value::from(n))
    }
}

impl From<&str> for Descriptor {
    fn from(s: &str) -> Self {
        Self::Literal(Value::from(s))
    }
}

impl From<String> for Descriptor {
    fn from(s: String) -> Self {
        Self::Literal(Value::from(s))
    }
}

impl From<Regex> for Descriptor {
    fn from(regex: Regex) -> Self {
        Self::Literal(Value::from(regex))
    }
}

impl From<ValueRegex> for Descriptor {
    fn from(regex: ValueRegex) -> Self {
        Self::Literal(Value::from(regex))
    }
}

/// Kinds map onto the tags of the primitive constructors they name.
impl From<Kind> for TypeTag {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Undefined => Self::Undefined,
            Kind::Null => Self::Null,
            Kind::Boolean => Self::Boolean,
            Kind::Number => Self::Number,
            Kind::String => Self::String,
            Kind::Array => Self::Array,
            Kind::Object => Self::Object,
            Kind::Regex => Self::Regex,
            Kind::Date => Self::Date,
            Kind::Function => Self::Function,
        }
    }
}
