//! The dispatcher: compiles descriptors into validators.
//!
//! Compilation walks the descriptor tree once, eagerly: every child
//! descriptor is compiled before the parent validator exists, so a
//! misconfigured descriptor anywhere in the tree fails here and never at
//! validation time. The resulting validator tree mirrors the descriptor's
//! shape and is read-only afterwards.

use vouch_foundation::{Path, Result, ValidationError, Value};

use crate::composite;
use crate::descriptor::{Descriptor, TypeTag};
use crate::options::Options;
use crate::primitive;
use crate::validator::Validator;

/// Compiles a descriptor into a reusable validator.
///
/// Idempotent: an already-compiled descriptor comes back unchanged.
///
/// # Errors
/// Returns a located error for a misconfigured descriptor (missing
/// `subType`/`subTypes`/`values`/`fields`/`pattern`, an empty array
/// literal, or a default value that fails its own kind).
pub fn compile(descriptor: &Descriptor) -> Result<Validator> {
    compile_at(descriptor, &Path::root())
}

/// Compiles a descriptor at an explicit path.
///
/// This is the recursion point handed to custom compilers; composite
/// constructors route child descriptors through it.
///
/// # Errors
/// Same as [`compile`].
pub fn compile_at(descriptor: &Descriptor, path: &Path) -> Result<Validator> {
    match descriptor {
        Descriptor::Compiled(validator) => Ok(validator.clone()),
        Descriptor::Literal(value) => compile_literal(value, path),
        Descriptor::Seq(items) => compile_seq(items, path),
        Descriptor::Fields(fields) => {
            composite::object(&Options::new().fields(fields.clone()), path)
        }
        Descriptor::Tag(tag) => compile_tag(*tag, &Options::new(), path),
        Descriptor::Tagged(tag, options) => compile_tag(*tag, options, path),
        Descriptor::Custom { compiler, options } => compiler(options, path, compile_at),
    }
}

/// An example literal compiles to its own kind with itself as the default,
/// so a bare example doubles as "optional, defaults to this".
fn compile_literal(value: &Value, path: &Path) -> Result<Validator> {
    match value {
        Value::Undefined => primitive::undefined(&Options::new(), path),
        Value::Null => primitive::null(&Options::new().default_value(Value::Null), path),
        Value::Bool(_) => {
            primitive::boolean(&Options::new().default_value(value.clone()), path)
        }
        Value::Number(_) => {
            primitive::number(&Options::new().default_value(value.clone()), path)
        }
        Value::String(_) => {
            primitive::string(&Options::new().default_value(value.clone()), path)
        }
        Value::Date(_) => {
            primitive::date(&Options::new().default_value(value.clone()), path)
        }
        Value::Function(_) => {
            primitive::function(&Options::new().default_value(value.clone()), path)
        }
        Value::Regex(regex) => {
            primitive::pattern(&Options::new().pattern(regex.clone()), path)
        }
        Value::Array(items) => {
            let items: Vec<Descriptor> = items.iter().map(Descriptor::from).collect();
            compile_seq(&items, path)
        }
        Value::Object(fields) => {
            let fields = fields
                .iter()
                .map(|(name, field)| (name.clone(), Descriptor::from(field)))
                .collect();
            composite::object(&Options::new().fields(fields), path)
        }
    }
}

/// An array literal's length selects the composite: one element describes
/// a homogeneous array, two or more a fixed tuple.
fn compile_seq(items: &[Descriptor], path: &Path) -> Result<Validator> {
    match items {
        [] => Err(ValidationError::new(
            path,
            "Array needs at least one element to define its item type.",
        )),
        [element] => composite::array(&Options::new().sub_type(element.clone()), path),
        _ => composite::multi(&Options::new().sub_types(items.to_vec()), path),
    }
}

fn compile_tag(tag: TypeTag, options: &Options, path: &Path) -> Result<Validator> {
    match tag {
        TypeTag::Undefined => primitive::undefined(options, path),
        TypeTag::Null => primitive::null(options, path),
        TypeTag::Boolean => primitive::boolean(options, path),
        TypeTag::Number => primitive::number(options, path),
        TypeTag::Integer => primitive::integer(options, path),
        TypeTag::NumberString => primitive::number_string(options, path),
        TypeTag::String => primitive::string(options, path),
        TypeTag::Date => primitive::date(options, path),
        TypeTag::Function => primitive::function(options, path),
        TypeTag::Regex => primitive::pattern(options, path),
        TypeTag::Array => composite::array(options, path),
        TypeTag::Multi => composite::multi(options, path),
        TypeTag::Enum => composite::enum_of(options, path),
        TypeTag::Object => composite::object(options, path),
    }
}
