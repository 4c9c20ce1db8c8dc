//! Composite validator constructors: Array, Multi, Enum, Object.
//!
//! Composites compile their child descriptors eagerly through the
//! dispatcher, so descriptor misconfiguration anywhere in the tree
//! surfaces at compile time. At validation time they produce fresh
//! normalized containers and descend the path per element or field.

use vouch_foundation::{Kind, Path, Result, ValidationError, VMap, VVec, Value};

use crate::compile::compile_at;
use crate::options::Options;
use crate::primitive::simple;
use crate::validator::{expect_if_defined, triage, Check, Expectation, Validator};

/// Builds a validator for homogeneous sequences.
///
/// `sub_type` is mandatory; one child validator is compiled for it and
/// applied to every element, descending the path with the stringified
/// index. Order and length are preserved, and the first failing element
/// aborts the whole call.
pub fn array(opts: &Options, path: &Path) -> Result<Validator> {
    let Some(sub_type) = opts.sub_type.as_deref() else {
        return Err(ValidationError::new(path, "Array needs a subType"));
    };
    let element = compile_at(sub_type, path)?;
    let expectation = Expectation::kind(Kind::Array);
    expect_if_defined(&expectation, opts.default_value.as_ref(), path)?;
    let opts = opts.clone();
    Ok(Validator::new(move |value, path| {
        let value = triage(&expectation, &opts, value, path)?;
        match value {
            Value::Array(items) => {
                let container = Value::Array(items.clone());
                let mut out = VVec::new();
                for (i, item) in items.iter().enumerate() {
                    let item_path = path.child(container.clone(), i.to_string());
                    out = out.push_back(element.validate_at(item.clone(), &item_path)?);
                }
                Ok(Value::Array(out))
            }
            other => Ok(other),
        }
    }))
}

/// Builds a validator for fixed-arity heterogeneous tuples.
///
/// `sub_types` must carry at least two descriptors. Validation is
/// positional: the result has exactly one slot per declared position, an
/// absent input element goes through that position's own absence policy,
/// and input elements beyond the declared arity are ignored.
pub fn multi(opts: &Options, path: &Path) -> Result<Validator> {
    if opts.sub_types.len() < 2 {
        return Err(ValidationError::new(path, "Multi needs a subTypes array"));
    }
    let positions = opts
        .sub_types
        .iter()
        .map(|descriptor| compile_at(descriptor, path))
        .collect::<Result<Vec<Validator>>>()?;
    let expectation = Expectation::kind(Kind::Array);
    expect_if_defined(&expectation, opts.default_value.as_ref(), path)?;
    let opts = opts.clone();
    Ok(Validator::new(move |value, path| {
        let value = triage(&expectation, &opts, value, path)?;
        match value {
            Value::Array(items) => {
                let container = Value::Array(items.clone());
                let mut out = VVec::new();
                for (i, position) in positions.iter().enumerate() {
                    let item = items.get(i).cloned().unwrap_or(Value::Undefined);
                    let item_path = path.child(container.clone(), i.to_string());
                    out = out.push_back(position.validate_at(item, &item_path)?);
                }
                Ok(Value::Array(out))
            }
            other => Ok(other),
        }
    }))
}

/// Builds a validator for a closed value set.
///
/// Membership is checked by value equality; the candidate is returned
/// unchanged, with no coercion. An explicitly empty set is legal and
/// rejects every candidate.
pub fn enum_of(opts: &Options, path: &Path) -> Result<Validator> {
    let Some(allowed) = opts.values.clone() else {
        return Err(ValidationError::new(path, "Enum needs a values array"));
    };
    simple(
        Expectation::predicate(move |value, _| {
            if allowed.contains(value) {
                Check::Pass
            } else {
                Check::Invalid
            }
        }),
        opts,
        path,
    )
}

/// Builds a validator for named-field records.
///
/// `fields` is mandatory (an empty field map is a valid projection to the
/// empty record). The output is a fresh record holding only declared
/// fields that produced a value: optional-and-absent fields are omitted
/// rather than stored as explicit absence, and undeclared input keys are
/// dropped.
pub fn object(opts: &Options, path: &Path) -> Result<Validator> {
    let Some(fields) = opts.fields.as_ref() else {
        return Err(ValidationError::new(path, "Object needs fields"));
    };
    let mut children = Vec::with_capacity(fields.len());
    for (name, descriptor) in fields {
        let field_path = path.child(Value::Undefined, name.clone());
        children.push((name.clone(), compile_at(descriptor, &field_path)?));
    }
    let expectation = Expectation::kind(Kind::Object);
    expect_if_defined(&expectation, opts.default_value.as_ref(), path)?;
    let opts = opts.clone();
    Ok(Validator::new(move |value, path| {
        let value = triage(&expectation, &opts, value, path)?;
        match value {
            Value::Object(input) => {
                let container = Value::Object(input.clone());
                let mut out = VMap::new();
                for (name, child) in &children {
                    let field_path = path.child(container.clone(), name.clone());
                    let field = input.get(name).cloned().unwrap_or(Value::Undefined);
                    let validated = child.validate_at(field, &field_path)?;
                    if !validated.is_undefined() {
                        out = out.insert(name.clone(), validated);
                    }
                }
                Ok(Value::Object(out))
            }
            other => Ok(other),
        }
    }))
}
