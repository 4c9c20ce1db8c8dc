//! Integration tests for the compile dispatcher: idempotence, compile-time
//! descriptor checking, and custom compilers.

use vouch_schema::{
    compile, compile_at, primitive, Check, Descriptor, Options, Path, TypeTag,
    ValidationError, Validator, Value,
};

#[test]
fn compilation_is_idempotent() {
    let first = compile(&Descriptor::from("hello")).unwrap();
    let second = compile(&Descriptor::from(first.clone())).unwrap();
    assert_eq!(
        first.validate(Value::Undefined).unwrap(),
        second.validate(Value::Undefined).unwrap(),
    );
}

#[test]
fn validators_are_reusable() {
    let v = compile(&Descriptor::from(TypeTag::Number)).unwrap();
    assert!(v.validate(Value::from(1.0)).is_ok());
    assert!(v.validate(Value::from("x")).is_err());
    assert!(v.validate(Value::from(2.0)).is_ok());
}

#[test]
fn bad_default_fails_at_compile_time() {
    let d = TypeTag::Number.with(Options::new().default_value("not a number"));
    let err = compile(&d).unwrap_err();
    assert_eq!(err.message, "Expected Number, got String");
}

#[test]
fn bad_nested_default_fails_at_compile_time() {
    let d = Descriptor::fields([(
        "age",
        TypeTag::Number.with(Options::new().default_value("x")),
    )]);
    let err = compile(&d).unwrap_err();
    assert_eq!(err.path, "age");
    assert_eq!(err.message, "Expected Number, got String");
}

#[test]
fn misconfigured_nested_descriptor_fails_at_compile_time() {
    let d = Descriptor::fields([("tags", Descriptor::from(TypeTag::Array))]);
    let err = compile(&d).unwrap_err();
    assert_eq!(err.message, "Array needs a subType");
}

#[test]
fn regex_tag_without_pattern_fails_at_compile_time() {
    let err = compile(&Descriptor::from(TypeTag::Regex)).unwrap_err();
    assert_eq!(err.message, "Expected RegExp, got Undefined");
}

#[test]
fn compile_at_locates_errors() {
    let root = Path::root();
    let path = root.child(Value::Undefined, "config".to_string());
    let err = compile_at(&Descriptor::from(TypeTag::Multi), &path).unwrap_err();
    assert_eq!(err.path, "config");
    assert_eq!(err.message, "Multi needs a subTypes array");
}

#[test]
fn custom_compiler_wraps_built_in_kinds() {
    // An "even number" kind layered on the Number constructor.
    let d = Descriptor::custom(|_opts, path, dispatch| {
        let number = dispatch(&Descriptor::from(TypeTag::Number), path)?;
        Ok(Validator::new(move |value, path| {
            let value = number.validate_at(value, path)?;
            match value.as_number() {
                Some(n) if n % 2.0 != 0.0 => {
                    Err(ValidationError::new(path, "Expected an even number"))
                }
                _ => Ok(value),
            }
        }))
    });
    let v = compile(&d).unwrap();
    assert_eq!(v.validate(Value::from(4.0)).unwrap(), Value::from(4.0));
    let err = v.validate(Value::from(3.0)).unwrap_err();
    assert_eq!(err.message, "Expected an even number");
}

#[test]
fn custom_compiler_composes_inside_objects() {
    let positive = Descriptor::custom(|_opts, path, dispatch| {
        let number = dispatch(&Descriptor::from(TypeTag::Number), path)?;
        Ok(Validator::new(move |value, path| {
            let value = number.validate_at(value, path)?;
            match value.as_number() {
                Some(n) if n <= 0.0 => {
                    Err(ValidationError::new(path, "Expected a positive number"))
                }
                _ => Ok(value),
            }
        }))
    });
    let d = Descriptor::fields([("count", positive)]);
    let v = compile(&d).unwrap();
    let bad = Value::Object(
        [("count".to_string(), Value::from(-1.0))].into_iter().collect(),
    );
    let err = v.validate(bad).unwrap_err();
    assert_eq!(err.path, "count");
    assert_eq!(err.message, "Expected a positive number");
}

#[test]
fn custom_compilers_can_build_predicate_kinds() {
    let d = Descriptor::custom(|opts, path, _| {
        primitive::predicate(
            |value, _| match value.as_number() {
                Some(n) if n >= 0.0 => Check::Pass,
                Some(_) => Check::Reason("Expected a non-negative number".to_string()),
                None => Check::Invalid,
            },
            opts,
            path,
        )
    });
    let v = compile(&d).unwrap();
    assert_eq!(v.validate(Value::from(0.0)).unwrap(), Value::from(0.0));
    let err = v.validate(Value::from(-1.0)).unwrap_err();
    assert_eq!(err.message, "Expected a non-negative number");
    let err = v.validate(Value::from("x")).unwrap_err();
    assert_eq!(err.message, "Invalid value");
}

#[test]
fn custom_compiler_receives_options() {
    let d = Descriptor::custom_with(
        |opts, path, dispatch| {
            assert_eq!(opts.default_value, Some(Value::from(7.0)));
            dispatch(&TypeTag::Number.with(opts.clone()), path)
        },
        Options::new().default_value(7.0),
    );
    let v = compile(&d).unwrap();
    assert_eq!(v.validate(Value::Undefined).unwrap(), Value::from(7.0));
}

#[test]
fn precompiled_validators_embed_in_descriptors() {
    let name = compile(&Descriptor::from(TypeTag::String)).unwrap();
    let d = Descriptor::fields([("name", Descriptor::from(name))]);
    let v = compile(&d).unwrap();
    let input = Value::Object(
        [("name".to_string(), Value::from("Ann"))].into_iter().collect(),
    );
    assert_eq!(v.validate(input.clone()).unwrap(), input);
}
