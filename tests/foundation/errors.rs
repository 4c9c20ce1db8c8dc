//! Integration tests for ValidationError.

use vouch_foundation::{Kind, Path, ValidationError, Value};

#[test]
fn message_is_prefixed_by_the_rendered_path() {
    let path = Path::root()
        .child(Value::Undefined, "name")
        .child(Value::Undefined, "age");
    let err = ValidationError::new(&path, "Expected Number, got String");
    assert_eq!(err.path, "name.age");
    assert_eq!(err.to_string(), "name.age: Expected Number, got String");
}

#[test]
fn root_failures_carry_an_empty_path() {
    let err = ValidationError::missing(&Path::root());
    assert_eq!(err.path, "");
}

#[test]
fn constructor_helpers_cover_the_reason_categories() {
    let root = Path::root();
    assert_eq!(
        ValidationError::type_mismatch(&root, Kind::Array, Kind::Null).message,
        "Expected Array, got Null",
    );
    assert_eq!(ValidationError::missing(&root).message, "Missing value");
    assert_eq!(ValidationError::invalid(&root).message, "Invalid value");
}

#[test]
fn errors_are_comparable_for_tests() {
    let a = ValidationError::missing(&Path::root());
    let b = ValidationError::missing(&Path::root());
    assert_eq!(a, b);
}
