//! JSON documents end to end: parse with serde_json, validate, convert
//! back.

use serde_json::json;
use vouch_schema::{compile, Descriptor, Options, TypeTag, Value};

#[test]
fn a_json_document_describes_its_own_shape() {
    let example = Value::from(json!({
        "name": "John",
        "age": 30.0,
        "tags": ["one"],
    }));
    let v = compile(&Descriptor::from(example)).unwrap();

    let input = Value::from(json!({
        "name": "Ann",
        "age": 25.0,
        "tags": ["admin", "ops"],
    }));
    assert_eq!(v.validate(input.clone()).unwrap(), input);

    let err = v
        .validate(Value::from(json!({ "name": 7, "age": 25.0, "tags": [] })))
        .unwrap_err();
    assert_eq!(err.path, "name");
    assert_eq!(err.message, "Expected String, got Number");
}

#[test]
fn validated_output_converts_back_to_json() {
    let d = Descriptor::fields([
        ("name", Descriptor::from(TypeTag::String)),
        ("age", TypeTag::Number.with(Options::new().default_value(0.0))),
    ]);
    let v = compile(&d).unwrap();
    let out = v.validate(Value::from(json!({ "name": "Ann" }))).unwrap();
    assert_eq!(out.to_json(), Some(json!({ "age": 0.0, "name": "Ann" })));
}

#[test]
fn json_null_is_null_not_absence() {
    let d = Descriptor::fields([("middle", Descriptor::from(TypeTag::String))]);
    let v = compile(&d).unwrap();
    let err = v
        .validate(Value::from(json!({ "middle": null })))
        .unwrap_err();
    assert_eq!(err.message, "Expected String, got Null");
}

#[test]
fn number_strings_normalize_documents() {
    let d = Descriptor::fields([("price", Descriptor::from(TypeTag::NumberString))]);
    let v = compile(&d).unwrap();
    let out = v.validate(Value::from(json!({ "price": "19.99" }))).unwrap();
    assert_eq!(out.to_json(), Some(json!({ "price": 19.99 })));
}

#[test]
fn enum_constrains_document_fields() {
    let d = Descriptor::fields([(
        "level",
        Descriptor::enumeration([
            Value::from("debug"),
            Value::from("info"),
            Value::from("warn"),
        ]),
    )]);
    let v = compile(&d).unwrap();
    assert!(v.validate(Value::from(json!({ "level": "info" }))).is_ok());
    let err = v
        .validate(Value::from(json!({ "level": "loud" })))
        .unwrap_err();
    assert_eq!(err.path, "level");
    assert_eq!(err.message, "Invalid value");
}

#[test]
fn patterns_extract_values_from_documents() {
    let d = Descriptor::fields([(
        "id",
        TypeTag::Regex.with(
            Options::new()
                .pattern(regex::Regex::new("^user-([0-9]+)$").unwrap())
                .convert(|caps| {
                    let digits = caps.get(1).map_or("", |m| m.as_str());
                    Value::from(digits.parse::<f64>().unwrap_or(f64::NAN))
                }),
        ),
    )]);
    let v = compile(&d).unwrap();
    let out = v.validate(Value::from(json!({ "id": "user-42" }))).unwrap();
    assert_eq!(out.to_json(), Some(json!({ "id": 42.0 })));
}

#[test]
fn undeclared_document_keys_are_projected_away() {
    let d = Descriptor::fields([("name", Descriptor::from(TypeTag::String))]);
    let v = compile(&d).unwrap();
    let out = v
        .validate(Value::from(json!({ "name": "Ann", "debug": true })))
        .unwrap();
    assert_eq!(out.to_json(), Some(json!({ "name": "Ann" })));
}
