//! Deep nested structures: records of records of tuples, with errors
//! located by dotted paths.

use vouch_schema::{compile, Descriptor, Options, TypeTag, Validator, Value};

fn object(pairs: impl IntoIterator<Item = (&'static str, Value)>) -> Value {
    Value::Object(
        pairs
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
    )
}

fn person_validator() -> Validator {
    let address = Descriptor::fields([
        ("city", Descriptor::from(TypeTag::String)),
        ("street", Descriptor::from(TypeTag::String)),
        ("code", Descriptor::from(TypeTag::Number)),
    ]);
    let car = Descriptor::tuple([
        Descriptor::from(TypeTag::String),
        Descriptor::from(TypeTag::String),
        TypeTag::Number.with(Options::new().optional()),
    ]);
    let person = Descriptor::fields([
        ("name", Descriptor::from(TypeTag::String)),
        ("age", Descriptor::from(TypeTag::Number)),
        ("address", address),
        ("cars", Descriptor::array(car)),
    ]);
    compile(&person).unwrap()
}

fn person(code: Value) -> Value {
    object([
        ("name", Value::from("John")),
        ("age", Value::from(33.0)),
        (
            "address",
            object([
                ("city", Value::from("New York")),
                ("street", Value::from("Broadway")),
                ("code", code),
            ]),
        ),
        (
            "cars",
            Value::Array(
                [Value::Array(
                    [Value::from("BMW"), Value::from("M3"), Value::from(600.0)]
                        .into_iter()
                        .collect(),
                )]
                .into_iter()
                .collect(),
            ),
        ),
    ])
}

#[test]
fn deep_parse_succeeds() {
    let v = person_validator();
    let input = person(Value::from(10174.0));
    assert_eq!(v.validate(input.clone()).unwrap(), input);
}

#[test]
fn deep_failure_is_located_by_dotted_path() {
    let v = person_validator();
    let err = v.validate(person(Value::from("10174"))).unwrap_err();
    assert_eq!(err.path, "address.code");
    assert_eq!(err.message, "Expected Number, got String");
    assert_eq!(err.to_string(), "address.code: Expected Number, got String");
}

fn with_cars(input: Value, car: Value) -> Value {
    let fields = input.as_object().unwrap().clone();
    Value::Object(fields.insert(
        "cars".to_string(),
        Value::Array([car].into_iter().collect()),
    ))
}

#[test]
fn deep_failure_inside_a_tuple_element() {
    let v = person_validator();
    let bad_car = Value::Array(
        [Value::from("BMW"), Value::from(3.0)].into_iter().collect(),
    );
    let input = with_cars(person(Value::from(10174.0)), bad_car);
    let err = v.validate(input).unwrap_err();
    assert_eq!(err.path, "cars.0.1");
    assert_eq!(err.message, "Expected String, got Number");
}

#[test]
fn optional_tuple_position_may_be_absent() {
    let v = person_validator();
    let car = Value::Array(
        [Value::from("VW"), Value::from("Golf")].into_iter().collect(),
    );
    let input = with_cars(person(Value::from(10174.0)), car);
    let out = v.validate(input).unwrap();
    let cars = out.as_object().unwrap().get(&"cars".to_string()).unwrap();
    let car = cars.as_array().unwrap().get(0).unwrap();
    // The optional horsepower slot carries no value but keeps its position.
    assert_eq!(car.as_array().unwrap().len(), 3);
    assert!(car.as_array().unwrap().get(2).unwrap().is_undefined());
}

#[test]
fn defaults_fill_in_depth_first() {
    let d = Descriptor::fields([(
        "settings",
        Descriptor::fields([
            ("theme", Descriptor::from("light")),
            ("retries", Descriptor::from(3.0)),
        ]),
    )]);
    let v = compile(&d).unwrap();
    let out = v
        .validate(object([("settings", object([]))]))
        .unwrap();
    let settings = out.as_object().unwrap().get(&"settings".to_string()).unwrap();
    let settings = settings.as_object().unwrap();
    assert_eq!(settings.get(&"theme".to_string()), Some(&Value::from("light")));
    assert_eq!(settings.get(&"retries".to_string()), Some(&Value::from(3.0)));
}
