//! Descriptor-to-validator compiler for vouch.
//!
//! A descriptor — an example literal, a kind tag, an array or record of
//! descriptors, or a tag with explicit options — compiles once into a
//! reusable [`Validator`]: a pure function from a candidate [`Value`] to a
//! normalized value or a located [`ValidationError`].
//!
//! ```
//! use vouch_schema::{compile, Descriptor, Options, TypeTag};
//! use vouch_foundation::Value;
//!
//! let descriptor = Descriptor::fields([
//!     ("name", Descriptor::from(TypeTag::String)),
//!     ("age", TypeTag::Number.with(Options::new().default_value(0.0))),
//! ]);
//! let validator = compile(&descriptor).unwrap();
//!
//! let input = Value::Object(
//!     [("name".to_string(), Value::from("John"))].into_iter().collect(),
//! );
//! let output = validator.validate(input).unwrap();
//! assert_eq!(
//!     output.as_object().unwrap().get(&"age".to_string()),
//!     Some(&Value::from(0.0)),
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compile;
pub mod composite;
pub mod descriptor;
pub mod options;
pub mod primitive;
pub mod validator;

pub use compile::{compile, compile_at};
pub use descriptor::{CustomCompiler, Descriptor, Dispatch, TypeTag};
pub use options::{Convert, Options};
pub use validator::{Check, Validator};

// The foundation types every caller needs alongside the compiler.
pub use vouch_foundation::{
    Kind, NativeFn, Path, Result, VMap, VVec, ValidationError, Value, ValueRegex,
};
