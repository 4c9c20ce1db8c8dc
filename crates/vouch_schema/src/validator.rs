//! The compiled validator type and the shared triage policy.
//!
//! Every built-in kind is expressed as an [`Expectation`] (an exact kind
//! check or a predicate) combined with the single [`triage`] policy for
//! absent values. New kinds supply a new expectation; none of them
//! duplicate the absence/default/optional handling.

use std::fmt;
use std::sync::Arc;

use vouch_foundation::{Kind, Path, Result, ValidationError, Value};

use crate::options::Options;

/// A compiled validator: a reusable closure from a candidate value to a
/// normalized value or a located error.
///
/// Validators are stateless across calls, cheap to clone, and safe to use
/// from multiple threads concurrently. Being a distinct wrapper type, "is
/// this already a validator" is answered by the type system rather than a
/// runtime marker.
#[derive(Clone)]
pub struct Validator(Arc<dyn Fn(Value, &Path) -> Result<Value> + Send + Sync>);

impl Validator {
    /// Wraps a validation closure.
    #[must_use]
    pub fn new(f: impl Fn(Value, &Path) -> Result<Value> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Validates a value at the root path.
    ///
    /// # Errors
    /// Returns the first constraint violation anywhere in the value tree.
    pub fn validate(&self, value: Value) -> Result<Value> {
        self.validate_at(value, &Path::root())
    }

    /// Validates a value at an explicit path.
    ///
    /// Internal recursive calls always descend through here so failures
    /// report exact locations.
    ///
    /// # Errors
    /// Returns the first constraint violation anywhere in the value tree.
    pub fn validate_at(&self, value: Value, path: &Path) -> Result<Value> {
        (self.0)(value, path)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<validator>")
    }
}

/// Outcome of a predicate expectation.
pub enum Check {
    /// The value satisfies the predicate.
    Pass,
    /// The value fails with the generic "Invalid value" reason.
    Invalid,
    /// The value fails with a specific reason.
    Reason(String),
}

type PredicateFn = Arc<dyn Fn(&Value, &Path) -> Check + Send + Sync>;

/// What a validator expects of a present value: an exact canonical kind,
/// or an arbitrary predicate.
#[derive(Clone)]
pub(crate) enum Expectation {
    Kind(Kind),
    Predicate(PredicateFn),
}

impl Expectation {
    pub(crate) fn kind(kind: Kind) -> Self {
        Self::Kind(kind)
    }

    pub(crate) fn predicate(
        f: impl Fn(&Value, &Path) -> Check + Send + Sync + 'static,
    ) -> Self {
        Self::Predicate(Arc::new(f))
    }
}

/// Checks a present value against an expectation.
pub(crate) fn expect(expectation: &Expectation, value: &Value, path: &Path) -> Result<()> {
    match expectation {
        Expectation::Kind(expected) => {
            let actual = Kind::of(value);
            if actual == *expected {
                Ok(())
            } else {
                Err(ValidationError::type_mismatch(path, *expected, actual))
            }
        }
        Expectation::Predicate(predicate) => match predicate(value, path) {
            Check::Pass => Ok(()),
            Check::Invalid => Err(ValidationError::invalid(path)),
            Check::Reason(message) => Err(ValidationError::new(path, message)),
        },
    }
}

/// Checks a compile-time option value against an expectation, skipping
/// absent ones. Used to validate `default_value` when a validator is
/// built, so a default can never fail at validation time.
pub(crate) fn expect_if_defined(
    expectation: &Expectation,
    value: Option<&Value>,
    path: &Path,
) -> Result<()> {
    match value {
        None => Ok(()),
        Some(v) => expect(expectation, v, path),
    }
}

/// The shared mandatory/default/optional policy.
///
/// A present value is checked against the expectation and returned
/// unchanged. An absent value resolves to the default when one is set
/// (already validated at compile time), to no value when the position is
/// optional, and to a "Missing value" failure otherwise.
pub(crate) fn triage(
    expectation: &Expectation,
    options: &Options,
    value: Value,
    path: &Path,
) -> Result<Value> {
    if !value.is_undefined() {
        expect(expectation, &value, path)?;
        return Ok(value);
    }
    if let Some(default) = &options.default_value {
        return Ok(default.clone());
    }
    if options.optional {
        return Ok(Value::Undefined);
    }
    Err(ValidationError::missing(path))
}
