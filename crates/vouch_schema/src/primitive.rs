//! Primitive validator constructors.
//!
//! One constructor per canonical kind. Each builds its expectation, checks
//! any configured default against it at compile time, and defers the
//! absence policy to the shared triage in [`crate::validator`].

use vouch_foundation::{Kind, Path, Result, ValidationError, Value};

use crate::options::Options;
use crate::validator::{
    expect, expect_if_defined, triage, Check, Expectation, Validator,
};

pub(crate) fn simple(expectation: Expectation, opts: &Options, path: &Path) -> Result<Validator> {
    expect_if_defined(&expectation, opts.default_value.as_ref(), path)?;
    let opts = opts.clone();
    Ok(Validator::new(move |value, path| {
        triage(&expectation, &opts, value, path)
    }))
}

/// Builds a validator from a custom predicate over present values,
/// honoring the shared default/optional policy.
///
/// This is the expectation protocol behind `Integer` and `Enum`, exposed
/// so custom compilers can define new kinds without reimplementing the
/// absence triage. The default, if set, must satisfy the predicate.
///
/// # Errors
/// Returns a located error when the configured default fails the
/// predicate.
pub fn predicate(
    check: impl Fn(&Value, &Path) -> Check + Send + Sync + 'static,
    opts: &Options,
    path: &Path,
) -> Result<Validator> {
    simple(Expectation::predicate(check), opts, path)
}

/// Builds a validator accepting exactly the absence marker.
///
/// Ignores all options: absence is the only valid input, so defaults and
/// optionality do not apply.
pub fn undefined(_opts: &Options, _path: &Path) -> Result<Validator> {
    Ok(Validator::new(|value, path| {
        expect(&Expectation::kind(Kind::Undefined), &value, path)?;
        Ok(value)
    }))
}

/// Builds a validator accepting null.
pub fn null(opts: &Options, path: &Path) -> Result<Validator> {
    simple(Expectation::kind(Kind::Null), opts, path)
}

/// Builds a validator accepting booleans.
pub fn boolean(opts: &Options, path: &Path) -> Result<Validator> {
    simple(Expectation::kind(Kind::Boolean), opts, path)
}

fn is_integer(n: f64) -> bool {
    n.is_finite() && n.floor() == n
}

/// Builds a validator accepting numbers.
///
/// With `integers_only` set, a fractional or non-finite number fails even
/// when it classifies as a Number.
pub fn number(opts: &Options, path: &Path) -> Result<Validator> {
    let integers_only = opts.integers_only;
    let base = simple(Expectation::kind(Kind::Number), opts, path)?;
    Ok(Validator::new(move |value, path| {
        let value = base.validate_at(value, path)?;
        if integers_only {
            if let Value::Number(n) = &value {
                if !is_integer(*n) {
                    return Err(ValidationError::new(path, "Expected an integer number"));
                }
            }
        }
        Ok(value)
    }))
}

/// Builds a validator accepting integer-valued numbers.
///
/// Shorthand for a Number with `integers_only` forced on, expressed as a
/// predicate so the default is held to the same constraint at compile
/// time.
pub fn integer(opts: &Options, path: &Path) -> Result<Validator> {
    simple(
        Expectation::predicate(|value, _| match value {
            Value::Number(n) if is_integer(*n) => Check::Pass,
            _ => Check::Reason("Expected an integer number".to_string()),
        }),
        opts,
        path,
    )
}

/// Parses the longest numeric prefix of a trimmed string, so `"12px"`
/// yields `12`. A string with no numeric prefix has no value.
fn parse_number_prefix(s: &str) -> Option<f64> {
    let s = s.trim();
    (1..=s.len())
        .rev()
        .filter(|&end| s.is_char_boundary(end))
        .find_map(|end| s[..end].parse::<f64>().ok())
        .filter(|n| !n.is_nan())
}

/// Builds a validator that parses numeric strings into numbers.
///
/// Expects a String input and returns the Number parsed from its longest
/// numeric prefix, so the output kind differs from the input kind. The
/// default, if set, is a Number and passes through unparsed.
pub fn number_string(opts: &Options, path: &Path) -> Result<Validator> {
    expect_if_defined(
        &Expectation::kind(Kind::Number),
        opts.default_value.as_ref(),
        path,
    )?;
    let opts = opts.clone();
    Ok(Validator::new(move |value, path| {
        let value = triage(&Expectation::kind(Kind::String), &opts, value, path)?;
        match value {
            Value::String(s) => match parse_number_prefix(&s) {
                Some(parsed) => Ok(Value::Number(parsed)),
                None => Err(ValidationError::new(path, "Invalid number")),
            },
            // Undefined from an optional absence, or the Number default.
            other => Ok(other),
        }
    }))
}

/// Builds a validator accepting strings.
pub fn string(opts: &Options, path: &Path) -> Result<Validator> {
    simple(Expectation::kind(Kind::String), opts, path)
}

/// Builds a validator accepting dates.
pub fn date(opts: &Options, path: &Path) -> Result<Validator> {
    simple(Expectation::kind(Kind::Date), opts, path)
}

/// Builds a validator accepting native functions.
pub fn function(opts: &Options, path: &Path) -> Result<Validator> {
    simple(Expectation::kind(Kind::Function), opts, path)
}

/// Builds a validator matching strings against a pattern.
///
/// The `pattern` option is mandatory and its absence is a compile-time
/// failure. On a match, the configured `convert` produces the result; by
/// default the whole matched substring is returned as a String.
pub fn pattern(opts: &Options, path: &Path) -> Result<Validator> {
    let Some(re) = opts.pattern.clone() else {
        return Err(ValidationError::type_mismatch(path, Kind::Regex, Kind::Undefined));
    };
    expect_if_defined(
        &Expectation::kind(Kind::String),
        opts.default_value.as_ref(),
        path,
    )?;
    let convert = opts.convert.clone();
    let opts = opts.clone();
    Ok(Validator::new(move |value, path| {
        let value = triage(&Expectation::kind(Kind::String), &opts, value, path)?;
        match value {
            Value::String(s) => {
                let Some(caps) = re.regex().captures(&s) else {
                    return Err(ValidationError::new(
                        path,
                        format!("String {s:?} didn't match regular expression {re}"),
                    ));
                };
                Ok(match &convert {
                    Some(f) => f(&caps),
                    None => Value::from(caps.get(0).map_or("", |m| m.as_str())),
                })
            }
            other => Ok(other),
        }
    }))
}
