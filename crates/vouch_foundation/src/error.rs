//! The single located error type for vouch.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

use crate::kind::Kind;
use crate::path::Path;

/// Result alias used throughout vouch.
pub type Result<T, E = ValidationError> = std::result::Result<T, E>;

/// A located validation failure.
///
/// Every failure carries the rendered path of the value that violated a
/// constraint (the root renders as the empty string) and a human-readable
/// reason. There is no error-code enumeration; callers distinguish
/// failures by inspecting `path` and `message`.
///
/// Validation is fail-fast: the first violation anywhere in a value tree
/// aborts the whole call, so an error never aggregates multiple reasons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{path}: {message}")]
pub struct ValidationError {
    /// Rendered dotted path of the failing value.
    pub path: String,
    /// Human-readable reason.
    pub message: String,
}

impl ValidationError {
    /// Creates an error at `path` with the given reason.
    #[must_use]
    pub fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.render(),
            message: message.into(),
        }
    }

    /// Creates a kind-mismatch error: `Expected X, got Y`.
    #[must_use]
    pub fn type_mismatch(path: &Path, expected: Kind, actual: Kind) -> Self {
        Self::new(path, format!("Expected {expected}, got {actual}"))
    }

    /// Creates a missing-value error for a mandatory position.
    #[must_use]
    pub fn missing(path: &Path) -> Self {
        Self::new(path, "Missing value")
    }

    /// Creates a generic predicate-failure error.
    #[must_use]
    pub fn invalid(path: &Path) -> Self {
        Self::new(path, "Invalid value")
    }
}
