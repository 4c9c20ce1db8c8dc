//! Core value model for vouch.
//!
//! This crate provides:
//! - [`Value`] - The dynamic value type validated by vouch schemas
//! - [`Kind`] - Canonical kind names and the total kind classifier
//! - [`Path`] - Parent-linked location trails for error reporting
//! - [`ValidationError`] - The single located error type
//! - Persistent collections ([`VVec`], [`VMap`])
//! - JSON interop for [`Value`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod json;
pub mod kind;
pub mod path;
pub mod value;

pub use collections::{VMap, VVec};
pub use error::{Result, ValidationError};
pub use kind::Kind;
pub use path::Path;
pub use value::{NativeFn, Value, ValueRegex};
