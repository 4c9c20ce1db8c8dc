//! Vouch - descriptor-to-validator compiler
//!
//! This crate re-exports both layers of the vouch system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: vouch_schema     — Descriptors, compiler, validators
//! Layer 0: vouch_foundation — Core types (Value, Kind, Path, ValidationError)
//! ```

pub use vouch_foundation as foundation;
pub use vouch_schema as schema;
