//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Kind, Path, ValidationError, and the
//! persistent collections.

mod errors;
