//! Integration tests for Layer 1: Schema
//!
//! Tests for descriptor compilation, primitive and composite validators,
//! and the dispatcher.

mod dispatch;
