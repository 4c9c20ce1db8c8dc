//! End-to-end tests across the whole stack: descriptors built by example,
//! deep structures, and JSON documents flowing through validators.

mod deep;
mod documents;
