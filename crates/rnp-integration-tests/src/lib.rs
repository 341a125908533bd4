//! Cross-crate integration tests for the voter credential registry.
//!
//! No library surface — see the `tests/` directory.
