//! Core module tests
//!
//! Contains test suites for core functionality:
//! - `extra-keys` matrix parsing
//! - Shortcut parsing
//! - Glyph display per style

#[cfg(test)]
mod matrix_tests;
