//! Config module tests
//!
//! Contains test suites for file-facing functionality:
//! - Properties file parsing
//! - File discovery and loading
//! - Reload semantics and snapshot swapping

#[cfg(test)]
mod source_tests;
