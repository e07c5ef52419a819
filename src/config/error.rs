use std::path::PathBuf;
use thiserror::Error;

use crate::core::matrix::ExtraKeysError;

/// Errors that can occur while loading terminal preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Properties file does not exist.
    #[error("Properties file not found: {0}")]
    NotFound(PathBuf),
    /// A `\uXXXX` escape is not followed by four hex digits.
    #[error("Malformed \\uxxxx encoding on line {line}")]
    InvalidEscape { line: usize },
    /// The `extra-keys` property could not be parsed.
    #[error(transparent)]
    ExtraKeys(#[from] ExtraKeysError),
    /// The file watcher could not be set up.
    #[error("Failed to watch properties file: {0}")]
    Watch(#[from] notify::Error),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
