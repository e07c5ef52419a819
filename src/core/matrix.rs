// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/matrix.rs
//!
//! `extra-keys` property parser
//!
//! The property accepts several shapes for the same layout:
//! - `["ESC", "TAB"]` (one row)
//! - `[["ESC", "TAB"], ["LEFT", "RIGHT"]]` (list of rows)
//!
//! Bare strings and JSON objects are reserved but not implemented, and a list
//! mixing rows with plain keys is rejected rather than guessed at.
//!
//! Array text is read leniently (JSON5), so the single-quoted layouts found
//! in most hand-written `termux.properties` files parse as well:
//! `[['ESC','TAB'],['LEFT','RIGHT']]`.
//!
//! # Architecture
//! Parsing runs in two phases so each can be tested on its own:
//! 1. `parse_extra_keys_raw`: shape inference and token normalisation
//! 2. `aliases::resolve_matrix`: canonical spelling of every token
//!
//! `parse_extra_keys` runs both.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::core::aliases::resolve_matrix;
use crate::core::types::{Identifier, KeyMatrix};

/// Errors produced while parsing the `extra-keys` property
#[derive(Debug, Error)]
pub enum ExtraKeysError {
    /// Value is neither a JSON array nor a JSON object
    #[error("extra-keys: Strings are not yet implemented")]
    StringsNotImplemented,

    /// Value is a JSON object
    #[error("extra-keys: JSON Objects are not yet implemented")]
    ObjectsNotImplemented,

    /// Top-level list holds both rows and plain keys
    #[error("extra-keys: Contains a list of mixed type, please use a list of strings or a list of list of strings")]
    MixedType,

    /// A key inside a row is a JSON object
    #[error("extra-keys: Per key configuration are not yet implemented")]
    PerKeyConfigNotImplemented,

    /// Value starts like an array but cannot be read as one
    #[error("extra-keys: {0}")]
    InvalidJson(#[from] json5::Error),
}

impl ExtraKeysError {
    /// True for the two reserved-but-unimplemented value shapes
    pub fn is_unsupported_shape(&self) -> bool {
        matches!(
            self,
            ExtraKeysError::StringsNotImplemented | ExtraKeysError::ObjectsNotImplemented
        )
    }
}

/// Top-level shape of the raw property text
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RawShape {
    Array,
    Object,
    String,
}

/// Classifies raw text by its first non-whitespace character
pub fn classify(raw: &str) -> RawShape {
    match raw.trim_start().chars().next() {
        Some('[') => RawShape::Array,
        Some('{') => RawShape::Object,
        _ => RawShape::String,
    }
}

/// Parses the `extra-keys` property and resolves aliases
///
/// # Arguments
/// * `raw` - The property value, `None` when the property is absent
///
/// # Returns
/// The default single-row layout when `raw` is `None`, otherwise the parsed
/// matrix with every token in its canonical spelling.
///
/// # Example
/// ```
/// use termux_keys::core::matrix::parse_extra_keys;
///
/// let matrix = parse_extra_keys(Some(r#"["ESCAPE", "PAGE_UP"]"#))?;
/// assert_eq!(matrix.rows(), &[vec!["ESC".to_string(), "PGUP".to_string()]]);
/// # Ok::<(), termux_keys::core::matrix::ExtraKeysError>(())
/// ```
pub fn parse_extra_keys(raw: Option<&str>) -> Result<KeyMatrix, ExtraKeysError> {
    let matrix = parse_extra_keys_raw(raw)?;
    Ok(resolve_matrix(&matrix))
}

/// Parses the `extra-keys` property without alias resolution
pub fn parse_extra_keys_raw(raw: Option<&str>) -> Result<KeyMatrix, ExtraKeysError> {
    let Some(raw) = raw else {
        return Ok(KeyMatrix::default_layout());
    };

    match classify(raw) {
        RawShape::String => return Err(ExtraKeysError::StringsNotImplemented),
        RawShape::Object => return Err(ExtraKeysError::ObjectsNotImplemented),
        RawShape::Array => {}
    }

    let elements: Vec<Value> = json5::from_str(raw)?;
    let rows = into_rows(elements)?;

    let matrix = KeyMatrix::new(
        rows.into_iter()
            .map(normalize_row)
            .collect::<Result<Vec<_>, _>>()?,
    );

    debug!(
        rows = matrix.row_count(),
        columns = matrix.max_row_len(),
        "parsed extra-keys"
    );

    Ok(matrix)
}

/// Infers the matrix dimension from the top-level elements
///
/// - every element a list (including no elements at all): already rows
/// - no element a list: a single row
/// - anything else is ambiguous
fn into_rows(elements: Vec<Value>) -> Result<Vec<Vec<Value>>, ExtraKeysError> {
    if elements.iter().all(Value::is_array) {
        Ok(elements
            .into_iter()
            .map(|row| match row {
                Value::Array(keys) => keys,
                _ => Vec::new(),
            })
            .collect())
    } else if !elements.iter().any(Value::is_array) {
        Ok(vec![elements])
    } else {
        Err(ExtraKeysError::MixedType)
    }
}

fn normalize_row(row: Vec<Value>) -> Result<Vec<Identifier>, ExtraKeysError> {
    row.into_iter().map(normalize_key).collect()
}

/// Converts one JSON element into its identifier
fn normalize_key(value: Value) -> Result<Identifier, ExtraKeysError> {
    match value {
        Value::String(key) => Ok(key),
        Value::Null => Ok(" ".to_string()),
        Value::Object(_) => Err(ExtraKeysError::PerKeyConfigNotImplemented),
        // numbers, booleans and nested lists keep their JSON text
        other => Ok(other.to_string()),
    }
}
