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

//! Matrix parser tests
//!
//! Tests for the `extra-keys` property:
//! - Shape inference (single row, list of rows, empty list)
//! - Unimplemented shapes (strings, objects, per-key objects)
//! - Mixed lists
//! - Token normalisation (null, numbers, booleans)
//! - Alias resolution

use crate::core::{
    matrix::{classify, parse_extra_keys, parse_extra_keys_raw, ExtraKeysError, RawShape},
    types::KeyMatrix,
};
use proptest::prelude::*;

#[test]
fn test_absent_yields_default_layout() {
    let matrix = parse_extra_keys(None).unwrap();
    assert_eq!(matrix, KeyMatrix::default_layout());
    assert_eq!(matrix.rows()[0].len(), 7);
}

#[test]
fn test_empty_array_yields_zero_rows() {
    let matrix = parse_extra_keys(Some("[]")).unwrap();
    assert!(matrix.is_empty());
    assert_ne!(matrix, KeyMatrix::default_layout());
}

#[test]
fn test_flat_list_becomes_single_row() {
    let matrix = parse_extra_keys(Some(r#"["ESC", "TAB", "|"]"#)).unwrap();
    assert_eq!(matrix, KeyMatrix::from(vec![vec!["ESC", "TAB", "|"]]));
}

#[test]
fn test_nested_list_kept_as_rows() {
    let raw = r#"[["ESC", "/", "-", "HOME", "UP", "END", "PGUP"],
                  ["TAB", "CTRL", "ALT", "LEFT", "DOWN", "RIGHT", "PGDN"]]"#;
    let matrix = parse_extra_keys(Some(raw)).unwrap();

    assert_eq!(matrix.row_count(), 2);
    assert_eq!(matrix.rows()[0][3], "HOME");
    assert_eq!(matrix.rows()[1][6], "PGDN");
}

#[test]
fn test_single_quoted_layout() {
    let raw = "[['ESC','/','-','HOME','UP','END','PGUP'],['TAB','CTRL','ALT','LEFT','DOWN','RIGHT','PGDN']]";
    let matrix = parse_extra_keys(Some(raw)).unwrap();

    assert_eq!(
        matrix,
        KeyMatrix::from(vec![
            vec!["ESC", "/", "-", "HOME", "UP", "END", "PGUP"],
            vec!["TAB", "CTRL", "ALT", "LEFT", "DOWN", "RIGHT", "PGDN"],
        ])
    );
}

#[test]
fn test_single_and_double_quotes_mix() {
    let matrix = parse_extra_keys(Some(r#"['ESCAPE', "PAGE_UP", 'a"b']"#)).unwrap();
    assert_eq!(matrix, KeyMatrix::from(vec![vec!["ESC", "PGUP", "a\"b"]]));
}

#[test]
fn test_empty_rows_are_legal() {
    let matrix = parse_extra_keys(Some(r#"[[], ["A"]]"#)).unwrap();
    assert_eq!(matrix, KeyMatrix::from(vec![vec![], vec!["A"]]));
}

#[test]
fn test_leading_whitespace_before_bracket() {
    let matrix = parse_extra_keys(Some("  \t[\"A\"]")).unwrap();
    assert_eq!(matrix, KeyMatrix::from(vec![vec!["A"]]));
}

#[test]
fn test_mixed_list_rejected() {
    let result = parse_extra_keys(Some(r#"[["a"], "b"]"#));
    assert!(matches!(result, Err(ExtraKeysError::MixedType)));

    let result = parse_extra_keys(Some(r#"["b", ["a"]]"#));
    assert!(matches!(result, Err(ExtraKeysError::MixedType)));
}

#[test]
fn test_bare_string_not_implemented() {
    let err = parse_extra_keys(Some("ESC CTRL ALT")).unwrap_err();
    assert!(matches!(err, ExtraKeysError::StringsNotImplemented));
    assert!(err.is_unsupported_shape());
    assert_eq!(err.to_string(), "extra-keys: Strings are not yet implemented");
}

#[test]
fn test_object_not_implemented() {
    let err = parse_extra_keys(Some(r#"{"row": ["ESC"]}"#)).unwrap_err();
    assert!(matches!(err, ExtraKeysError::ObjectsNotImplemented));
    assert!(err.is_unsupported_shape());
    assert!(err.to_string().contains("JSON Objects are not yet implemented"));
}

#[test]
fn test_per_key_object_not_implemented() {
    let err = parse_extra_keys(Some(r#"[["a", {"popup": "x"}]]"#)).unwrap_err();
    assert!(matches!(err, ExtraKeysError::PerKeyConfigNotImplemented));
    assert!(!err.is_unsupported_shape());
}

#[test]
fn test_malformed_json() {
    let err = parse_extra_keys(Some(r#"["ESC", "#)).unwrap_err();
    assert!(matches!(err, ExtraKeysError::InvalidJson(_)));
    assert!(err.to_string().starts_with("extra-keys: "));

    let err = parse_extra_keys(Some("[['ESC', 'TAB']")).unwrap_err();
    assert!(matches!(err, ExtraKeysError::InvalidJson(_)));
}

#[test]
fn test_null_becomes_space() {
    let matrix = parse_extra_keys(Some(r#"[["a", null]]"#)).unwrap();
    assert_eq!(matrix, KeyMatrix::from(vec![vec!["a", " "]]));
}

#[test]
fn test_scalars_become_strings() {
    let matrix = parse_extra_keys(Some(r#"[1, 2.5, true, false]"#)).unwrap();
    assert_eq!(matrix, KeyMatrix::from(vec![vec!["1", "2.5", "true", "false"]]));
}

#[test]
fn test_aliases_resolved() {
    let matrix = parse_extra_keys(Some(r#"[["ESCAPE", "CONTROL", "PAGE_DOWN", "BACKSLASH"]]"#)).unwrap();
    assert_eq!(matrix, KeyMatrix::from(vec![vec!["ESC", "CTRL", "PGDN", "\\"]]));
}

#[test]
fn test_raw_parse_keeps_aliases() {
    let matrix = parse_extra_keys_raw(Some(r#"["RETURN"]"#)).unwrap();
    assert_eq!(matrix, KeyMatrix::from(vec![vec!["RETURN"]]));
}

#[test]
fn test_classify() {
    assert_eq!(classify("[1]"), RawShape::Array);
    assert_eq!(classify(" {}"), RawShape::Object);
    assert_eq!(classify("ESC"), RawShape::String);
    assert_eq!(classify(""), RawShape::String);
}

fn token_strategy() -> impl Strategy<Value = String> {
    // Alias sources would be rewritten, so they are left out
    "[A-Z0-9|/]{1,6}".prop_filter("alias source", |s| crate::core::aliases::resolve(s) == s)
}

proptest! {
    #[test]
    fn prop_flat_list_wraps_in_one_row(row in prop::collection::vec(token_strategy(), 1..8)) {
        let raw = serde_json::to_string(&row).unwrap();
        let matrix = parse_extra_keys(Some(&raw)).unwrap();
        prop_assert_eq!(matrix.into_rows(), vec![row]);
    }

    #[test]
    fn prop_list_of_rows_is_identity(
        rows in prop::collection::vec(prop::collection::vec(token_strategy(), 0..6), 1..5)
    ) {
        let raw = serde_json::to_string(&rows).unwrap();
        let matrix = parse_extra_keys(Some(&raw)).unwrap();
        prop_assert_eq!(matrix.into_rows(), rows);
    }
}
