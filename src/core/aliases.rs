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

//! Alternate spellings of extra-keys identifiers
//!
//! Users write "ESCAPE", "PAGE_UP" or "BACKSLASH"; the rest of the crate only
//! knows the canonical names. Resolution is a single table lookup: no alias
//! target is itself an alias source, so `resolve` is idempotent.

use crate::core::types::{Identifier, KeyMatrix};

/// Alias → canonical identifier
const ALIASES: &[(&str, &str)] = &[
    ("ESCAPE", "ESC"),
    ("CONTROL", "CTRL"),
    // Different keys technically, few applications can tell
    ("RETURN", "ENTER"),
    ("FUNCTION", "FN"),
    // First and last letter
    ("LT", "LEFT"),
    ("RT", "RIGHT"),
    ("DN", "DOWN"),
    ("PAGEUP", "PGUP"),
    ("PAGE_UP", "PGUP"),
    ("PAGE UP", "PGUP"),
    ("PAGE-UP", "PGUP"),
    ("PAGEDOWN", "PGDN"),
    ("PAGE_DOWN", "PGDN"),
    ("PAGE-DOWN", "PGDN"),
    ("DELETE", "DEL"),
    ("BACKSPACE", "BKSP"),
    // Awkward to write inside a properties file
    ("BACKSLASH", "\\"),
    ("QUOTE", "\""),
    ("APOSTROPHE", "'"),
];

/// Maps an identifier to its canonical spelling
///
/// Total over all strings: unknown tokens come back unchanged.
pub fn resolve(token: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(token)
}

/// Returns a new matrix with every token resolved
pub fn resolve_matrix(matrix: &KeyMatrix) -> KeyMatrix {
    KeyMatrix::new(
        matrix
            .rows()
            .iter()
            .map(|row| row.iter().map(|key| resolve(key).to_string()).collect::<Vec<Identifier>>())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_page_up_spellings() {
        assert_eq!(resolve("PAGE_UP"), "PGUP");
        assert_eq!(resolve("PAGE-UP"), "PGUP");
        assert_eq!(resolve("PAGEUP"), "PGUP");
        assert_eq!(resolve("PAGE UP"), "PGUP");
    }

    #[test]
    fn test_unknown_tokens_unchanged() {
        assert_eq!(resolve("LEFT"), "LEFT");
        assert_eq!(resolve("|"), "|");
        assert_eq!(resolve(""), "");
        // Case sensitive
        assert_eq!(resolve("escape"), "escape");
    }

    #[test]
    fn test_no_alias_chains() {
        for (alias, canonical) in ALIASES {
            assert_ne!(alias, canonical);
            assert!(
                ALIASES.iter().all(|(source, _)| source != canonical),
                "alias target {:?} is itself an alias",
                canonical
            );
        }
    }

    #[test]
    fn test_resolve_matrix_keeps_shape() {
        let matrix = KeyMatrix::from(vec![vec!["ESCAPE", "x"], vec![], vec!["BACKSLASH"]]);
        let resolved = resolve_matrix(&matrix);

        assert_eq!(resolved, KeyMatrix::from(vec![vec!["ESC", "x"], vec![], vec!["\\"]]));
        // Input untouched
        assert_eq!(matrix.rows()[0][0], "ESCAPE");
    }

    proptest! {
        #[test]
        fn prop_resolve_is_idempotent(token in ".*") {
            let once = resolve(&token);
            prop_assert_eq!(resolve(once), once);
        }

        #[test]
        fn prop_resolve_alias_sources_is_idempotent(index in 0..ALIASES.len()) {
            let (alias, canonical) = ALIASES[index];
            prop_assert_eq!(resolve(alias), canonical);
            prop_assert_eq!(resolve(resolve(alias)), canonical);
        }
    }
}
