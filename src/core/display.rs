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

//! Display glyphs for extra-keys identifiers
//!
//! Each style's glyph map is the union of its component sets (see
//! `glyphs::style_components`), built on first use and shared afterwards.
//! Identifiers missing from the map are displayed as themselves.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::core::aliases::resolve;
use crate::core::glyphs::style_components;
use crate::core::types::{KeyMatrix, Style};

/// Identifier → glyph
pub type GlyphMap = HashMap<&'static str, &'static str>;

static GLYPH_MAPS: [OnceLock<GlyphMap>; Style::ALL_STYLES.len()] =
    [const { OnceLock::new() }; Style::ALL_STYLES.len()];

fn cache_slot(style: Style) -> usize {
    match style {
        Style::Default => 0,
        Style::ArrowsOnly => 1,
        Style::ArrowsAll => 2,
        Style::All => 3,
        Style::None => 4,
    }
}

/// Returns the glyph map of a style, building it on first use
pub fn glyph_map(style: Style) -> &'static GlyphMap {
    GLYPH_MAPS[cache_slot(style)].get_or_init(|| build_glyph_map(style))
}

/// Unions the style's component sets, later sets winning on collision
fn build_glyph_map(style: Style) -> GlyphMap {
    let mut map = GlyphMap::new();
    for set in style_components(style) {
        map.extend(set.entries().iter().copied());
    }
    map
}

/// Text to show on the button for `token`
///
/// # Example
/// ```
/// use termux_keys::core::{display::display, Style};
///
/// assert_eq!(display(Style::ArrowsOnly, "LEFT"), "←");
/// assert_eq!(display(Style::None, "LEFT"), "LEFT");
/// ```
pub fn display(style: Style, token: &str) -> &str {
    glyph_map(style).get(token).copied().unwrap_or(token)
}

/// Like `display`, for tokens that may still use an alias spelling
pub fn display_resolved(style: Style, token: &str) -> &str {
    display(style, resolve(token))
}

/// Glyphs for a whole matrix, row by row
pub fn display_matrix(style: Style, matrix: &KeyMatrix) -> Vec<Vec<String>> {
    matrix
        .rows()
        .iter()
        .map(|row| row.iter().map(|key| display(style, key).to_string()).collect())
        .collect()
}
