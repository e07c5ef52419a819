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

//! Glyph catalogue for extra-keys display
//!
//! Named sets of identifier → glyph substitutions, and the component list
//! each `Style` is built from. The sets are plain constant tables; unions
//! are computed by `core::display`.

use crate::core::types::Style;

/// A named set of identifier → glyph substitutions
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GlyphSet {
    /// ← → ↑ ↓
    ClassicArrows,
    /// ENTER, TAB, BKSP, DEL, KEYBOARD
    WellKnownChars,
    /// HOME, END, PGUP, PGDN
    LesserKnownChars,
    /// ◀ ▶ ▲ ▼, an alternative to the classic arrows
    ArrowTriangles,
    /// CTRL, ALT, ESC as their ISO 9995 symbols
    IsoControlSymbols,
    /// Cosmetic substitutions ("-" → "―")
    Cosmetic,
}

const CLASSIC_ARROWS: &[(&str, &str)] = &[
    ("LEFT", "←"),  // U+2190 LEFTWARDS ARROW
    ("RIGHT", "→"), // U+2192 RIGHTWARDS ARROW
    ("UP", "↑"),    // U+2191 UPWARDS ARROW
    ("DOWN", "↓"),  // U+2193 DOWNWARDS ARROW
];

const WELL_KNOWN_CHARS: &[(&str, &str)] = &[
    ("ENTER", "↲"),    // U+21B2 DOWNWARDS ARROW WITH TIP LEFTWARDS
    ("TAB", "↹"),      // U+21B9 LEFTWARDS ARROW TO BAR OVER RIGHTWARDS ARROW TO BAR
    ("BKSP", "⌫"),     // U+232B ERASE TO THE LEFT
    ("DEL", "⌦"),      // U+2326 ERASE TO THE RIGHT
    ("KEYBOARD", "⌨"), // U+2328 KEYBOARD
];

// No ISO glyph exists for page up/down, double arrows stand in.
const LESSER_KNOWN_CHARS: &[(&str, &str)] = &[
    ("HOME", "⇱"), // U+21F1 NORTH WEST ARROW TO CORNER
    ("END", "⇲"),  // U+21F2 SOUTH EAST ARROW TO CORNER
    ("PGUP", "⇑"), // U+21D1 UPWARDS DOUBLE ARROW
    ("PGDN", "⇓"), // U+21D3 DOWNWARDS DOUBLE ARROW
];

const ARROW_TRIANGLES: &[(&str, &str)] = &[
    ("LEFT", "◀"),  // U+25C0 BLACK LEFT-POINTING TRIANGLE
    ("RIGHT", "▶"), // U+25B6 BLACK RIGHT-POINTING TRIANGLE
    ("UP", "▲"),    // U+25B2 BLACK UP-POINTING TRIANGLE
    ("DOWN", "▼"),  // U+25BC BLACK DOWN-POINTING TRIANGLE
];

const ISO_CONTROL_SYMBOLS: &[(&str, &str)] = &[
    ("CTRL", "⎈"), // U+2388 HELM SYMBOL
    ("ALT", "⎇"),  // U+2387 ALTERNATIVE KEY SYMBOL
    ("ESC", "⎋"),  // U+238B BROKEN CIRCLE WITH NORTHWEST ARROW
];

const COSMETIC: &[(&str, &str)] = &[
    ("-", "―"), // U+2015 HORIZONTAL BAR
];

impl GlyphSet {
    pub fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            GlyphSet::ClassicArrows => CLASSIC_ARROWS,
            GlyphSet::WellKnownChars => WELL_KNOWN_CHARS,
            GlyphSet::LesserKnownChars => LESSER_KNOWN_CHARS,
            GlyphSet::ArrowTriangles => ARROW_TRIANGLES,
            GlyphSet::IsoControlSymbols => ISO_CONTROL_SYMBOLS,
            GlyphSet::Cosmetic => COSMETIC,
        }
    }
}

/// Component sets of a style, in union order
///
/// Later sets override earlier ones when they share an identifier.
pub fn style_components(style: Style) -> &'static [GlyphSet] {
    use GlyphSet::*;

    match style {
        Style::Default => &[ClassicArrows, WellKnownChars, Cosmetic],
        Style::ArrowsOnly => &[ClassicArrows, Cosmetic],
        Style::ArrowsAll => &[ClassicArrows, WellKnownChars, LesserKnownChars, Cosmetic],
        Style::All => &[
            ClassicArrows,
            WellKnownChars,
            LesserKnownChars,
            Cosmetic,
            IsoControlSymbols,
        ],
        Style::None => &[],
    }
}
