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

//! src/core/mod.rs
//!
//! Core normalisation logic
//!
//! This module turns loosely typed configuration values into strict types:
//! - Type definitions for key matrices, styles and shortcuts
//! - The glyph catalogue and alias table
//! - The `extra-keys` matrix parser
//! - The shortcut parser
//! - Glyph lookup for display
//!
//! Nothing here touches the file system, so every piece is unit testable
//! on plain strings.

pub mod aliases;
pub mod display;
pub mod glyphs;
pub mod matrix;
pub mod shortcut;
pub mod types;

pub use display::{display, glyph_map, GlyphMap};
pub use matrix::{parse_extra_keys, ExtraKeysError};
pub use shortcut::{parse_shortcut, parse_shortcut_utf16, parse_shortcuts};
pub use types::*;

#[cfg(test)]
mod tests;
