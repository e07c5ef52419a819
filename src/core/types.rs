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

//! src/core/types.rs
//!
//! Core type definitions for the extra-keys row and keyboard shortcuts
//!
//! This module defines the fundamental types used throughout the crate:
//! - `Identifier`: A key name ("LEFT", "CTRL") or a literal character ("|")
//! - `KeyMatrix`: Rows of identifiers shown above the soft keyboard
//! - `Style`: Which glyph substitutions are active when displaying keys
//! - `Shortcut`: A Ctrl+<code point> binding to a session action
//!
//! All types implement serialisation so snapshots can be dumped for debugging.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A key token from the `extra-keys` property.
///
/// No enumeration is closed: any string is a legal identifier.
pub type Identifier = String;

/// Ordered rows of identifiers
///
/// Rows may have different lengths; "matrix" means "list of rows",
/// not a fixed-width grid.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct KeyMatrix {
    rows: Vec<Vec<Identifier>>,
}

impl KeyMatrix {
    /// The row used when `extra-keys` is absent
    pub const DEFAULT_ROW: [&'static str; 7] = ["ESC", "CTRL", "ALT", "TAB", "-", "/", "|"];

    pub fn new(rows: Vec<Vec<Identifier>>) -> Self {
        Self { rows }
    }

    /// Single-row matrix holding `ESC CTRL ALT TAB - / |`
    pub fn default_layout() -> Self {
        Self::new(vec![Self::DEFAULT_ROW.iter().map(|k| k.to_string()).collect()])
    }

    pub fn rows(&self) -> &[Vec<Identifier>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Identifier>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Length of the longest row (0 for a matrix without rows)
    ///
    /// Renderers use this as the column count of their button grid.
    pub fn max_row_len(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterates every identifier, row by row, in declared order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

impl From<Vec<Vec<&str>>> for KeyMatrix {
    fn from(rows: Vec<Vec<&str>>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        )
    }
}

impl fmt::Display for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}

/// Glyph style selecting which substitutions are active
///
/// Unknown names fall back to `Default`; `None` displays every key as itself.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Style {
    /// Arrows, well-known keys and cosmetic tweaks
    #[default]
    Default,
    /// Arrows and cosmetic tweaks only
    ArrowsOnly,
    /// Default plus HOME/END/PGUP/PGDN arrows
    ArrowsAll,
    /// Everything, including ISO symbols for CTRL/ALT/ESC
    All,
    /// No substitution at all
    None,
}

impl Style {
    pub const ALL_STYLES: [Style; 5] = [
        Style::Default,
        Style::ArrowsOnly,
        Style::ArrowsAll,
        Style::All,
        Style::None,
    ];

    /// Resolves a configured style name, falling back to `Default`
    ///
    /// Names match exactly; `"all "` is not `"all"`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "arrows-only" => Style::ArrowsOnly,
            "arrows-all" => Style::ArrowsAll,
            "all" => Style::All,
            "none" => Style::None,
            _ => Style::Default,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::ArrowsOnly => "arrows-only",
            Style::ArrowsAll => "arrows-all",
            Style::All => "all",
            Style::None => "none",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Session action a shortcut dispatches to
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ShortcutAction {
    CreateSession,
    NextSession,
    PreviousSession,
    RenameSession,
}

impl ShortcutAction {
    /// Every action paired with the property that configures it
    pub const PROPERTIES: [(&'static str, ShortcutAction); 4] = [
        ("shortcut.create-session", ShortcutAction::CreateSession),
        ("shortcut.next-session", ShortcutAction::NextSession),
        ("shortcut.previous-session", ShortcutAction::PreviousSession),
        ("shortcut.rename-session", ShortcutAction::RenameSession),
    ];

    pub fn property_name(self) -> &'static str {
        match self {
            ShortcutAction::CreateSession => "shortcut.create-session",
            ShortcutAction::NextSession => "shortcut.next-session",
            ShortcutAction::PreviousSession => "shortcut.previous-session",
            ShortcutAction::RenameSession => "shortcut.rename-session",
        }
    }
}

impl fmt::Display for ShortcutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShortcutAction::CreateSession => write!(f, "create session"),
            ShortcutAction::NextSession => write!(f, "next session"),
            ShortcutAction::PreviousSession => write!(f, "previous session"),
            ShortcutAction::RenameSession => write!(f, "rename session"),
        }
    }
}

/// A Ctrl+<key> binding
///
/// `code_point` is always a Unicode scalar value.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Shortcut {
    pub code_point: u32,
    pub action: ShortcutAction,
}

impl Shortcut {
    pub fn new(code_point: u32, action: ShortcutAction) -> Self {
        Self { code_point, action }
    }

    pub fn key_char(&self) -> Option<char> {
        char::from_u32(self.code_point)
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key_char() {
            Some(c) => write!(f, "Ctrl+{} → {}", c, self.action),
            None => write!(f, "Ctrl+U+{:04X} → {}", self.code_point, self.action),
        }
    }
}
