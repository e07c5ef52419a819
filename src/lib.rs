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

//! Termux Keys
//!
//! Loads the extra-keys row and keyboard shortcuts of a terminal emulator
//! from a hand-written `termux.properties` file, and turns them into strict,
//! validated values.
//!
//! # Features
//!
//! - **Flexible layouts:** `extra-keys` accepts a single row or a list of rows
//! - **Clear errors:** Ambiguous or unimplemented shapes fail with a named error
//! - **Aliases:** "ESCAPE", "PAGE_UP" and friends map to canonical key names
//! - **Glyph styles:** Keys display as ← ↹ ⎈ and so on, per selected style
//! - **Shortcuts:** `ctrl+<key>` bindings, supplementary-plane keys included
//! - **Atomic reloads:** A failed reload leaves the last good layout in place
//!
//! # Architecture
//!
//! - **`core`:** Pure normalisation (types, glyphs, aliases, parsers, display)
//! - **`config`:** Properties files, discovery, reload snapshots, file watching
//! - **`logging`:** tracing subscriber setup
//!
//! # Examples
//!
//! ## Parsing an extra-keys layout
//!
//! ```
//! use termux_keys::core::{display, parse_extra_keys, Style};
//!
//! let matrix = parse_extra_keys(Some(r#"[["ESCAPE", "UP"], ["LEFT", "DOWN", "RIGHT"]]"#))?;
//! assert_eq!(matrix.rows()[0][0], "ESC");
//! assert_eq!(display(Style::Default, &matrix.rows()[1][0]), "←");
//! # Ok::<(), termux_keys::core::ExtraKeysError>(())
//! ```
//!
//! ## Reloading preferences
//!
//! ```no_run
//! use termux_keys::config::PreferencesHandle;
//!
//! let handle = PreferencesHandle::default();
//! let report = handle.reload_from_file(None);
//! if !report.is_ok() {
//!     for message in report.messages() {
//!         eprintln!("{}", message);
//!     }
//! }
//! ```

pub mod config;
pub mod core;
pub mod logging;

// Re-export commonly used types for convenience
pub use core::{KeyMatrix, Shortcut, ShortcutAction, Style};
