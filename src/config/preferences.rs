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

//! Terminal preferences built from `termux.properties`
//!
//! # Reload semantics
//!
//! - A reload builds a complete new `TerminalPreferences` value; the old one is
//!   never patched in place
//! - Each section is parsed on its own, so a broken `extra-keys` does not
//!   stop shortcuts from loading
//! - When `extra-keys` fails, the previous matrix is kept and the failure is
//!   reported once in the `ReloadReport`
//! - Shortcuts are rebuilt from scratch every time
//!
//! `PreferencesHandle` serialises reloads and publishes each new snapshot
//! with a single pointer swap, so readers only ever see whole snapshots.

use serde::Serialize;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tracing::{debug, warn};

use crate::config::{source, ConfigError, Properties};
use crate::core::{
    display::display,
    matrix::parse_extra_keys,
    shortcut::parse_shortcuts,
    types::{KeyMatrix, Shortcut, ShortcutAction, Style},
};

pub const EXTRA_KEYS_KEY: &str = "extra-keys";
pub const EXTRA_KEYS_STYLE_KEY: &str = "extra-keys-style";
pub const BACK_KEY_KEY: &str = "back-key";

/// One consistent set of preferences
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TerminalPreferences {
    /// Rows of the extra-keys bar, aliases already resolved
    pub extra_keys: KeyMatrix,
    /// Glyph style for the extra-keys bar
    pub extra_keys_style: Style,
    /// Ctrl+<key> shortcuts, at most one per action
    pub shortcuts: Vec<Shortcut>,
    /// Whether the back key sends Escape instead of navigating back
    pub back_is_escape: bool,
}

impl Default for TerminalPreferences {
    fn default() -> Self {
        Self {
            extra_keys: KeyMatrix::default_layout(),
            extra_keys_style: Style::Default,
            shortcuts: Vec::new(),
            back_is_escape: false,
        }
    }
}

/// Problems found during a reload
///
/// A reload with errors still produces a usable snapshot; the report lists
/// what fell back to its previous value.
#[derive(Debug, Default)]
pub struct ReloadReport {
    pub errors: Vec<ConfigError>,
}

impl ReloadReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// One human-readable message per failure
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| format!("Error loading properties: {}", e)).collect()
    }
}

impl TerminalPreferences {
    /// Builds preferences from properties, starting from the defaults
    pub fn from_properties(props: &Properties) -> (Self, ReloadReport) {
        Self::default().reload(props)
    }

    /// Builds the next snapshot from `props`
    ///
    /// `self` is the last-known-good snapshot; sections that fail to parse
    /// keep its values.
    pub fn reload(&self, props: &Properties) -> (Self, ReloadReport) {
        let mut report = ReloadReport::default();

        let extra_keys = match parse_extra_keys(props.get(EXTRA_KEYS_KEY)) {
            Ok(matrix) => matrix,
            Err(e) => {
                warn!(error = %e, "keeping previous extra-keys");
                report.errors.push(e.into());
                self.extra_keys.clone()
            }
        };

        let extra_keys_style = props
            .get(EXTRA_KEYS_STYLE_KEY)
            .map(Style::from_name)
            .unwrap_or_default();

        let back_is_escape = props
            .get(BACK_KEY_KEY)
            .is_some_and(|value| value == "escape");

        let shortcuts = parse_shortcuts(|name| props.get(name));

        let next = Self {
            extra_keys,
            extra_keys_style,
            shortcuts,
            back_is_escape,
        };

        debug!(
            rows = next.extra_keys.row_count(),
            style = %next.extra_keys_style,
            shortcuts = next.shortcuts.len(),
            errors = report.errors.len(),
            "reloaded preferences"
        );

        (next, report)
    }

    /// Action bound to Ctrl+`code_point`, if any
    pub fn shortcut_for(&self, code_point: u32) -> Option<ShortcutAction> {
        self.shortcuts
            .iter()
            .find(|s| s.code_point == code_point)
            .map(|s| s.action)
    }

    /// Button text for `token` in the configured style
    pub fn display<'a>(&self, token: &'a str) -> &'a str {
        display(self.extra_keys_style, token)
    }
}

/// Shared, atomically replaced preferences
///
/// Readers call `snapshot()` and keep the `Arc` for as long as they need a
/// consistent view. Reloads are serialised by an internal gate.
#[derive(Debug, Default)]
pub struct PreferencesHandle {
    current: RwLock<Arc<TerminalPreferences>>,
    reload_gate: Mutex<()>,
}

impl PreferencesHandle {
    pub fn new(initial: TerminalPreferences) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
            reload_gate: Mutex::new(()),
        }
    }

    /// The current snapshot
    pub fn snapshot(&self) -> Arc<TerminalPreferences> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reloads from already-parsed properties and publishes the result
    pub fn reload(&self, props: &Properties) -> ReloadReport {
        let _gate = self.reload_gate.lock().unwrap_or_else(PoisonError::into_inner);

        let (next, report) = self.snapshot().reload(props);
        self.publish(next);

        report
    }

    /// Reads `path` (or the discovered file when `None`) and reloads
    ///
    /// If the file cannot be read at all, nothing is published and the
    /// current snapshot stays active.
    pub fn reload_from_file(&self, path: Option<&Path>) -> ReloadReport {
        let loaded = match path {
            Some(path) => source::load_properties(path),
            None => source::load_default_properties().map(|(_, props)| props),
        };

        match loaded {
            Ok(props) => self.reload(&props),
            Err(e) => {
                warn!(error = %e, "keeping previous preferences");
                ReloadReport { errors: vec![e] }
            }
        }
    }

    fn publish(&self, next: TerminalPreferences) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Arc::new(next);
    }
}
