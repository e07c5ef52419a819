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

//! Locating and reading `termux.properties`
//!
//! Two locations are searched, first match wins:
//! 1. `~/.termux/termux.properties`
//! 2. `~/.config/termux/termux.properties`
//!
//! A missing file is not an error: every setting keeps its default.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{ConfigError, Properties};

/// Candidate paths relative to a home directory, in search order
pub fn candidate_paths(home: &Path) -> [PathBuf; 2] {
    [
        home.join(".termux").join("termux.properties"),
        home.join(".config").join("termux").join("termux.properties"),
    ]
}

/// Finds the properties file under `home`
///
/// Falls back to the second location when the first does not exist, and
/// returns `None` when neither is a regular file.
pub fn find_properties_file(home: &Path) -> Option<PathBuf> {
    let [primary, fallback] = candidate_paths(home);
    let path = if primary.exists() { primary } else { fallback };

    path.is_file().then_some(path)
}

/// Home directory of the current user, via tilde expansion
pub fn home_dir() -> PathBuf {
    PathBuf::from(shellexpand::tilde("~").as_ref())
}

/// Reads and parses a properties file
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist, `ConfigError::Io`
/// if it cannot be read, and a syntax error if an escape is malformed.
pub fn load_properties(path: &Path) -> Result<Properties, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let props = Properties::parse(&content)?;

    debug!(path = %path.display(), entries = props.len(), "loaded properties");

    Ok(props)
}

/// Loads the discovered properties file, or empty properties if there is none
pub fn load_default_properties() -> Result<(Option<PathBuf>, Properties), ConfigError> {
    match find_properties_file(&home_dir()) {
        Some(path) => {
            let props = load_properties(&path)?;
            Ok((Some(path), props))
        }
        None => {
            debug!("no termux.properties found, using defaults");
            Ok((None, Properties::new()))
        }
    }
}
