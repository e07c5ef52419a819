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

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::{
    source::{candidate_paths, find_properties_file, load_properties},
    ConfigError,
};

/// Helper: Writes a properties file below a fake home directory.
fn write_props(home: &Path, relative: &[&str], content: &str) -> PathBuf {
    let mut path = home.to_path_buf();
    for part in relative {
        path.push(part);
    }
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_primary_location_wins() {
    let home = TempDir::new().unwrap();
    let primary = write_props(home.path(), &[".termux", "termux.properties"], "a = 1\n");
    write_props(home.path(), &[".config", "termux", "termux.properties"], "a = 2\n");

    assert_eq!(find_properties_file(home.path()), Some(primary));
}

#[test]
fn test_fallback_location() {
    let home = TempDir::new().unwrap();
    let fallback = write_props(
        home.path(),
        &[".config", "termux", "termux.properties"],
        "a = 2\n",
    );

    assert_eq!(find_properties_file(home.path()), Some(fallback));
}

#[test]
fn test_no_properties_file() {
    let home = TempDir::new().unwrap();
    assert_eq!(find_properties_file(home.path()), None);
}

#[test]
fn test_directory_is_not_a_file() {
    let home = TempDir::new().unwrap();
    let [primary, _] = candidate_paths(home.path());
    fs::create_dir_all(&primary).unwrap();

    // Primary exists, so no fallback; it is a directory, so nothing is found
    assert_eq!(find_properties_file(home.path()), None);
}

#[test]
fn test_load_properties() {
    let home = TempDir::new().unwrap();
    let path = write_props(
        home.path(),
        &[".termux", "termux.properties"],
        "extra-keys = [\"ESC\"]\nshortcut.next-session = ctrl+2\n",
    );

    let props = load_properties(&path).unwrap();
    assert_eq!(props.get("extra-keys"), Some("[\"ESC\"]"));
    assert_eq!(props.get("shortcut.next-session"), Some("ctrl+2"));
}

#[test]
fn test_load_missing_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("missing.properties");

    match load_properties(&path).unwrap_err() {
        ConfigError::NotFound(p) => assert_eq!(p, path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}
