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

//! File system watcher for live properties reloading
//!
//! Uses OS-level file watching (Linux inotify) via the notify crate.
//! The parent directory is watched rather than the file itself, because
//! editors often save by writing a new file and renaming it into place.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver},
};
use tracing::trace;

use crate::config::ConfigError;

/// Watches `termux.properties` for modifications
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    path: PathBuf,
}

impl FileWatcher {
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        Ok(FileWatcher {
            _watcher: watcher,
            rx,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks for file modification events (non-blocking)
    ///
    /// Drains every pending event and returns true if any of them created or
    /// modified the watched file.
    pub fn check_for_changes(&self) -> bool {
        let mut changed = false;

        while let Ok(event_result) = self.rx.try_recv() {
            if let Ok(event) = event_result {
                trace!(kind = ?event.kind, paths = ?event.paths, "watch event");
                if is_change_to(&event, &self.path) {
                    changed = true;
                }
            }
        }

        changed
    }
}

/// True if `event` created or modified a file named like `path`
fn is_change_to(event: &Event, path: &Path) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event.paths.iter().any(|p| p.file_name() == path.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_event_filtering() {
        let path = PathBuf::from("/home/user/.termux/termux.properties");

        let modified = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(path.clone());
        assert!(is_change_to(&modified, &path));

        let created = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/home/user/.termux/termux.properties"));
        assert!(is_change_to(&created, &path));

        let other_file = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/home/user/.termux/colors.properties"));
        assert!(!is_change_to(&other_file, &path));

        let removed = Event::new(EventKind::Remove(RemoveKind::File)).add_path(path.clone());
        assert!(!is_change_to(&removed, &path));
    }

    #[test]
    fn test_no_changes_after_creation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("termux.properties");
        fs::write(&path, "extra-keys = []\n").unwrap();

        let watcher = FileWatcher::new(path.clone()).unwrap();
        assert_eq!(watcher.path(), path.as_path());
        assert!(!watcher.check_for_changes());
    }
}
