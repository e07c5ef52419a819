//! Loading terminal preferences from `termux.properties`.
//!
//! This module owns everything that touches the file system. Key features:
//!
//! - **Discovery**: `~/.termux/termux.properties`, then `~/.config/termux/`
//! - **Properties parsing**: Java-style syntax with escapes and continuations
//! - **Atomic reloads**: A new snapshot is built off to the side and swapped in
//! - **Last-known-good**: A broken `extra-keys` keeps the previous layout
//! - **Live reload**: Optional file watching
//!
//! # Example
//!
//! ```no_run
//! use termux_keys::config::PreferencesHandle;
//!
//! let handle = PreferencesHandle::default();
//! let report = handle.reload_from_file(None);
//! for message in report.messages() {
//!     eprintln!("{}", message);
//! }
//!
//! let prefs = handle.snapshot();
//! println!("{} rows of extra keys", prefs.extra_keys.row_count());
//! ```

mod error;
pub mod preferences;
pub mod properties;
pub mod source;
pub mod watcher;

pub use error::ConfigError;
pub use preferences::{PreferencesHandle, ReloadReport, TerminalPreferences};
pub use properties::Properties;
pub use source::{find_properties_file, load_properties};
pub use watcher::FileWatcher;

#[cfg(test)]
mod tests;
