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

//! Keyboard shortcut parser
//!
//! Shortcut properties look like `shortcut.next-session = ctrl+n`. Only the
//! Ctrl modifier is supported and the key is a single character, which may
//! be a supplementary-plane character (two UTF-16 code units).
//!
//! A malformed value never fails the caller: the action is left unbound and
//! a warning is logged.

use tracing::warn;

use crate::core::types::{Shortcut, ShortcutAction};

/// Parses one shortcut property
///
/// # Arguments
/// * `name` - Property name, used in diagnostics only
/// * `raw` - Property value, `None` when the property is absent
/// * `action` - Action the shortcut dispatches to
///
/// # Returns
/// The shortcut, or `None` when the value is absent or malformed.
///
/// # Example
/// ```
/// use termux_keys::core::shortcut::parse_shortcut;
/// use termux_keys::core::ShortcutAction;
///
/// let shortcut = parse_shortcut("shortcut.next-session", Some("Ctrl + N"), ShortcutAction::NextSession);
/// assert_eq!(shortcut.map(|s| s.code_point), Some(110));
/// ```
pub fn parse_shortcut(name: &str, raw: Option<&str>, action: ShortcutAction) -> Option<Shortcut> {
    let raw = raw?;

    let lowered = raw.to_lowercase();
    let parts: Vec<&str> = lowered.trim().split('+').collect();

    let input: Vec<u16> = match parts.as_slice() {
        [modifier, input] if modifier.trim() == "ctrl" => input.trim().encode_utf16().collect(),
        _ => {
            reject(name, raw);
            return None;
        }
    };

    parse_shortcut_utf16(name, &input, action)
}

/// Builds a shortcut from the key part of a `ctrl+<key>` value
///
/// `input` is the key as UTF-16 code units, modifier already stripped. It
/// must be one unit, or two when the first is a high surrogate. Malformed
/// input is logged and yields `None`.
///
/// # Example
/// ```
/// use termux_keys::core::shortcut::parse_shortcut_utf16;
/// use termux_keys::core::ShortcutAction;
///
/// let smiley = [0xD83D, 0xDE00];
/// let shortcut = parse_shortcut_utf16("shortcut.create-session", &smiley, ShortcutAction::CreateSession);
/// assert_eq!(shortcut.map(|s| s.code_point), Some(0x1F600));
///
/// let reversed = [0xDE00, 0xD83D];
/// assert!(parse_shortcut_utf16("shortcut.create-session", &reversed, ShortcutAction::CreateSession).is_none());
/// ```
pub fn parse_shortcut_utf16(name: &str, input: &[u16], action: ShortcutAction) -> Option<Shortcut> {
    let decoded = match input.len() {
        1 | 2 => decode_leading_code_point(input),
        _ => None,
    };

    match decoded {
        Some(code_point) => Some(Shortcut::new(code_point, action)),
        None => {
            warn!(
                property = name,
                units = ?input,
                "keyboard shortcut '{}' has no valid key after ctrl+",
                name
            );
            None
        }
    }
}

/// Decodes the code point at the start of a one or two unit UTF-16 input
///
/// - A high surrogate must be followed by a low surrogate; the pair is
///   combined into one scalar value.
/// - A leading low surrogate is malformed.
/// - Any other unit is the code point; a second unit is ignored.
pub fn decode_leading_code_point(units: &[u16]) -> Option<u32> {
    let &first = units.first()?;

    if is_high_surrogate(first) {
        let &second = units.get(1)?;
        if !is_low_surrogate(second) {
            return None;
        }
        return char::decode_utf16([first, second])
            .next()
            .and_then(Result::ok)
            .map(u32::from);
    }

    if is_low_surrogate(first) {
        return None;
    }

    Some(u32::from(first))
}

/// Rebuilds every shortcut from scratch
///
/// `lookup` returns the value of a property by name. Actions whose property
/// is absent or malformed are simply left out.
pub fn parse_shortcuts<'a, F>(lookup: F) -> Vec<Shortcut>
where
    F: Fn(&str) -> Option<&'a str>,
{
    ShortcutAction::PROPERTIES
        .iter()
        .filter_map(|&(name, action)| parse_shortcut(name, lookup(name), action))
        .collect()
}

fn reject(name: &str, raw: &str) {
    warn!(property = name, value = raw, "keyboard shortcut '{}' is not Ctrl+<something>", name);
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}
