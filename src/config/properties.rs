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

//! src/config/properties.rs
//!
//! `termux.properties` file parser
//!
//! The file is a Java-style properties file:
//! - `#` and `!` start comment lines
//! - `key = value`, `key: value` and `key value` are all accepted
//! - A trailing backslash continues the logical line
//! - `\t \n \r \f \\ \uXXXX` escapes are decoded
//!
//! # Architecture
//! Parsing is two-pass:
//! 1. Physical lines are joined into logical lines (comments dropped)
//! 2. Each logical line is split into key and value with nom, then unescaped
//!
//! Values are kept as text; interpreting them is the job of `core`.

use nom::{
    branch::alt,
    bytes::complete::{is_not, take_while},
    character::complete::{anychar, char, one_of},
    combinator::{opt, recognize},
    multi::many0,
    sequence::preceded,
    IResult, Parser,
};
use std::collections::BTreeMap;
use tracing::warn;

use crate::config::ConfigError;

/// Key/value view of a properties file
///
/// Later duplicate keys override earlier ones.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the full text of a properties file
    ///
    /// # Example
    /// ```
    /// use termux_keys::config::Properties;
    ///
    /// let props = Properties::parse("# keys\nextra-keys = [\"ESC\"]\n")?;
    /// assert_eq!(props.get("extra-keys"), Some("[\"ESC\"]"));
    /// # Ok::<(), termux_keys::config::ConfigError>(())
    /// ```
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut props = Self::new();

        for (line_num, line) in logical_lines(content) {
            let (raw_key, raw_value) = parse_entry(&line);
            let key = unescape(raw_key, line_num)?;
            let value = unescape(raw_value, line_num)?;
            props.entries.insert(key, value);
        }

        Ok(props)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Joins continuation lines and drops blanks and comments
///
/// Returns each logical line with the number of its first physical line.
fn logical_lines(content: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut pending: Option<(usize, String)> = None;

    for (index, physical) in content.lines().enumerate() {
        let line_num = index + 1; // Human-readable numbers start at 1
        let trimmed = physical.trim_start_matches(is_blank);

        let (start, mut text) = match pending.take() {
            Some(continued) => continued,
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                (line_num, String::new())
            }
        };

        if ends_with_continuation(trimmed) {
            text.push_str(&trimmed[..trimmed.len() - 1]);
            pending = Some((start, text));
        } else {
            text.push_str(trimmed);
            lines.push((start, text));
        }
    }

    // File ended on a continuation
    if let Some(last) = pending {
        lines.push(last);
    }

    lines
}

/// An odd number of trailing backslashes escapes the line break
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn blank0(input: &str) -> IResult<&str, &str> {
    take_while(is_blank).parse(input)
}

/// Raw key text up to the first unescaped `=`, `:` or blank
fn raw_key(input: &str) -> IResult<&str, &str> {
    recognize(many0(alt((
        recognize(preceded(char('\\'), anychar)),
        is_not("=: \t\x0c\\"),
    ))))
    .parse(input)
}

fn separator(input: &str) -> IResult<&str, (&str, Option<char>, &str)> {
    (blank0, opt(one_of("=:")), blank0).parse(input)
}

/// Splits a logical line into raw (still escaped) key and value
///
/// Format: KEY [blanks] [= or :] [blanks] VALUE
///
/// Every line splits: a line with no separator is a key with an empty value,
/// and a line starting with a separator has an empty key.
pub fn parse_entry(line: &str) -> (&str, &str) {
    match (blank0, raw_key, separator).parse(line) {
        Ok((value, (_, key, _))) => (key, value),
        // unreachable: each combinator above accepts any input
        Err(_) => (line, ""),
    }
}

/// Decodes escapes in a raw key or value
///
/// `\uXXXX` escapes are collected as UTF-16 code units so that an escaped
/// surrogate pair becomes one character. An unpaired surrogate becomes
/// U+FFFD.
pub fn unescape(raw: &str, line: usize) -> Result<String, ConfigError> {
    let mut units: Vec<u16> = Vec::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            push_char(&mut units, c);
            continue;
        }

        match chars.next() {
            Some('t') => push_char(&mut units, '\t'),
            Some('n') => push_char(&mut units, '\n'),
            Some('r') => push_char(&mut units, '\r'),
            Some('f') => push_char(&mut units, '\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                    return Err(ConfigError::InvalidEscape { line });
                }
                let unit = u16::from_str_radix(&hex, 16)
                    .map_err(|_| ConfigError::InvalidEscape { line })?;
                units.push(unit);
            }
            Some(other) => push_char(&mut units, other),
            None => {}
        }
    }

    let mut replaced = false;
    let decoded = char::decode_utf16(units)
        .map(|unit| {
            unit.unwrap_or_else(|_| {
                replaced = true;
                char::REPLACEMENT_CHARACTER
            })
        })
        .collect();

    if replaced {
        warn!(line, "unpaired surrogate escape replaced with U+FFFD");
    }

    Ok(decoded)
}

fn push_char(units: &mut Vec<u16>, c: char) {
    let mut buf = [0u16; 2];
    units.extend_from_slice(c.encode_utf16(&mut buf));
}
