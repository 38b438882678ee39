//! Localized message lookup.
//!
//! Messages are patterns with `{0}`, `{1}`, ... placeholders, keyed the same
//! way as the doclet resource bundles. The built-in English table can be
//! overridden from Java-style `.properties` text.

use std::collections::HashMap;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use crate::constants::{MSG_READ_FILE, MSG_READ_RESOURCE};

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    (MSG_READ_FILE, "Error reading file: {0}\n\t({1})"),
    (MSG_READ_RESOURCE, "Error reading system resource: {0}\n\t({1})"),
];

/// Table of message patterns.
#[derive(Debug, Clone)]
pub struct Resources {
    messages: HashMap<String, String>,
}

impl Default for Resources {
    fn default() -> Self {
        Self::new()
    }
}

impl Resources {
    /// Creates a table holding the built-in messages.
    pub fn new() -> Self {
        Resources {
            messages: DEFAULT_MESSAGES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Creates a table from `.properties` text layered over the built-in
    /// messages.
    pub fn from_properties(content: &str) -> Self {
        let mut resources = Self::new();
        resources.messages.extend(parse_properties(content));
        resources
    }

    /// Reads a `.properties` file layered over the built-in messages.
    pub fn load<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_properties(&content))
    }

    /// Returns the raw pattern for `key`.
    pub fn pattern(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Formats the message for `key`, replacing `{N}` with `args[N]`.
    ///
    /// An unknown key formats as the key itself.
    pub fn text(&self, key: &str, args: &[&dyn Display]) -> String {
        match self.messages.get(key) {
            Some(pattern) => format_pattern(pattern, args),
            None => {
                tracing::warn!(key, "missing message resource");
                key.to_string()
            }
        }
    }
}

/// Substitutes `{N}` placeholders. Placeholders without a matching
/// argument are left untouched.
fn format_pattern(pattern: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            after[..close]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index))
                .map(|arg| (close, arg))
        });
        match arg {
            Some((close, arg)) => {
                out.push_str(&arg.to_string());
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parses `.properties` content into key-value pairs.
fn parse_properties(content: &str) -> HashMap<String, String> {
    let mut props = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        // Skip comments and empty lines
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim().to_string();
            let value = unescape_property(line[eq_pos + 1..].trim_start());
            props.insert(key, value);
        }
    }
    props
}

fn unescape_property(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}
