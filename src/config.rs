//! Completion settings
//!
//! Hosts may hand the engine a small TOML document to change which
//! language it serves and which characters open and close a tag.
//!
//! Example:
//! ```text
//! # bbcode-complete configuration
//! language-id = "bbcode"
//! trigger = "["
//! closer = "]"
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use std::fs;
use std::path::Path;

use toml::{Table, Value};

use crate::error::{CompleteError, Result};

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Document language the provider is registered for
    pub language_id: String,
    /// Tag-opening character; typing it triggers completion
    pub trigger: char,
    /// Tag-closing character
    pub closer: char,
    // Neither delimiter may be `\`, `$` or `}`; `parse` enforces this.
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language_id: "bbcode".to_string(),
            trigger: '[',
            closer: ']',
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML text, starting from the defaults
    pub fn parse(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, settings: &Table) -> Result<()> {
        if let Some(value) = settings.get("language-id") {
            let id = string_setting("language-id", value)?;
            if id.trim().is_empty() {
                return Err(invalid("language-id", value));
            }
            self.language_id = id.to_string();
        }

        if let Some(value) = settings.get("trigger") {
            self.trigger = char_setting("trigger", value)?;
        }

        if let Some(value) = settings.get("closer") {
            self.closer = char_setting("closer", value)?;
        }

        if self.trigger == self.closer {
            return Err(CompleteError::InvalidSetting {
                key: "closer".to_string(),
                value: format!("same as trigger '{}'", self.trigger),
            });
        }

        Ok(())
    }
}

fn invalid(key: &str, value: &Value) -> CompleteError {
    CompleteError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn string_setting<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| invalid(key, value))
}

/// Characters with a meaning in snippet syntax; a delimiter made of one
/// would corrupt the tab stops around it.
const SNIPPET_SYNTAX: [char; 3] = ['\\', '$', '}'];

/// A setting that must be exactly one character, and not snippet syntax
fn char_setting(key: &str, value: &Value) -> Result<char> {
    let s = string_setting(key, value)?;
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if !SNIPPET_SYNTAX.contains(&ch) => Ok(ch),
        _ => Err(invalid(key, value)),
    }
}
