//! Markdown constant table.
//!
//! Maps symbolic names to the literal strings used when formatting text for the
//! gateway. The orchestrator passes the table through to the command router
//! untouched and only reads the bold and inline-code markers for its welcome
//! broadcast.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const LINE_END: &str = "lineEnd";
pub const BLOCK_START: &str = "blockStart";
pub const BLOCK_END: &str = "blockEnd";
pub const BOLD: &str = "bold";
pub const ITALIC: &str = "italic";
pub const UNDERLINE: &str = "underline";
pub const STRIKE: &str = "strike";
pub const CODE_LINE: &str = "codeLine";
pub const QUOTE: &str = "quote";

/// Named markdown markers, serialized as a flat JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkdownSettings(BTreeMap<String, String>);

impl Default for MarkdownSettings {
    fn default() -> Self {
        let table = [
            (LINE_END, "\n"),
            (BLOCK_START, "```"),
            (BLOCK_END, "```"),
            (BOLD, "**"),
            (ITALIC, "*"),
            (UNDERLINE, "__"),
            (STRIKE, "~~"),
            (CODE_LINE, "`"),
            (QUOTE, "> "),
        ];

        Self(
            table
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }
}

impl MarkdownSettings {
    /// Parses a JSON object of overrides and layers it over the built-in table.
    ///
    /// # Arguments
    /// - `json` - Flat JSON object such as `{"bold": "__"}`
    ///
    /// # Returns
    /// - `Ok(MarkdownSettings)` - Defaults with the given keys replaced or added
    /// - `Err(serde_json::Error)` - Input is not an object of strings
    pub fn from_json_overrides(json: &str) -> Result<Self, serde_json::Error> {
        let overrides: MarkdownSettings = serde_json::from_str(json)?;

        Ok(Self::default().merge(overrides))
    }

    /// Returns `self` with every entry of `overrides` written over it.
    pub fn merge(mut self, overrides: MarkdownSettings) -> Self {
        self.0.extend(overrides.0);
        self
    }

    /// Literal string for `name`, or an empty string when the table has no such entry.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    /// Wraps `text` in the marker named `name` on both sides.
    pub fn wrap(&self, name: &str, text: &str) -> String {
        let marker = self.get(name);
        format!("{marker}{text}{marker}")
    }
}
