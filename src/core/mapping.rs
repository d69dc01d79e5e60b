//! Per-language key/value mappings and the hand-escaped JSON writer.
//!
//! Values coming back from spreadsheet cells often already contain `\n` escape
//! markers. A generic serializer would escape those backslashes again, so entries
//! are formatted by hand: line breaks become `\n`, quotes become `\"`, and nothing
//! else is escaped.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Key to localized text for one language. Declaration order is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageMapping {
    entries: Map<String, Value>,
}

impl LanguageMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.entries
            .insert(key.into(), value.map_or(Value::Null, Value::String));
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text for `key`, with non-string values coerced to text.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(value_to_text)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Load a flat JSON object. Non-object roots are an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            _ => anyhow::bail!("Root of JSON file must be an object: {}", path.display()),
        }
    }

    /// Load `path`, falling back to an empty mapping if it is missing or unreadable.
    pub fn load_or_empty(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// New mapping with every entry of `self`, then the entries of `newer` whose
    /// keys are not present yet.
    pub fn merged_with(&self, newer: &LanguageMapping) -> LanguageMapping {
        let mut entries = self.entries.clone();
        for (key, value) in &newer.entries {
            if !entries.contains_key(key) {
                entries.insert(key.clone(), value.clone());
            }
        }
        LanguageMapping { entries }
    }

    /// Render as a flat object with 2-space indentation, one entry per line.
    pub fn to_clean_json(&self) -> String {
        let mut out = String::from("{\n");
        let last = self.entries.len().saturating_sub(1);
        for (i, (key, value)) in self.entries.iter().enumerate() {
            let comma = if i < last { "," } else { "" };
            out.push_str(&format!(
                "  \"{}\": \"{}\"{}\n",
                clean_text(key),
                clean_text(&value_to_text(value)),
                comma
            ));
        }
        out.push('}');
        out
    }

    /// Write [`Self::to_clean_json`] to `path`.
    pub fn write_clean_json(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_clean_json())
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

impl FromIterator<(String, Option<String>)> for LanguageMapping {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Escape one key or value for the clean writer.
///
/// CRLF becomes LF, every line break becomes `\n`, every `"` becomes `\"`,
/// and surrounding whitespace is trimmed.
pub fn clean_text(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\n', "\\n")
        .replace('"', "\\\"")
        .trim()
        .to_string()
}
