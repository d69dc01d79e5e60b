//! Translatable key extraction.
//!
//! Two input kinds are supported:
//!
//! - [`SourceText`]: string literals followed by the `.tr` marker, e.g. `"Hello".tr`
//! - [`StructuredObject`]: the top-level keys of a JSON object
//!
//! Both strip comments before doing anything else.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result, bail};
use enum_dispatch::enum_dispatch;
use glob::Pattern;
use regex::Regex;
use serde_json::{Map, Value};
use walkdir::WalkDir;

use super::comments::strip_comments;

/// A double-quoted literal without `"` or `$` inside, followed by `.tr`.
static TR_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"$]+)"\.tr"#).unwrap());

/// Canonicalize newline markers: `\n` escapes become line breaks, then every
/// line break becomes the two-character `\n` escape.
///
/// ```
/// use trsheet::core::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\\nb"), "a\\nb");
/// assert_eq!(normalize_newlines("a\nb"), "a\\nb");
/// ```
pub fn normalize_newlines(s: &str) -> String {
    s.replace("\\n", "\n").replace('\n', "\\n")
}

/// Produces the ordered key sequence of one input.
#[enum_dispatch]
pub trait KeyExtractor {
    fn extract(&self, text: &str) -> Result<Vec<String>>;
}

/// Source files using the `"literal".tr` convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceText;

impl KeyExtractor for SourceText {
    /// Every match in order of occurrence; duplicates are kept.
    fn extract(&self, text: &str) -> Result<Vec<String>> {
        let stripped = strip_comments(text);
        Ok(TR_LITERAL_REGEX
            .captures_iter(&stripped)
            .filter_map(|caps| caps.get(1))
            .map(|m| normalize_newlines(m.as_str()))
            .collect())
    }
}

/// JSON objects whose top-level keys are the translatable strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuredObject;

impl KeyExtractor for StructuredObject {
    fn extract(&self, text: &str) -> Result<Vec<String>> {
        let stripped = strip_comments(text);
        let value: Value =
            serde_json::from_str(&stripped).context("Failed to parse structured input")?;
        match value {
            Value::Object(map) => Ok(map.into_iter().map(|(key, _)| key).collect()),
            _ => bail!("Failed to parse structured input: root must be an object"),
        }
    }
}

/// Kind of an input file, chosen by the caller or by [`InputKind::detect`].
#[enum_dispatch(KeyExtractor)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    SourceText(SourceText),
    StructuredObject(StructuredObject),
}

impl InputKind {
    pub fn source_text() -> Self {
        Self::SourceText(SourceText)
    }

    pub fn structured_object() -> Self {
        Self::StructuredObject(StructuredObject)
    }

    /// Inspect the content: anything that starts with `{` once comments are gone
    /// is treated as a structured object.
    pub fn detect(text: &str) -> Self {
        if strip_comments(text).trim_start().starts_with('{') {
            Self::structured_object()
        } else {
            Self::source_text()
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceText(_) => "source",
            Self::StructuredObject(_) => "json",
        }
    }
}

/// Read a file and extract its keys, detecting the kind when `kind` is `None`.
pub fn extract_file(path: &Path, kind: Option<InputKind>) -> Result<(InputKind, Vec<String>)> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let kind = kind.unwrap_or_else(|| InputKind::detect(&content));
    let keys = kind
        .extract(&content)
        .with_context(|| format!("Failed to extract keys from: {}", path.display()))?;
    Ok((kind, keys))
}

/// Files beneath `root` matching any of `patterns`, in sorted path order.
pub fn collect_input_files(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let patterns = patterns
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid glob pattern: \"{}\"", p)))
        .collect::<Result<Vec<_>>>()?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to scan directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if patterns.iter().any(|p| p.matches_path(relative)) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Render the `{key: key}` echo of a key sequence.
///
/// Keys are canonical, so a `\n` marker inside a key is emitted as a JSON newline
/// escape rather than an escaped backslash.
pub fn json_echo(keys: &[String]) -> Result<String> {
    let mut map = Map::new();
    for key in keys {
        map.insert(key.clone(), Value::String(key.clone()));
    }
    let raw = serde_json::to_string_pretty(&Value::Object(map))
        .context("Failed to serialize JSON")?;
    Ok(raw.replace("\\\\n", "\\n"))
}
