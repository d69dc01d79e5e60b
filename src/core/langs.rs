//! Language code detection from free-form text.
//!
//! The input is usually a pasted code snippet listing supported locales, such as
//! `supportedLocales: [Locale('en'), Locale('fr-CA')]`. Detection is deliberately
//! permissive: ordinary two or three letter words come through as well, so the
//! result is shown to the user before it is used.

use std::{collections::BTreeSet, io::BufRead, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

use super::comments::strip_comments_line_first;

/// The untranslated source column.
pub const SOURCE_LANGUAGE: &str = "en";

// Locale('fr-CA')
static LOCALE_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Locale\('([a-zA-Z\-]+)'\)").unwrap());

// "fr-CA"
static QUOTED_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([a-zA-Z\-]+)""#).unwrap());

// fr, fil, pt-BR, zh-Hant
static BARE_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([a-zA-Z]{2,3}(?:-[A-Za-z0-9]+)?)\b").unwrap());

/// Detect language codes in `text`.
///
/// Line comments are removed before block comments. Returns the sorted,
/// deduplicated union of three passes (locale constructor calls, quoted tokens,
/// bare 2-3 letter words), keeping tokens of length >= 2.
pub fn parse_language_codes(text: &str) -> Vec<String> {
    let text = strip_comments_line_first(text);

    let mut codes = BTreeSet::new();
    for regex in [&*LOCALE_CALL_REGEX, &*QUOTED_CODE_REGEX, &*BARE_CODE_REGEX] {
        codes.extend(
            regex
                .captures_iter(&text)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_string()),
        );
    }

    codes.into_iter().filter(|c| c.chars().count() >= 2).collect()
}

/// Collect lines until the first blank line or end of input.
///
/// Each line is trimmed; the result is joined with `\n`.
pub fn read_until_blank_line<R: BufRead>(reader: R) -> Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read language codes")?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        lines.push(line.to_string());
    }
    Ok(lines.join("\n"))
}

/// Target languages for translation columns: the source language and repeats
/// are dropped, first occurrence order is kept.
pub fn translation_targets(codes: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    codes
        .iter()
        .filter(|code| code.as_str() != SOURCE_LANGUAGE)
        .filter(|code| seen.insert(code.as_str()))
        .cloned()
        .collect()
}
