//! Comment stripping for source and structured inputs.
//!
//! [`strip_comments`] removes block comments (`/* ... */`, non-greedy, no nesting)
//! first, then every `//` line suffix, and drops lines left blank. Language lists use
//! [`strip_comments_line_first`], where a `/*` inside a line comment opens nothing.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static LINE_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*").unwrap());

/// Remove block and line comments, then drop blank lines.
///
/// Remaining lines keep their original content (including indentation) and order.
pub fn strip_comments(text: &str) -> String {
    // Removing one block can splice a new `/* ... */` pair together, so repeat
    // until nothing changes.
    let mut text = text.to_string();
    loop {
        let next = BLOCK_COMMENT_REGEX.replace_all(&text, "").into_owned();
        if next == text {
            break;
        }
        text = next;
    }

    text.lines()
        .map(|line| LINE_COMMENT_REGEX.replace(line, ""))
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove `//` line suffixes, then block comments. Blank lines are kept.
pub fn strip_comments_line_first(text: &str) -> String {
    let text = text
        .lines()
        .map(|line| LINE_COMMENT_REGEX.replace(line, ""))
        .collect::<Vec<_>>()
        .join("\n");
    BLOCK_COMMENT_REGEX.replace_all(&text, "").into_owned()
}
