//! Core transforms.
//!
//! - `comments`: comment stripping applied before any pattern matching
//! - `extract`: translatable key extraction from source text or JSON objects
//! - `langs`: language code detection from pasted text
//! - `table` / `synth`: the translation table and its construction
//! - `xlsx`: spreadsheet reading and writing
//! - `mapping`: per-language mappings and the clean JSON writer
//! - `materialize`: spreadsheet to per-language files
//! - `merge`: folder merging
//! - `session`: explicit state between user actions

pub mod comments;
pub mod extract;
pub mod langs;
pub mod mapping;
pub mod materialize;
pub mod merge;
pub mod session;
pub mod synth;
pub mod table;
pub mod xlsx;

pub use comments::strip_comments;
pub use extract::{InputKind, KeyExtractor, json_echo, normalize_newlines};
pub use langs::{SOURCE_LANGUAGE, parse_language_codes, read_until_blank_line};
pub use mapping::LanguageMapping;
pub use materialize::materialize;
pub use merge::{MergedFile, merge_folders};
pub use session::Session;
pub use synth::{DEFAULT_TRANSLATE_FUNCTION, build_table};
pub use table::{Cell, TranslationTable};
