//! trsheet - translation spreadsheet round-trips
//!
//! trsheet is a CLI tool and library for localizing an application's text. It extracts
//! translatable strings from source files (`"Hello".tr`) or JSON key files, builds a
//! spreadsheet whose columns call a translate function for every target language,
//! and turns the translated spreadsheet back into one JSON file per language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: The text and table transforms
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
