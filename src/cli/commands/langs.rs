use std::{
    fs,
    io::{self, BufRead},
    path::Path,
};

use anyhow::{Context, Result};

use super::super::args::LangsCommand;
use super::{CommandResult, CommandSummary, LangsSummary};
use crate::core::{parse_language_codes, read_until_blank_line};

pub const PASTE_PROMPT: &str =
    "Paste the supported languages list below. Finish with an empty line:";

pub fn langs(cmd: LangsCommand) -> Result<CommandResult> {
    let text = match &cmd.file {
        Some(path) => read_langs_file(path)?,
        None => prompt_languages(io::stdin().lock())?,
    };

    let codes = parse_language_codes(&text);
    let summary = CommandSummary::Langs(LangsSummary { codes });
    Ok(CommandResult::success(summary))
}

pub fn read_langs_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Ask for the language list on stderr and read it from `reader`.
pub fn prompt_languages<R: BufRead>(reader: R) -> Result<String> {
    eprintln!("{}", PASTE_PROMPT);
    read_until_blank_line(reader)
}
