use std::io::{self, BufRead};

use anyhow::Result;

use super::super::args::SheetCommand;
use super::langs::{prompt_languages, read_langs_file};
use super::{CommandResult, CommandSummary, SheetSummary};
use crate::config::Config;
use crate::core::{Session, langs::translation_targets, parse_language_codes, xlsx::write_table};

pub fn sheet(cmd: SheetCommand, config: &Config) -> Result<CommandResult> {
    sheet_with_stdin(cmd, config, io::stdin().lock())
}

/// Run `sheet`, collecting the language list from `stdin` when neither the
/// command line nor the config provides one.
pub fn sheet_with_stdin<R: BufRead>(
    cmd: SheetCommand,
    config: &Config,
    stdin: R,
) -> Result<CommandResult> {
    let session = Session::new().select(
        &cmd.input.input,
        cmd.input.kind.map(Into::into),
        &config.input_patterns,
    )?;

    let text = if let Some(langs) = &cmd.langs {
        langs.clone()
    } else if let Some(path) = &cmd.langs_file {
        read_langs_file(path)?
    } else if !config.languages.is_empty() {
        config.languages_text()
    } else {
        prompt_languages(stdin)?
    };

    let codes = parse_language_codes(&text);
    let targets = translation_targets(&codes);
    let key_count = session.keys()?.len();

    if codes.is_empty() {
        return Ok(CommandResult::failure(CommandSummary::Sheet(SheetSummary {
            codes,
            targets,
            key_count,
            output: None,
        })));
    }

    let table = session.build_table(&codes, &config.translate_function)?;
    write_table(&table, &cmd.output)?;

    Ok(CommandResult::success(CommandSummary::Sheet(SheetSummary {
        codes,
        targets,
        key_count,
        output: Some(cmd.output),
    })))
}
