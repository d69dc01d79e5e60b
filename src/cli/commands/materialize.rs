use anyhow::Result;

use super::super::args::MaterializeCommand;
use super::{CommandResult, CommandSummary, MaterializeSummary};
use crate::config::Config;
use crate::core::{materialize, xlsx::read_table};

pub fn materialize_sheet(cmd: MaterializeCommand, config: &Config) -> Result<CommandResult> {
    let table = read_table(&cmd.spreadsheet)?;
    let written = materialize(&table, &cmd.out_dir, &config.output_extension)?;

    Ok(CommandResult::success(CommandSummary::Materialize(
        MaterializeSummary {
            out_dir: cmd.out_dir,
            written,
        },
    )))
}
