use anyhow::Result;

use super::super::args::MergeCommand;
use super::{CommandResult, CommandSummary, MergeSummary};
use crate::config::Config;
use crate::core::merge_folders;

pub fn merge(cmd: MergeCommand, config: &Config) -> Result<CommandResult> {
    let merged = merge_folders(
        &cmd.old_dir,
        &cmd.new_dir,
        &cmd.out_dir,
        &config.output_extension,
    )?;

    let nothing_merged = merged.is_empty();
    let summary = CommandSummary::Merge(MergeSummary {
        out_dir: cmd.out_dir,
        merged,
    });

    if nothing_merged {
        Ok(CommandResult::failure(summary))
    } else {
        Ok(CommandResult::success(summary))
    }
}
