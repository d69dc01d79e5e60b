use std::env;

use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{
        extract::extract, init::init, langs::langs, materialize::materialize_sheet,
        merge::merge, sheet::sheet,
    },
};
use crate::config::load_config;
use anyhow::Result;

/// Dispatch a parsed command to its handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and exit status
/// - `Err` if the command fails (parse error, I/O error, malformed spreadsheet)
pub fn run(Arguments { command, .. }: Arguments) -> Result<CommandResult> {
    let Some(command) = command else {
        anyhow::bail!("No command provided. Use --help to see available commands.")
    };

    if matches!(command, Command::Init) {
        return init();
    }

    let config = load_config(&env::current_dir()?)?.config;

    match command {
        Command::Extract(cmd) => extract(cmd, &config),
        Command::Langs(cmd) => langs(cmd),
        Command::Sheet(cmd) => sheet(cmd, &config),
        Command::Materialize(cmd) => materialize_sheet(cmd, &config),
        Command::Merge(cmd) => merge(cmd, &config),
        Command::Init => init(),
        Command::Serve => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
    }
}
