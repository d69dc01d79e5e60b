use std::fs;

use anyhow::{Context, Result};

use super::super::args::{ExtractCommand, ExtractFormat};
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::config::Config;
use crate::core::Session;

pub fn extract(cmd: ExtractCommand, config: &Config) -> Result<CommandResult> {
    let session = Session::new().select(
        &cmd.input.input,
        cmd.input.kind.map(Into::into),
        &config.input_patterns,
    )?;
    let Some(input) = session.input() else {
        anyhow::bail!("No input selected");
    };

    let echo = match cmd.format {
        ExtractFormat::List => None,
        ExtractFormat::Json => Some(session.json_echo()?),
    };

    if let Some(output) = &cmd.output {
        let content = match &echo {
            Some(echo) => echo.clone(),
            None => input.keys.join("\n") + "\n",
        };
        fs::write(output, content)
            .with_context(|| format!("Failed to write file: {}", output.display()))?;
    }

    Ok(CommandResult::success(CommandSummary::Extract(
        ExtractSummary {
            kind: input.kind,
            files: input.files.clone(),
            keys: input.keys.clone(),
            format: cmd.format,
            echo,
            output: cmd.output,
        },
    )))
}
