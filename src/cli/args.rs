//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Print the translatable keys of a file, or emit them as a JSON echo
//! - `langs`: Detect language codes in pasted text
//! - `sheet`: Build a translation spreadsheet
//! - `materialize`: Turn a translated spreadsheet into per-language JSON files
//! - `merge`: Merge two folders of per-language JSON files
//! - `init`: Initialize trsheet configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::core::InputKind;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Input kind override; detected from content when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Source text with `"literal".tr` markers
    Source,
    /// JSON object whose top-level keys are the strings
    Json,
}

impl From<KindArg> for InputKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Source => InputKind::source_text(),
            KindArg::Json => InputKind::structured_object(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExtractFormat {
    /// One key per line
    #[default]
    List,
    /// `{ "key": "key" }` object
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Input file, or a directory scanned with the configured input patterns
    pub input: PathBuf,

    /// Input kind (default: detected from content)
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, value_enum, default_value_t)]
    pub format: ExtractFormat,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct LangsCommand {
    /// Read the language list from a file (default: stdin until an empty line)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SheetCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Spreadsheet to write
    #[arg(short, long)]
    pub output: PathBuf,

    /// Language list text, e.g. "fr, de, pt-BR" or a pasted `supportedLocales` snippet
    #[arg(long, conflicts_with = "langs_file")]
    pub langs: Option<String>,

    /// Read the language list from a file
    #[arg(long)]
    pub langs_file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct MaterializeCommand {
    /// Translated spreadsheet (formulas already evaluated)
    pub spreadsheet: PathBuf,

    /// Output directory for per-language files
    pub out_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// Folder with the existing translations (its values win)
    pub old_dir: PathBuf,

    /// Folder with the newly generated translations
    pub new_dir: PathBuf,

    /// Output folder
    pub out_dir: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings from a source or JSON file
    Extract(ExtractCommand),
    /// Detect language codes in a pasted list
    Langs(LangsCommand),
    /// Generate a translation spreadsheet with translate formulas
    Sheet(SheetCommand),
    /// Convert a translated spreadsheet into per-language JSON files
    Materialize(MaterializeCommand),
    /// Merge two folders of per-language JSON files (old values win)
    Merge(MergeCommand),
    /// Initialize a new .trsheetrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
