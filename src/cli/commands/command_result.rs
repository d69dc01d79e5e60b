use std::path::PathBuf;

use super::super::args::ExtractFormat;
use super::super::exit_status::ExitStatus;
use crate::core::{InputKind, MergedFile};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Langs(LangsSummary),
    Sheet(SheetSummary),
    Materialize(MaterializeSummary),
    Merge(MergeSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub kind: Option<InputKind>,
    pub files: Vec<PathBuf>,
    pub keys: Vec<String>,
    pub format: ExtractFormat,
    /// JSON echo text, for the `json` format.
    pub echo: Option<String>,
    /// File the output was written to; `None` means stdout.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct LangsSummary {
    pub codes: Vec<String>,
}

#[derive(Debug)]
pub struct SheetSummary {
    /// Every detected code, shown for confirmation.
    pub codes: Vec<String>,
    /// Codes that became translation columns.
    pub targets: Vec<String>,
    pub key_count: usize,
    /// `None` when nothing was written.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct MaterializeSummary {
    pub out_dir: PathBuf,
    pub written: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct MergeSummary {
    pub out_dir: PathBuf,
    pub merged: Vec<MergedFile>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running a trsheet command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            status: ExitStatus::Success,
        }
    }

    pub fn failure(summary: CommandSummary) -> Self {
        Self {
            summary,
            status: ExitStatus::Failure,
        }
    }
}
