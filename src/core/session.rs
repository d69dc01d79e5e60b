//! Explicit state passed between user actions.
//!
//! A [`Session`] is never mutated by an action: selecting an input produces a new
//! session, and actions only borrow it.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use super::extract::{InputKind, collect_input_files, extract_file, json_echo};
use super::synth::build_table;
use super::table::TranslationTable;

/// An input file or directory and the keys extracted from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedInput {
    pub path: PathBuf,
    /// Kind of every file read; `None` when a directory held no matching files.
    pub kind: Option<InputKind>,
    pub files: Vec<PathBuf>,
    pub keys: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    input: Option<SelectedInput>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `path` and extract its keys.
    ///
    /// A directory is expanded to the files matching `patterns`; their key
    /// sequences are concatenated in path order. With `kind == None` every file's
    /// kind is detected from its content.
    pub fn select(
        &self,
        path: &Path,
        kind: Option<InputKind>,
        patterns: &[String],
    ) -> Result<Self> {
        let files = if path.is_dir() {
            collect_input_files(path, patterns)?
        } else {
            vec![path.to_path_buf()]
        };

        let mut keys = Vec::new();
        let mut detected = None;
        for file in &files {
            let (file_kind, file_keys) = extract_file(file, kind)?;
            detected.get_or_insert(file_kind);
            keys.extend(file_keys);
        }

        Ok(Self {
            input: Some(SelectedInput {
                path: path.to_path_buf(),
                kind: detected,
                files,
                keys,
            }),
        })
    }

    pub fn input(&self) -> Option<&SelectedInput> {
        self.input.as_ref()
    }

    pub fn keys(&self) -> Result<&[String]> {
        match &self.input {
            Some(input) => Ok(&input.keys),
            None => bail!("No input selected"),
        }
    }

    pub fn json_echo(&self) -> Result<String> {
        json_echo(self.keys()?)
    }

    pub fn build_table(&self, codes: &[String], function: &str) -> Result<TranslationTable> {
        Ok(build_table(self.keys()?, codes, function))
    }
}
