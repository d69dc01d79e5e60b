//! Key-wise merge of two folders of per-language files.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use super::mapping::LanguageMapping;

/// Outcome for one merged file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedFile {
    pub file_name: String,
    pub output_path: PathBuf,
    /// Keys taken over from the old file.
    pub kept_count: usize,
    /// Keys appended from the new file.
    pub added_count: usize,
    /// The old file could not be loaded and was treated as empty.
    pub old_degraded: bool,
    /// The new file was missing or could not be loaded and was treated as empty.
    pub new_degraded: bool,
}

/// Merge every `*.<extension>` file of `old_dir` with its namesake in `new_dir`.
///
/// Old values win, keys only present in the new file are appended. Files that exist
/// only in `new_dir` are not copied. Missing or unparseable inputs count as empty.
pub fn merge_folders(
    old_dir: &Path,
    new_dir: &Path,
    out_dir: &Path,
    extension: &str,
) -> Result<Vec<MergedFile>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let suffix = format!(".{}", extension);
    let mut merged_files = Vec::new();

    for entry in WalkDir::new(old_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", old_dir.display()))?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        if !file_name.ends_with(&suffix) {
            continue;
        }

        let (old, old_degraded) = load_degrading(entry.path());
        let (new, new_degraded) = load_degrading(&new_dir.join(&file_name));
        let merged = old.merged_with(&new);

        let output_path = out_dir.join(&file_name);
        merged.write_clean_json(&output_path)?;

        merged_files.push(MergedFile {
            file_name,
            output_path,
            kept_count: old.len(),
            added_count: merged.len() - old.len(),
            old_degraded,
            new_degraded,
        });
    }

    Ok(merged_files)
}

fn load_degrading(path: &Path) -> (LanguageMapping, bool) {
    match LanguageMapping::load(path) {
        Ok(mapping) => (mapping, false),
        Err(_) => (LanguageMapping::new(), true),
    }
}
