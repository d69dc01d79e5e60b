//! Regroup an evaluated translation table into one mapping per language.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::langs::SOURCE_LANGUAGE;
use super::mapping::LanguageMapping;
use super::table::TranslationTable;

/// A language column and the header index it is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageColumn {
    pub code: String,
    pub index: usize,
}

/// Language columns in header order.
///
/// Blank headers are skipped. The source language is kept once, at its first
/// position; later source-language columns (the editable copy) are ignored.
/// A code appearing twice maps to its first column.
pub fn language_columns(table: &TranslationTable) -> Vec<LanguageColumn> {
    let headers: Vec<String> = table
        .header()
        .iter()
        .map(|cell| cell.as_ref().map(|c| c.as_str().trim().to_string()).unwrap_or_default())
        .collect();

    let mut columns: Vec<LanguageColumn> = Vec::new();
    for code in &headers {
        if code.is_empty() {
            continue;
        }
        if code == SOURCE_LANGUAGE && columns.iter().any(|c| c.code == SOURCE_LANGUAGE) {
            continue;
        }
        let index = headers
            .iter()
            .position(|h| h == code)
            .unwrap_or_default();
        columns.push(LanguageColumn {
            code: code.clone(),
            index,
        });
    }
    columns
}

/// Build one mapping per language column.
///
/// Rows with an absent or empty first cell are skipped. Absent language cells
/// are kept as missing values; every recorded key is present in every mapping.
pub fn table_to_mappings(table: &TranslationTable) -> Result<Vec<(String, LanguageMapping)>> {
    if table.is_empty() {
        bail!("Malformed spreadsheet: missing header row");
    }
    let columns = language_columns(table);
    if columns.is_empty() {
        bail!("Malformed spreadsheet: header row has no language columns");
    }

    let mut mappings: Vec<(String, LanguageMapping)> = columns
        .iter()
        .map(|c| (c.code.clone(), LanguageMapping::new()))
        .collect();

    for row in table.data_rows() {
        let key = match row.first() {
            Some(Some(cell)) if !cell.as_str().is_empty() => cell.as_str(),
            _ => continue,
        };
        for (column, (_, mapping)) in columns.iter().zip(mappings.iter_mut()) {
            let value = row
                .get(column.index)
                .and_then(Option::as_ref)
                .map(|cell| cell.as_str().to_string());
            mapping.insert(key, value);
        }
    }

    Ok(mappings)
}

/// Write `<code>.<extension>` for every language column into `out_dir`.
///
/// The directory is created if needed. Files written before a failure are left in place.
pub fn materialize(
    table: &TranslationTable,
    out_dir: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let mappings = table_to_mappings(table)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(mappings.len());
    for (code, mapping) in mappings {
        let path = out_dir.join(format!("{}.{}", code, extension));
        mapping.write_clean_json(&path)?;
        written.push(path);
    }
    Ok(written)
}
