use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ExtractKeysParams {
    /// Source file, JSON key file, or directory to extract from
    pub input_path: String,
    /// "source" or "json"; detected from content when omitted
    pub kind: Option<String>,
    /// Directory where .trsheetrc.json lookup starts (default: built-in config)
    pub project_root_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ParseLanguageCodesParams {
    /// Free-form text listing languages, e.g. a `supportedLocales` snippet
    pub text: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct BuildSpreadsheetParams {
    /// Source file, JSON key file, or directory to extract from
    pub input_path: String,
    /// Where to write the .xlsx file
    pub output_path: String,
    /// Free-form text listing the target languages
    pub languages: String,
    /// "source" or "json"; detected from content when omitted
    pub kind: Option<String>,
    /// Directory where .trsheetrc.json lookup starts (default: built-in config)
    pub project_root_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct MaterializeSpreadsheetParams {
    /// Translated .xlsx file with formulas already evaluated
    pub spreadsheet_path: String,
    /// Directory for the per-language files
    pub output_dir: String,
    /// Directory where .trsheetrc.json lookup starts (default: built-in config)
    pub project_root_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct MergeFoldersParams {
    /// Folder with existing translations (its values win)
    pub old_dir: String,
    /// Folder with newly generated translations
    pub new_dir: String,
    /// Output folder
    pub output_dir: String,
    /// Directory where .trsheetrc.json lookup starts (default: built-in config)
    pub project_root_path: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetConfigParams {
    /// Directory where .trsheetrc.json lookup starts
    pub project_root_path: String,
}

// ============================================================
// Tool Results
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractKeysResult {
    /// "source" or "json", absent when no file was read
    pub kind: Option<String>,
    pub file_count: usize,
    pub key_count: usize,
    pub keys: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCodesResult {
    /// Every detected code, sorted
    pub codes: Vec<String>,
    /// Codes that would become translation columns
    pub targets: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildSpreadsheetResult {
    pub output_path: String,
    pub key_count: usize,
    pub header: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterializeResult {
    pub output_dir: String,
    pub files: Vec<String>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MergedFileInfo {
    pub file_name: String,
    pub kept_count: usize,
    pub added_count: usize,
    pub old_degraded: bool,
    pub new_degraded: bool,
}

impl From<crate::core::MergedFile> for MergedFileInfo {
    fn from(m: crate::core::MergedFile) -> Self {
        Self {
            file_name: m.file_name,
            kept_count: m.kept_count,
            added_count: m.added_count,
            old_degraded: m.old_degraded,
            new_degraded: m.new_degraded,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MergeResult {
    pub output_dir: String,
    pub files: Vec<MergedFileInfo>,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub translate_function: String,
    pub languages: Vec<String>,
    pub output_extension: String,
    pub input_patterns: Vec<String>,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            translate_function: c.translate_function,
            languages: c.languages,
            output_extension: c.output_extension,
            input_patterns: c.input_patterns,
        }
    }
}
