use std::path::Path;

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    config::{Config, load_config},
    core::{
        InputKind, Session, langs::translation_targets, materialize, merge_folders,
        parse_language_codes, xlsx::{read_table, write_table},
    },
};

use super::types::{
    BuildSpreadsheetParams, BuildSpreadsheetResult, ConfigDto, ConfigValues, ExtractKeysParams,
    ExtractKeysResult, GetConfigParams, LanguageCodesResult, MaterializeResult,
    MaterializeSpreadsheetParams, MergeFoldersParams, MergeResult, ParseLanguageCodesParams,
};

#[derive(Clone)]
pub struct TrsheetMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TrsheetMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TrsheetMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Extract translatable keys from a file or directory
    #[tool(
        description = "Extract translatable strings from a source file (\"text\".tr literals), a JSON key file (top-level keys), or a directory of source files. Keys are returned in order of appearance."
    )]
    pub async fn extract_keys(
        &self,
        params: Parameters<ExtractKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let config = config_for(params.project_root_path.as_deref())?;
        let kind = parse_kind(params.kind.as_deref())?;

        let session = Session::new()
            .select(Path::new(&params.input_path), kind, &config.input_patterns)
            .map_err(|e| internal("Extraction failed", e))?;
        let input = session
            .input()
            .ok_or_else(|| McpError::internal_error("No input selected", None))?;

        json_result(&ExtractKeysResult {
            kind: input.kind.map(|k| k.as_str().to_string()),
            file_count: input.files.len(),
            key_count: input.keys.len(),
            keys: input.keys.clone(),
        })
    }

    /// Detect language codes in free-form text
    #[tool(
        description = "Detect language codes in free-form text such as a supportedLocales list. Detection is permissive; review the codes before building a spreadsheet."
    )]
    pub async fn parse_language_codes(
        &self,
        params: Parameters<ParseLanguageCodesParams>,
    ) -> Result<CallToolResult, McpError> {
        let codes = parse_language_codes(&params.0.text);
        let targets = translation_targets(&codes);
        json_result(&LanguageCodesResult { codes, targets })
    }

    /// Build a translation spreadsheet
    #[tool(
        description = "Build a translation .xlsx: column A holds the source string, column B an editable copy, and one column per target language holds a translate formula."
    )]
    pub async fn build_spreadsheet(
        &self,
        params: Parameters<BuildSpreadsheetParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let config = config_for(params.project_root_path.as_deref())?;
        let kind = parse_kind(params.kind.as_deref())?;

        let codes = parse_language_codes(&params.languages);
        if codes.is_empty() {
            return Err(McpError::invalid_params("No language codes detected", None));
        }

        let session = Session::new()
            .select(Path::new(&params.input_path), kind, &config.input_patterns)
            .map_err(|e| internal("Extraction failed", e))?;
        let table = session
            .build_table(&codes, &config.translate_function)
            .map_err(|e| internal("Spreadsheet generation failed", e))?;
        write_table(&table, Path::new(&params.output_path))
            .map_err(|e| internal("Spreadsheet generation failed", e))?;

        json_result(&BuildSpreadsheetResult {
            output_path: params.output_path,
            key_count: table.data_rows().len(),
            header: table
                .header()
                .iter()
                .flatten()
                .map(|c| c.as_str().to_string())
                .collect(),
        })
    }

    /// Convert a translated spreadsheet into per-language files
    #[tool(
        description = "Convert a translated .xlsx (formulas already evaluated) into one JSON file per language column."
    )]
    pub async fn materialize_spreadsheet(
        &self,
        params: Parameters<MaterializeSpreadsheetParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let config = config_for(params.project_root_path.as_deref())?;

        let table = read_table(Path::new(&params.spreadsheet_path))
            .map_err(|e| internal("Excel to JSON failed", e))?;
        let written = materialize(&table, Path::new(&params.output_dir), &config.output_extension)
            .map_err(|e| internal("Excel to JSON failed", e))?;

        json_result(&MaterializeResult {
            output_dir: params.output_dir,
            files: written
                .iter()
                .map(|p| p.to_string_lossy().to_string())
                .collect(),
        })
    }

    /// Merge two folders of per-language files
    #[tool(
        description = "Merge per-language JSON files of an old and a new folder. Existing values win, new keys are appended. Only files present in the old folder are merged."
    )]
    pub async fn merge_folders(
        &self,
        params: Parameters<MergeFoldersParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let config = config_for(params.project_root_path.as_deref())?;

        let merged = merge_folders(
            Path::new(&params.old_dir),
            Path::new(&params.new_dir),
            Path::new(&params.output_dir),
            &config.output_extension,
        )
        .map_err(|e| internal("Combine failed", e))?;

        json_result(&MergeResult {
            output_dir: params.output_dir,
            files: merged.into_iter().map(Into::into).collect(),
        })
    }

    /// Get the current trsheet configuration
    #[tool(description = "Get the current trsheet configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }
}

#[tool_handler]
impl ServerHandler for TrsheetMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "trsheet MCP helps AI agents run a spreadsheet-based localization round-trip.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. extract_keys - List translatable strings of a file or directory\n\
                 3. parse_language_codes - Detect language codes in pasted text\n\
                 4. build_spreadsheet - Write a translation .xlsx with translate formulas\n\
                 5. materialize_spreadsheet - Turn a translated .xlsx into per-language JSON files\n\
                 6. merge_folders - Merge old and new per-language folders (old values win)\n\n\
                 Recommended Workflow:\n\
                 1. extract_keys to check what will be translated\n\
                 2. parse_language_codes and confirm the codes with the user\n\
                 3. build_spreadsheet, then let the user open it and let formulas evaluate\n\
                 4. materialize_spreadsheet on the evaluated file\n\
                 5. merge_folders to fold the result into existing translations"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn config_for(project_root: Option<&str>) -> Result<Config, McpError> {
    match project_root {
        Some(root) => load_config(Path::new(root))
            .map(|r| r.config)
            .map_err(|e| internal("Failed to load config", e)),
        None => Ok(Config::default()),
    }
}

fn parse_kind(kind: Option<&str>) -> Result<Option<InputKind>, McpError> {
    match kind {
        None => Ok(None),
        Some("source") => Ok(Some(InputKind::source_text())),
        Some("json") => Ok(Some(InputKind::structured_object())),
        Some(other) => Err(McpError::invalid_params(
            format!("Unknown kind \"{}\", expected \"source\" or \"json\"", other),
            None,
        )),
    }
}

fn internal(what: &str, err: anyhow::Error) -> McpError {
    McpError::internal_error(format!("{}: {:#}", what, err), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TrsheetMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
