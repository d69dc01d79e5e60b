use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use trsheet::core::{Cell, xlsx::{read_table, write_table}};
use trsheet::mcp::{
    TrsheetMcpServer,
    types::{BuildSpreadsheetParams, MaterializeSpreadsheetParams},
};

use crate::{McpTestFixture, extract_tool_result_json};

fn build_params(fixture: &McpTestFixture, languages: &str) -> Parameters<BuildSpreadsheetParams> {
    Parameters(BuildSpreadsheetParams {
        input_path: fixture.path("lib/app.dart"),
        output_path: fixture.path("translation.xlsx"),
        languages: languages.to_string(),
        kind: None,
        project_root_path: Some(fixture.root()),
    })
}

#[tokio::test]
async fn test_build_spreadsheet() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_file("lib/app.dart", r#"Text("Hello".tr); Text("Bye".tr);"#)
        .unwrap();
    let server = TrsheetMcpServer::new();

    let result = server
        .build_spreadsheet(build_params(&fixture, "en, fr, de"))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["keyCount"], 2);
    assert_eq!(json_result["header"], json!(["en", "en", "de", "fr"]));

    let table = read_table(&fixture.root_path().join("translation.xlsx")).unwrap();
    assert_eq!(table.cell(1, 0), Some(&Cell::text("Hello")));
    assert_eq!(table.cell(2, 1), Some(&Cell::text("Bye")));
}

#[tokio::test]
async fn test_build_spreadsheet_without_codes() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_file("lib/app.dart", r#"Text("Hello".tr);"#)
        .unwrap();
    let server = TrsheetMcpServer::new();

    let result = server.build_spreadsheet(build_params(&fixture, "")).await;

    assert!(result.is_err());
    assert!(!fixture.root_path().join("translation.xlsx").exists());
}

#[tokio::test]
async fn test_materialize_spreadsheet() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_file("lib/app.dart", r#"Text("Hello".tr);"#)
        .unwrap();
    let server = TrsheetMcpServer::new();
    server
        .build_spreadsheet(build_params(&fixture, "ja"))
        .await
        .unwrap();

    // Stand in for spreadsheet software evaluating the formula.
    let path = fixture.root_path().join("translation.xlsx");
    let mut table = read_table(&path).unwrap();
    table.set_cell(1, 2, Some(Cell::text("こんにちは")));
    write_table(&table, &path).unwrap();

    let result = server
        .materialize_spreadsheet(Parameters(MaterializeSpreadsheetParams {
            spreadsheet_path: fixture.path("translation.xlsx"),
            output_dir: fixture.path("i18n"),
            project_root_path: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["files"].as_array().map(Vec::len), Some(2));
    assert_eq!(fixture.read_json("i18n/ja.json").unwrap(), json!({"Hello": "こんにちは"}));
    assert_eq!(fixture.read_json("i18n/en.json").unwrap(), json!({"Hello": "Hello"}));
}

#[tokio::test]
async fn test_materialize_missing_spreadsheet() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TrsheetMcpServer::new();

    let result = server
        .materialize_spreadsheet(Parameters(MaterializeSpreadsheetParams {
            spreadsheet_path: fixture.path("missing.xlsx"),
            output_dir: fixture.path("i18n"),
            project_root_path: None,
        }))
        .await;

    assert!(result.is_err());
}
