use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use trsheet::mcp::{TrsheetMcpServer, types::ExtractKeysParams};

use crate::{McpTestFixture, extract_tool_result_json};

fn params(input_path: String, kind: Option<&str>) -> Parameters<ExtractKeysParams> {
    Parameters(ExtractKeysParams {
        input_path,
        kind: kind.map(String::from),
        project_root_path: None,
    })
}

#[tokio::test]
async fn test_extract_keys_from_source() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_file(
            "lib/home.dart",
            r#"
// Text("Commented".tr),
Text("Welcome".tr),
Text("Hi $name".tr),
Text("Welcome".tr),
"#,
        )
        .unwrap();
    let server = TrsheetMcpServer::new();

    let result = server
        .extract_keys(params(fixture.path("lib/home.dart"), None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["kind"], "source");
    assert_eq!(json_result["fileCount"], 1);
    assert_eq!(json_result["keys"], json!(["Welcome", "Welcome"]));
}

#[tokio::test]
async fn test_extract_keys_from_json() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_file("keys.json", r#"{"b": "x", "a": {"nested": 1}}"#)
        .unwrap();
    let server = TrsheetMcpServer::new();

    let result = server
        .extract_keys(params(fixture.path("keys.json"), Some("json")))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["kind"], "json");
    assert_eq!(json_result["keyCount"], 2);
    assert_eq!(json_result["keys"], json!(["b", "a"]));
}

#[tokio::test]
async fn test_extract_keys_directory_uses_config_patterns() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "inputPatterns": ["**/*.txt"] }))
        .unwrap();
    fixture.write_file("src/b.txt", r#""Second".tr"#).unwrap();
    fixture.write_file("src/a.txt", r#""First".tr"#).unwrap();
    fixture.write_file("src/c.dart", r#""Skipped".tr"#).unwrap();
    let server = TrsheetMcpServer::new();

    let result = server
        .extract_keys(Parameters(ExtractKeysParams {
            input_path: fixture.path("src"),
            kind: None,
            project_root_path: Some(fixture.root()),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fileCount"], 2);
    assert_eq!(json_result["keys"], json!(["First", "Second"]));
}

#[tokio::test]
async fn test_extract_keys_rejects_unknown_kind() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_file("a.dart", r#""x".tr"#).unwrap();
    let server = TrsheetMcpServer::new();

    let result = server
        .extract_keys(params(fixture.path("a.dart"), Some("yaml")))
        .await;

    assert!(result.is_err());
}
