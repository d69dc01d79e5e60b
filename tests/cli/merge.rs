use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr};

#[test]
fn test_merge_keeps_old_values() -> Result<()> {
    let test = CliTest::with_file("old/fr.json", r#"{"greet": "Salut", "bye": "Adieu"}"#)?;
    test.write_file("new/fr.json", r#"{"greet": "Bonjour", "thanks": "Merci"}"#)?;
    test.write_file("new/ja.json", r#"{"greet": "こんにちは"}"#)?;

    let output = test
        .command()
        .args(["merge", "old", "new", "out"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Merged 1 file into: out"));
    assert_eq!(
        test.read_file("out/fr.json")?,
        "{\n  \"greet\": \"Salut\",\n  \"bye\": \"Adieu\",\n  \"thanks\": \"Merci\"\n}"
    );
    assert!(!test.path("out/ja.json").exists());
    Ok(())
}

#[test]
fn test_merge_degrades_unreadable_old_file() -> Result<()> {
    let test = CliTest::with_file("old/de.json", "not json")?;
    test.write_file("new/de.json", r#"{"greet": "Hallo"}"#)?;

    let output = test
        .command()
        .args(["-v", "merge", "old", "new", "out"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("old file unreadable, treated as empty"));
    assert_eq!(test.read_json("out/de.json")?, json!({"greet": "Hallo"}));
    Ok(())
}

#[test]
fn test_merge_empty_old_folder() -> Result<()> {
    let test = CliTest::with_file("old/readme.txt", "nothing to merge")?;
    test.write_file("new/fr.json", "{}")?;

    let output = test
        .command()
        .args(["merge", "old", "new", "out"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no files to merge"));
    Ok(())
}

#[test]
fn test_merge_missing_old_folder() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .command()
        .args(["merge", "missing", "new", "out"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read directory"));
    Ok(())
}
