use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;
use trsheet::core::{
    Cell, TranslationTable, build_table,
    xlsx::write_table,
};

use crate::{CliTest, stderr};

fn translated_table() -> TranslationTable {
    let keys = vec!["greet".to_string(), "quote".to_string(), "empty".to_string()];
    let codes = vec!["fr".to_string()];
    let mut table = build_table(&keys, &codes, "TRANSLATE");
    table.set_cell(1, 2, Some(Cell::text("Bonjour")));
    table.set_cell(2, 2, Some(Cell::text("Il a dit \"salut\"\nau revoir")));
    table.set_cell(3, 2, None);
    table
}

#[test]
fn test_materialize_writes_language_files() -> Result<()> {
    let test = CliTest::new()?;
    write_table(&translated_table(), &test.path("translation.xlsx"))?;

    let output = test
        .command()
        .args(["materialize", "translation.xlsx", "i18n/out"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stderr(&output).contains("Exported 2 files to: i18n/out"));

    assert_eq!(
        test.read_json("i18n/out/fr.json")?,
        json!({
            "greet": "Bonjour",
            "quote": "Il a dit \"salut\"\nau revoir",
            "empty": ""
        })
    );
    assert_eq!(
        test.read_json("i18n/out/en.json")?,
        json!({"greet": "greet", "quote": "quote", "empty": "empty"})
    );

    let raw = test.read_file("i18n/out/fr.json")?;
    assert!(raw.contains(r#""quote": "Il a dit \"salut\"\nau revoir""#));
    assert!(!raw.ends_with(",\n}"));
    Ok(())
}

#[test]
fn test_materialize_malformed_spreadsheet() -> Result<()> {
    let test = CliTest::new()?;
    let mut table = TranslationTable::new(vec![None, None]);
    table.push_row(vec![Some(Cell::text("key"))]);
    write_table(&table, &test.path("bad.xlsx"))?;

    let output = test
        .command()
        .args(["materialize", "bad.xlsx", "out"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Malformed spreadsheet"));
    assert!(!test.path("out").exists());
    Ok(())
}

#[test]
fn test_materialize_respects_output_extension() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".trsheetrc.json", r#"{ "outputExtension": "arb" }"#)?;
    write_table(&translated_table(), &test.path("translation.xlsx"))?;

    let output = test
        .command()
        .args(["materialize", "translation.xlsx", "out"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(test.path("out/fr.arb").exists());
    assert!(test.path("out/en.arb").exists());
    Ok(())
}
