use super::langs::{SOURCE_LANGUAGE, translation_targets};
use super::table::{Cell, Row, TranslationTable};

/// Default spreadsheet translation function.
pub const DEFAULT_TRANSLATE_FUNCTION: &str = "TRANSLATE";

/// Formula translating the column A cell of `row_number` (1-based) into `code`.
pub fn translate_formula(function: &str, row_number: usize, code: &str) -> String {
    format!(
        "={}($A{}, \"{}\", \"{}\")",
        function, row_number, SOURCE_LANGUAGE, code
    )
}

/// Build the translation table for `keys` and the detected `codes`.
///
/// Header: `en`, `en`, then each target code. Every data row holds the key twice
/// (original and editable copy) followed by one translate formula per target.
/// The source language is never a target column.
pub fn build_table(keys: &[String], codes: &[String], function: &str) -> TranslationTable {
    let targets = translation_targets(codes);

    let header: Row = [SOURCE_LANGUAGE, SOURCE_LANGUAGE]
        .into_iter()
        .map(String::from)
        .chain(targets.iter().cloned())
        .map(|h| Some(Cell::Text(h)))
        .collect();
    let mut table = TranslationTable::new(header);

    for (index, key) in keys.iter().enumerate() {
        // Header is row 1 in the sheet.
        let row_number = index + 2;
        let mut row: Row = Vec::with_capacity(targets.len() + 2);
        row.push(Some(Cell::text(key.as_str())));
        row.push(Some(Cell::text(key.as_str())));
        row.extend(
            targets
                .iter()
                .map(|code| Some(Cell::Formula(translate_formula(function, row_number, code)))),
        );
        table.push_row(row);
    }

    table
}
