//! Reading and writing translation tables as `.xlsx` workbooks.
//!
//! Tables are written to the first worksheet. Reading expects a workbook whose
//! formulas were already evaluated by spreadsheet software, so every present cell
//! is read back as text.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use calamine::{Data, Reader, Xlsx, open_workbook};
use rust_xlsxwriter::Workbook;

use super::table::{Cell, Row, TranslationTable};

/// Write `table` to a new workbook at `path`.
pub fn write_table(table: &TranslationTable, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (row_idx, row) in table.rows().iter().enumerate() {
        let row_num = u32::try_from(row_idx).context("Too many rows for a worksheet")?;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_num = u16::try_from(col_idx).context("Too many columns for a worksheet")?;
            match cell {
                Some(Cell::Text(text)) => {
                    worksheet.write_string(row_num, col_num, text)?;
                }
                Some(Cell::Formula(formula)) => {
                    worksheet.write_formula(row_num, col_num, formula.as_str())?;
                }
                None => {}
            }
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("Failed to write spreadsheet: {}", path.display()))?;
    Ok(())
}

/// Read the first worksheet of the workbook at `path`.
///
/// Rows and columns are anchored at A1 even when the leading cells are empty.
pub fn read_table(path: &Path) -> Result<TranslationTable> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open spreadsheet: {}", path.display()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| anyhow!("Malformed spreadsheet: no worksheet in {}", path.display()))?
        .with_context(|| format!("Failed to read worksheet in: {}", path.display()))?;

    let Some((last_row, last_col)) = range.end() else {
        return Ok(TranslationTable::default());
    };

    let mut rows = Vec::with_capacity(last_row as usize + 1);
    for r in 0..=last_row {
        let row: Row = (0..=last_col)
            .map(|c| range.get_value((r, c)).and_then(data_to_cell))
            .collect();
        rows.push(trim_trailing_absent(row));
    }
    Ok(TranslationTable::from_rows(rows))
}

fn data_to_cell(data: &Data) -> Option<Cell> {
    match data {
        Data::Empty => None,
        Data::String(s) => Some(Cell::Text(s.clone())),
        other => Some(Cell::Text(other.to_string())),
    }
}

fn trim_trailing_absent(mut row: Row) -> Row {
    while matches!(row.last(), Some(None)) {
        row.pop();
    }
    row
}
