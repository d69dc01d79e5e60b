//! In-memory translation table.
//!
//! Row 0 is the header (`en`, `en`, code...). Data rows hold the key in columns 0
//! and 1, followed by one cell per language. Cells are optional: `None` is an
//! absent cell, which is distinct from a present cell holding empty text.

use std::fmt;

/// Contents of one present cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// Formula source including the leading `=`.
    Formula(String),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Cell::Text(s) | Cell::Formula(s) => s,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Row = Vec<Option<Cell>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    rows: Vec<Row>,
}

impl TranslationTable {
    pub fn new(header: Row) -> Self {
        Self { rows: vec![header] }
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn header(&self) -> &[Option<Cell>] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or(&[])
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at zero-based `(row, col)`, `None` when absent or out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(col)?.as_ref()
    }

    /// Replace the cell at `(row, col)`, growing the row with absent cells if needed.
    ///
    /// Returns false if `row` does not exist.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Option<Cell>) -> bool {
        let Some(target) = self.rows.get_mut(row) else {
            return false;
        };
        if target.len() <= col {
            target.resize(col + 1, None);
        }
        target[col] = cell;
        true
    }
}
