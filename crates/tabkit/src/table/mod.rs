//! The table model: columns, rows, rowsets, headings and styles.
//!
//! A [`Table`] is built incrementally. Declare every column first, then
//! append rows and fill cells:
//!
//! ```rust
//! use tabkit::{CellType, Justify, Table};
//!
//! let mut table = Table::new();
//! table.set_title("Staff");
//! table.add_column("Name", 10, CellType::String, Justify::Left);
//! table.add_column("Age", 0, CellType::Int, Justify::Right);
//!
//! table.add_row();
//! assert!(table.put_str(-1, 0, "Al"));
//! assert!(table.put_int(-1, 1, 47));
//!
//! // Wrong type: ignored, reported as `false`
//! assert!(!table.put_float(-1, 1, 47.0));
//! assert_eq!(table.get_int(0, 1), 47);
//! ```
//!
//! ## Indices
//!
//! Row and column indices are `isize` so that bad input can be reported
//! precisely: [`Table::check_row`] and [`Table::check_col`] accept exactly
//! `0..count` and tell negative indices apart from indices past the end.
//! Mutators additionally accept row `-1` as "the most recently appended row".
//!
//! ## Best-effort writes
//!
//! The `put_*` family never fails loudly. An out-of-range index or a value
//! whose type differs from the column's declared type returns `false` and
//! leaves the cell untouched, so bulk-fill loops need no per-call checks.
//! Reads are equally forgiving: getters return the type's zero value for
//! invalid indices.

mod cell;
mod column;
mod row;
mod rowset;
mod style;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

pub use cell::{Cell, CellType, CellValue};
pub use column::{ColumnDef, HtmlWidth, Justify};
pub use row::Row;
pub use rowset::RowsetId;
pub use style::{StyleDecl, StyleList};

use crate::config::TableDefaults;
use crate::error::TableError;
use cell::BLANK_CELL;

/// One of the three section lines printed under the title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    One,
    Two,
    Three,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::One, Section::Two, Section::Three];

    pub(crate) fn index(self) -> usize {
        match self {
            Section::One => 0,
            Section::Two => 1,
            Section::Three => 2,
        }
    }
}

/// A text line above the table with its own styles.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Heading {
    pub(crate) text: String,
    pub(crate) style: StyleList,
}

/// An in-memory table of typed cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    pub(crate) columns: Vec<ColumnDef>,
    pub(crate) rows: Vec<Row>,
    pub(crate) rowsets: BTreeMap<RowsetId, Vec<usize>>,
    pub(crate) next_rowset: u32,
    pub(crate) title: Heading,
    pub(crate) sections: [Heading; 3],
    pub(crate) header_style: StyleList,
    pub(crate) table_style: StyleList,
    pub(crate) no_rows_style: StyleList,
    pub(crate) no_headers_style: StyleList,
    pub(crate) defaults: TableDefaults,
    pub(crate) html_template: Option<PathBuf>,
    pub(crate) html_css: Option<PathBuf>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Creates an empty table with the built-in defaults.
    pub fn new() -> Self {
        Self::with_defaults(TableDefaults::default())
    }

    /// Creates an empty table carrying its own formatting defaults.
    pub fn with_defaults(defaults: TableDefaults) -> Self {
        Table {
            columns: Vec::new(),
            rows: Vec::new(),
            rowsets: BTreeMap::new(),
            next_rowset: 0,
            title: Heading::default(),
            sections: Default::default(),
            header_style: StyleList::new(),
            table_style: StyleList::new(),
            no_rows_style: StyleList::new(),
            no_headers_style: StyleList::new(),
            defaults,
            html_template: None,
            html_css: None,
        }
    }

    pub fn defaults(&self) -> &TableDefaults {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut TableDefaults {
        &mut self.defaults
    }

    // ---------------------------------------------------------------------
    // Headings
    // ---------------------------------------------------------------------

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title.text = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title.text
    }

    pub fn set_section(&mut self, section: Section, text: impl Into<String>) {
        self.sections[section.index()].text = text.into();
    }

    pub fn section(&self, section: Section) -> &str {
        &self.sections[section.index()].text
    }

    // ---------------------------------------------------------------------
    // Structure
    // ---------------------------------------------------------------------

    /// Appends a column and returns its index.
    ///
    /// A `width` of `0` makes the column auto-fit its content. Rows that
    /// already exist gain a blank cell for the new column.
    pub fn add_column(
        &mut self,
        title: impl Into<String>,
        width: usize,
        cell_type: CellType,
        justify: Justify,
    ) -> usize {
        self.columns
            .push(ColumnDef::new(title.into(), width, cell_type, justify));
        for row in &mut self.rows {
            row.cells.push(Cell::default());
        }
        self.columns.len() - 1
    }

    /// Sets a column's format pattern: a number pattern such as `#,###.##`
    /// for numeric columns or a chrono pattern for date columns.
    pub fn set_col_format(&mut self, col: isize, format: impl Into<String>) -> Result<(), TableError> {
        let col = self.check_col(col)?;
        self.columns[col].format = Some(format.into());
        Ok(())
    }

    /// Appends a row of blank cells sized to the current columns and returns
    /// its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(Row::blank(self.columns.len()));
        self.rows.len() - 1
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column(&self, col: usize) -> Option<&ColumnDef> {
        self.columns.get(col)
    }

    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    /// Fails with [`TableError::NoColumns`] when no column is declared.
    pub fn has_headers(&self) -> Result<(), TableError> {
        if self.columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        Ok(())
    }

    /// Fails with [`TableError::NoRows`] when the table holds no rows.
    pub fn has_data(&self) -> Result<(), TableError> {
        if self.rows.is_empty() {
            return Err(TableError::NoRows);
        }
        Ok(())
    }

    /// Accepts exactly `0..row_count`.
    pub fn check_row(&self, row: isize) -> Result<usize, TableError> {
        if row < 0 {
            return Err(TableError::RowNegative(row));
        }
        if row as usize >= self.rows.len() {
            return Err(TableError::RowOutOfRange {
                index: row,
                count: self.rows.len(),
            });
        }
        Ok(row as usize)
    }

    /// Accepts exactly `0..col_count`.
    pub fn check_col(&self, col: isize) -> Result<usize, TableError> {
        if col < 0 {
            return Err(TableError::ColumnNegative(col));
        }
        if col as usize >= self.columns.len() {
            return Err(TableError::ColumnOutOfRange {
                index: col,
                count: self.columns.len(),
            });
        }
        Ok(col as usize)
    }

    /// Like [`check_row`](Self::check_row) but maps `-1` to the last row.
    pub(crate) fn resolve_row(&self, row: isize) -> Result<usize, TableError> {
        if row == -1 && !self.rows.is_empty() {
            return Ok(self.rows.len() - 1);
        }
        self.check_row(row)
    }

    // ---------------------------------------------------------------------
    // Cells
    // ---------------------------------------------------------------------

    /// Puts a value into a cell.
    ///
    /// Returns `false`, leaving the cell unchanged, when either index is
    /// invalid or the value's type differs from the column's declared type.
    /// Putting [`CellValue::Blank`] clears a cell of any type.
    pub fn put(&mut self, row: isize, col: isize, value: impl Into<CellValue>) -> bool {
        let (Ok(row), Ok(col)) = (self.resolve_row(row), self.check_col(col)) else {
            return false;
        };
        let value = value.into();
        if let Some(kind) = value.cell_type() {
            if kind != self.columns[col].cell_type {
                return false;
            }
        }
        self.rows[row].cells[col].value = value;
        true
    }

    pub fn put_str(&mut self, row: isize, col: isize, value: impl Into<String>) -> bool {
        self.put(row, col, CellValue::Str(value.into()))
    }

    pub fn put_int(&mut self, row: isize, col: isize, value: i64) -> bool {
        self.put(row, col, CellValue::Int(value))
    }

    pub fn put_float(&mut self, row: isize, col: isize, value: f64) -> bool {
        self.put(row, col, CellValue::Float(value))
    }

    pub fn put_date(&mut self, row: isize, col: isize, value: NaiveDate) -> bool {
        self.put(row, col, CellValue::Date(value))
    }

    pub fn put_datetime(&mut self, row: isize, col: isize, value: NaiveDateTime) -> bool {
        self.put(row, col, CellValue::DateTime(value))
    }

    /// The cell at `(row, col)`, or a blank cell for invalid indices.
    pub fn get(&self, row: isize, col: isize) -> &Cell {
        match (self.resolve_row(row), self.check_col(col)) {
            (Ok(row), Ok(col)) => &self.rows[row].cells[col],
            _ => &BLANK_CELL,
        }
    }

    pub fn get_str(&self, row: isize, col: isize) -> &str {
        self.get(row, col).as_str()
    }

    pub fn get_int(&self, row: isize, col: isize) -> i64 {
        self.get(row, col).as_int()
    }

    pub fn get_float(&self, row: isize, col: isize) -> f64 {
        self.get(row, col).as_float()
    }

    pub fn get_date(&self, row: isize, col: isize) -> NaiveDate {
        self.get(row, col).as_date()
    }

    pub fn get_datetime(&self, row: isize, col: isize) -> NaiveDateTime {
        self.get(row, col).as_datetime()
    }

    /// Type of the value held at `(row, col)`; `None` for blanks and invalid
    /// indices.
    pub fn cell_type(&self, row: isize, col: isize) -> Option<CellType> {
        self.get(row, col).value.cell_type()
    }

    // ---------------------------------------------------------------------
    // Horizontal rules
    // ---------------------------------------------------------------------

    /// Draws a horizontal rule above `row` in text output.
    pub fn add_line_before(&mut self, row: isize) -> Result<(), TableError> {
        let row = self.resolve_row(row)?;
        self.rows[row].rule_before = true;
        Ok(())
    }

    /// Draws a horizontal rule below `row` in text output.
    pub fn add_line_after(&mut self, row: isize) -> Result<(), TableError> {
        let row = self.resolve_row(row)?;
        self.rows[row].rule_after = true;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // HTML resources
    // ---------------------------------------------------------------------

    /// Renders HTML through the template at `path` instead of the built-in
    /// one. The file is read at render time.
    pub fn set_html_template(&mut self, path: impl Into<PathBuf>) {
        self.html_template = Some(path.into());
    }

    /// Appends the stylesheet at `path` to the generated `<style>` block.
    /// The file is read at render time.
    pub fn set_html_css(&mut self, path: impl Into<PathBuf>) {
        self.html_css = Some(path.into());
    }

    pub fn html_template(&self) -> Option<&Path> {
        self.html_template.as_deref()
    }

    pub fn html_css(&self) -> Option<&Path> {
        self.html_css.as_deref()
    }
}
