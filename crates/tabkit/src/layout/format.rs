//! Per-type cell formatting shared by every renderer.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};

use super::number::NumberPattern;
use crate::table::{Cell, CellType, CellValue, ColumnDef};
use crate::Table;

impl Table {
    /// Display string of `cell` under column `col`'s format.
    ///
    /// Floats and ints use the column pattern or the table's default number
    /// pattern; dates and datetimes use the column's chrono pattern or the
    /// table default; strings are returned verbatim and blanks as `""`.
    /// No padding or truncation is applied here.
    pub fn format_cell(&self, col: usize, cell: &Cell) -> String {
        match &cell.value {
            CellValue::Blank => String::new(),
            CellValue::Str(s) => s.clone(),
            CellValue::Int(v) => {
                NumberPattern::parse(self.pattern_for(col, CellType::Int)).format_int(*v)
            }
            CellValue::Float(v) => {
                NumberPattern::parse(self.pattern_for(col, CellType::Float)).format_float(*v)
            }
            CellValue::Date(d) => format_date(*d, self.pattern_for(col, CellType::Date)),
            CellValue::DateTime(dt) => {
                format_datetime(*dt, self.pattern_for(col, CellType::DateTime))
            }
        }
    }

    fn pattern_for(&self, col: usize, kind: CellType) -> &str {
        if let Some(fmt) = self.columns.get(col).and_then(ColumnDef::format) {
            return fmt;
        }
        match kind {
            CellType::Int => &self.defaults.int_format,
            CellType::Float => &self.defaults.float_format,
            CellType::Date => &self.defaults.date_format,
            CellType::DateTime => &self.defaults.datetime_format,
            CellType::String => "",
        }
    }

    /// Display string of the cell at `(row, col)`; `""` for invalid indices.
    pub fn formatted(&self, row: usize, col: usize) -> String {
        match self.rows.get(row).and_then(|r| r.cells.get(col)) {
            Some(cell) => self.format_cell(col, cell),
            None => String::new(),
        }
    }
}

/// Formats a date with a chrono pattern. Invalid patterns, or patterns
/// asking for fields a date does not have, fall back to ISO 8601.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let Some(items) = parse_items(pattern) else {
        return date.to_string();
    };
    let mut out = String::new();
    if write!(out, "{}", date.format_with_items(items.iter())).is_err() {
        return date.to_string();
    }
    out
}

/// Datetime counterpart of [`format_date`].
pub fn format_datetime(datetime: NaiveDateTime, pattern: &str) -> String {
    let Some(items) = parse_items(pattern) else {
        return datetime.to_string();
    };
    let mut out = String::new();
    if write!(out, "{}", datetime.format_with_items(items.iter())).is_err() {
        return datetime.to_string();
    }
    out
}

fn parse_items(pattern: &str) -> Option<Vec<Item<'_>>> {
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        log::debug!("invalid date pattern {:?}", pattern);
        return None;
    }
    Some(items)
}
