//! Column-width negotiation and line layout for monospaced output.
//!
//! Width resolution is a full pass over the table: a column with a declared
//! width keeps it, an auto-fit column (declared width `0`) takes the widest
//! of its title and every formatted cell.
//!
//! A logical row becomes one or more physical lines. String cells wrap at
//! whitespace within their column; date cells are cut to the column width;
//! numbers are never wrapped or cut, so an over-wide number pushes the rest
//! of its line to the right rather than lose digits.

mod format;
mod number;
mod util;

use log::{debug, trace};

pub use format::{format_date, format_datetime};
pub use number::NumberPattern;
pub use util::{display_width, justify, pad_center, pad_left, pad_right, truncate_to_width, wrap};

use crate::table::CellType;
use crate::Table;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Total width of all columns, separators excluded.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Width of a full line: every column plus a separator between each pair.
    pub fn line_width(&self, separator: &str) -> usize {
        self.total() + display_width(separator) * self.widths.len().saturating_sub(1)
    }
}

/// Resolves the print width of every column.
pub fn resolve_widths(table: &Table) -> ResolvedWidths {
    let widths = table
        .columns
        .iter()
        .enumerate()
        .map(|(col, column)| {
            if !column.is_auto_fit() {
                return column.width;
            }
            table
                .rows
                .iter()
                .map(|row| display_width(&table.format_cell(col, &row.cells[col])))
                .fold(display_width(&column.title), usize::max)
        })
        .collect();
    ResolvedWidths { widths }
}

impl Table {
    /// Stores the resolved widths in each column's `print_width`.
    ///
    /// Idempotent: tightening an unchanged table twice yields the same
    /// widths. Renderers resolve widths themselves, so calling this is only
    /// needed to inspect [`ColumnDef::print_width`](crate::ColumnDef::print_width).
    pub fn tighten_columns(&mut self) {
        let resolved = resolve_widths(self);
        for (column, width) in self.columns.iter_mut().zip(resolved.widths) {
            column.print_width = width;
        }
        debug!("tightened {} columns", self.columns.len());
    }
}

/// Lays out the header: each title wrapped to its column and justified.
pub(crate) fn header_lines(table: &Table, widths: &ResolvedWidths) -> Vec<String> {
    let cells: Vec<Vec<String>> = table
        .columns
        .iter()
        .zip(&widths.widths)
        .map(|(column, &w)| wrap(&column.title, w))
        .collect();
    assemble(table, widths, cells)
}

/// Lays out one logical row as physical lines.
pub(crate) fn row_lines(table: &Table, row: usize, widths: &ResolvedWidths) -> Vec<String> {
    let Some(r) = table.rows.get(row) else {
        return Vec::new();
    };
    let cells: Vec<Vec<String>> = table
        .columns
        .iter()
        .zip(&widths.widths)
        .enumerate()
        .map(|(col, (column, &w))| {
            let text = table.format_cell(col, &r.cells[col]);
            match column.cell_type {
                CellType::String => wrap(&text, w),
                CellType::Date | CellType::DateTime => vec![truncate_to_width(&text, w)],
                CellType::Int | CellType::Float => vec![text],
            }
        })
        .collect();
    let lines = assemble(table, widths, cells);
    trace!("row {} laid out on {} line(s)", row, lines.len());
    lines
}

/// A dash rule spanning the full table width.
pub(crate) fn rule_line(table: &Table, widths: &ResolvedWidths) -> String {
    "-".repeat(widths.line_width(&table.defaults.separator))
}

/// Zips per-column line stacks into physical lines. Shorter stacks are
/// blank-padded to the tallest.
fn assemble(table: &Table, widths: &ResolvedWidths, cells: Vec<Vec<String>>) -> Vec<String> {
    let height = cells.iter().map(Vec::len).max().unwrap_or(1).max(1);
    let separator = &table.defaults.separator;

    (0..height)
        .map(|i| {
            let mut line = String::new();
            for (col, stack) in cells.iter().enumerate() {
                if col > 0 {
                    line.push_str(separator);
                }
                let text = stack.get(i).map(String::as_str).unwrap_or("");
                let w = widths.get(col).unwrap_or(0);
                line.push_str(&justify(text, w, table.columns[col].justify));
            }
            line
        })
        .collect()
}
