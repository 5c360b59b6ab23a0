//! Rowsets, summary rows and sorting.
//!
//! A rowset is a named, ordered list of row indices used to build subtotal
//! rows. Membership is by position: indices are adjusted when a summary row
//! is inserted, but not when rows are sorted.

use std::fmt;

use log::debug;

use super::cell::{CellType, CellValue};
use super::row::Row;
use super::Table;
use crate::error::TableError;

/// Identifier of a rowset, unique within one table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowsetId(pub(crate) u32);

impl fmt::Display for RowsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rowset#{}", self.0)
    }
}

impl Table {
    /// Allocates a new, empty rowset.
    pub fn create_rowset(&mut self) -> RowsetId {
        let id = RowsetId(self.next_rowset);
        self.next_rowset += 1;
        self.rowsets.insert(id, Vec::new());
        id
    }

    /// Adds `row` to the rowset. Unknown ids are ignored; `-1` means the
    /// last row.
    pub fn append_to_rowset(&mut self, id: RowsetId, row: isize) -> Result<(), TableError> {
        let row = self.resolve_row(row)?;
        if let Some(members) = self.rowsets.get_mut(&id) {
            members.push(row);
        }
        Ok(())
    }

    /// Row indices in the rowset, in insertion order. Empty for unknown ids.
    pub fn rowset(&self, id: RowsetId) -> &[usize] {
        self.rowsets.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Inserts a summary row at `dest` holding, for each column in `cols`,
    /// the sum of that column over the rowset's rows.
    ///
    /// Int columns are summed as integers (saturating), float columns as
    /// floats; other column types are left blank. `dest` may equal the row
    /// count to append; `-1` inserts before the current last row. Rows at or
    /// after `dest` shift down by one, and so do their rowset memberships.
    ///
    /// Returns the index of the inserted row.
    pub fn insert_sum_rowset_cols(
        &mut self,
        id: RowsetId,
        dest: isize,
        cols: &[usize],
    ) -> Result<usize, TableError> {
        let dest = match dest {
            -1 if !self.rows.is_empty() => self.rows.len() - 1,
            d if d < 0 => return Err(TableError::RowNegative(d)),
            d if d as usize > self.rows.len() => {
                return Err(TableError::RowOutOfRange {
                    index: d,
                    count: self.rows.len(),
                })
            }
            d => d as usize,
        };
        for &col in cols {
            self.check_col(col as isize)?;
        }

        let mut summary = Row::blank(self.columns.len());
        let members = self.rowset(id);
        for &col in cols {
            let column_values = members
                .iter()
                .filter_map(|&r| self.rows.get(r))
                .map(|row| &row.cells[col].value);
            summary.cells[col].value = match self.columns[col].cell_type {
                CellType::Int => CellValue::Int(
                    column_values
                        .filter_map(|v| match v {
                            CellValue::Int(n) => Some(*n),
                            _ => None,
                        })
                        .fold(0i64, i64::saturating_add),
                ),
                CellType::Float => CellValue::Float(
                    column_values
                        .filter_map(|v| match v {
                            CellValue::Float(n) => Some(*n),
                            _ => None,
                        })
                        .sum(),
                ),
                _ => CellValue::Blank,
            };
        }

        self.rows.insert(dest, summary);
        for members in self.rowsets.values_mut() {
            for idx in members.iter_mut().filter(|idx| **idx >= dest) {
                *idx += 1;
            }
        }
        debug!("inserted summary of {} at row {}", id, dest);
        Ok(dest)
    }

    /// Stable sort of rows `start..=end` by the natural ordering of `col`.
    ///
    /// Bounds are clamped to the table; an invalid column leaves the table
    /// unchanged.
    pub fn sort(&mut self, start: isize, end: isize, col: isize) {
        let Ok(col) = self.check_col(col) else {
            return;
        };
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        let start = start.clamp(0, last as isize) as usize;
        let end = end.clamp(0, last as isize) as usize;
        if start >= end {
            return;
        }
        self.rows[start..=end]
            .sort_by(|a, b| a.cells[col].value.cmp_natural(&b.cells[col].value));
    }
}
