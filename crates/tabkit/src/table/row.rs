//! Table rows.

use super::cell::Cell;
use super::style::StyleList;

/// One logical row: a cell per column plus rule markers and row styles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub(crate) cells: Vec<Cell>,
    pub(crate) rule_before: bool,
    pub(crate) rule_after: bool,
    pub(crate) style: StyleList,
}

impl Row {
    pub(crate) fn blank(columns: usize) -> Self {
        Row {
            cells: vec![Cell::default(); columns],
            ..Row::default()
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// Whether a horizontal rule is drawn above this row.
    pub fn rule_before(&self) -> bool {
        self.rule_before
    }

    /// Whether a horizontal rule is drawn below this row.
    pub fn rule_after(&self) -> bool {
        self.rule_after
    }

    pub fn style(&self) -> &StyleList {
        &self.style
    }
}
