//! Style declarations and their scope setters.
//!
//! Styles are open-ended CSS-like `name: value` pairs. Every renderable scope
//! (title, sections, header row, header cells, columns, rows, cells, the
//! table itself) owns a [`StyleList`]; repeated calls on the same scope append
//! rather than replace.
//!
//! When a cell is rendered to HTML its inline style is built by
//! [`StyleList::layered`] from four layers, lowest precedence first:
//! table default, row, column, cell.
//!
//! ```rust
//! use tabkit::StyleList;
//!
//! let table_default: StyleList = [("color", "red"), ("font-size", "9pt")].into_iter().collect();
//! let cell: StyleList = [("color", "blue")].into_iter().collect();
//!
//! let inline = StyleList::layered(&[&table_default, &cell]);
//! assert_eq!(inline, "color:blue;font-size:9pt;");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::column::HtmlWidth;
use super::{Section, Table};
use crate::error::TableError;

/// A single `name: value` style declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleDecl {
    pub name: String,
    pub value: String,
}

impl StyleDecl {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for StyleDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{};", self.name, self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for StyleDecl {
    fn from((name, value): (N, V)) -> Self {
        StyleDecl::new(name, value)
    }
}

/// Ordered list of declarations for one scope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleList(Vec<StyleDecl>);

impl StyleList {
    pub const fn new() -> Self {
        StyleList(Vec::new())
    }

    pub fn push(&mut self, decl: impl Into<StyleDecl>) {
        self.0.push(decl.into());
    }

    pub fn append<I, D>(&mut self, decls: I)
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDecl>,
    {
        self.0.extend(decls.into_iter().map(Into::into));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleDecl> {
        self.0.iter()
    }

    /// Value of the last declaration named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
    }

    /// Inline style string for this scope alone, duplicates collapsed.
    pub fn to_inline(&self) -> String {
        Self::layered(&[self])
    }

    /// Merges scopes, lowest precedence first, into one inline style string.
    ///
    /// A property keeps the position of its first declaration and the value
    /// of its last.
    pub fn layered(layers: &[&StyleList]) -> String {
        let mut merged: Vec<(&str, &str)> = Vec::new();
        for decl in layers.iter().flat_map(|layer| layer.iter()) {
            match merged.iter().position(|(name, _)| *name == decl.name) {
                Some(i) => merged[i].1 = decl.value.as_str(),
                None => merged.push((decl.name.as_str(), decl.value.as_str())),
            }
        }

        let mut out = String::new();
        for (name, value) in merged {
            out.push_str(name);
            out.push(':');
            out.push_str(value);
            out.push(';');
        }
        out
    }
}

impl fmt::Display for StyleList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_inline())
    }
}

impl<D: Into<StyleDecl>> FromIterator<D> for StyleList {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        StyleList(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a StyleList {
    type Item = &'a StyleDecl;
    type IntoIter = std::slice::Iter<'a, StyleDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Table {
    pub fn set_title_style<I, D>(&mut self, decls: I)
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDecl>,
    {
        self.title.style.append(decls);
    }

    pub fn set_section_style<I, D>(&mut self, section: Section, decls: I)
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDecl>,
    {
        self.sections[section.index()].style.append(decls);
    }

    /// Styles the whole header row.
    pub fn set_header_style<I, D>(&mut self, decls: I)
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDecl>,
    {
        self.header_style.append(decls);
    }

    /// Styles a single header cell.
    pub fn set_header_cell_style<I, D>(&mut self, col: isize, decls: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDecl>,
    {
        let col = self.check_col(col)?;
        self.columns[col].header_style.append(decls);
        Ok(())
    }

    pub fn set_col_style<I, D>(&mut self, col: isize, decls: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDecl>,
    {
        let col = self.check_col(col)?;
        self.columns[col].style.append(decls);
        Ok(())
    }

    pub fn set_row_style<I, D>(&mut self, row: isize, decls: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDecl>,
    {
        let row = self.resolve_row(row)?;
        self.rows[row].style.append(decls);
        Ok(())
    }

    pub fn set_cell_style<I, D>(&mut self, row: isize, col: isize, decls: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDecl>,
    {
        let row = self.resolve_row(row)?;
        let col = self.check_col(col)?;
        self.rows[row].cells[col].style.append(decls);
        Ok(())
    }

    /// Appends the declarations to every cell currently in the table.
    pub fn set_all_cells_style<I, D>(&mut self, decls: I)
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDecl>,
    {
        let decls: Vec<StyleDecl> = decls.into_iter().map(Into::into).collect();
        for cell in self.rows.iter_mut().flat_map(|row| row.cells.iter_mut()) {
            cell.style.append(decls.iter().cloned());
        }
    }

    /// Table-wide default: the lowest layer of every cell's inline style.
    pub fn set_table_style<I, D>(&mut self, decls: I)
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDecl>,
    {
        self.table_style.append(decls);
    }

    /// Style of the notice written when the table has columns but no rows.
    pub fn set_no_rows_style<I, D>(&mut self, decls: I)
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDecl>,
    {
        self.no_rows_style.append(decls);
    }

    /// Style of the notice written when the table has no columns.
    pub fn set_no_headers_style<I, D>(&mut self, decls: I)
    where
        I: IntoIterator<Item = D>,
        D: Into<StyleDecl>,
    {
        self.no_headers_style.append(decls);
    }

    /// Sets an HTML-only column width, e.g. `(12, "ch")` or `(200, "px")`.
    pub fn set_col_html_width(
        &mut self,
        col: isize,
        value: u32,
        unit: impl Into<String>,
    ) -> Result<(), TableError> {
        let col = self.check_col(col)?;
        self.columns[col].html_width = Some(HtmlWidth {
            value,
            unit: unit.into(),
        });
        Ok(())
    }

    pub fn title_style(&self) -> &StyleList {
        &self.title.style
    }

    pub fn section_style(&self, section: Section) -> &StyleList {
        &self.sections[section.index()].style
    }

    pub fn header_style(&self) -> &StyleList {
        &self.header_style
    }

    pub fn table_style(&self) -> &StyleList {
        &self.table_style
    }

    pub fn no_rows_style(&self) -> &StyleList {
        &self.no_rows_style
    }

    pub fn no_headers_style(&self) -> &StyleList {
        &self.no_headers_style
    }

    /// Inline style of a body cell: table default, row, column, then cell.
    ///
    /// Returns an empty string for invalid indices.
    pub fn cell_inline_style(&self, row: usize, col: usize) -> String {
        match (self.rows.get(row), self.columns.get(col)) {
            (Some(r), Some(c)) => StyleList::layered(&[
                &self.table_style,
                &r.style,
                &c.style,
                &r.cells[col].style,
            ]),
            _ => String::new(),
        }
    }
}
