//! Fixed-width text output.
//!
//! ```text
//! GOTABLE
//! A Smoke Test
//! Name        Age
//! ---------------
//! Mary M.      47
//! ```
//!
//! The title and each section line are printed only when non-empty. Header
//! titles wrap within their column like string cells. A dash rule follows
//! the header, and rows marked with [`Table::add_line_before`] or
//! [`Table::add_line_after`] get rules of their own.

use std::fmt;
use std::io::Write;

use log::debug;

use crate::error::RenderError;
use crate::layout::{self, resolve_widths};
use crate::table::Section;
use crate::Table;

/// Renders `table` as aligned text. Every line ends with `\n`.
pub fn render(table: &Table) -> Result<String, RenderError> {
    table.has_headers()?;
    table.has_data()?;

    let widths = resolve_widths(table);
    debug!(
        "rendering text: {} rows, widths {:?}",
        table.row_count(),
        widths.widths
    );
    let rule = layout::rule_line(table, &widths);

    let mut out = String::new();
    push_heading(&mut out, table.title());
    for section in Section::ALL {
        push_heading(&mut out, table.section(section));
    }

    for line in layout::header_lines(table, &widths) {
        push_line(&mut out, &line);
    }
    push_line(&mut out, &rule);

    for (idx, row) in table.rows().iter().enumerate() {
        if row.rule_before() {
            push_line(&mut out, &rule);
        }
        for line in layout::row_lines(table, idx, &widths) {
            push_line(&mut out, &line);
        }
        if row.rule_after() {
            push_line(&mut out, &rule);
        }
    }
    Ok(out)
}

/// Writes the text rendering to `w`.
///
/// When the table has no columns or no rows, the error message is written
/// as a line of its own before the error is returned.
pub fn write<W: Write + ?Sized>(table: &Table, w: &mut W) -> Result<(), RenderError> {
    match render(table) {
        Ok(text) => {
            w.write_all(text.as_bytes())?;
            Ok(())
        }
        Err(err) => {
            if err.table_error().is_some() {
                writeln!(w, "{}", err)?;
            }
            Err(err)
        }
    }
}

/// Renders several tables, separated by a blank line.
///
/// An empty slice renders as an empty string.
pub fn render_many(tables: &[Table]) -> Result<String, RenderError> {
    let parts = tables.iter().map(render).collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join("\n"))
}

fn push_heading(out: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    out.push_str(text);
    if !text.ends_with('\n') {
        out.push('\n');
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Formats as text; on failure the error message is printed instead.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match render(self) {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "{}", err),
        }
    }
}
