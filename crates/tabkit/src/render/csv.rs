//! CSV output.
//!
//! Every field is quoted, embedded quotes are doubled, and records end with
//! `\n`. Cells use the same per-type formatting as text output but are never
//! padded, wrapped or cut. Styles do not apply.

use std::io::{self, Write};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::debug;

use crate::error::RenderError;
use crate::Table;

fn writer<W: Write>(sink: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(sink)
}

fn write_records<W: Write>(table: &Table, out: &mut csv::Writer<W>) -> Result<(), RenderError> {
    out.write_record(table.columns().iter().map(|c| c.title()))?;
    for row in 0..table.row_count() {
        let record: Vec<String> = (0..table.col_count())
            .map(|col| table.formatted(row, col))
            .collect();
        out.write_record(&record)?;
    }
    out.flush()?;
    Ok(())
}

/// Renders `table` as CSV.
pub fn render(table: &Table) -> Result<String, RenderError> {
    table.has_headers()?;
    table.has_data()?;
    debug!("rendering csv: {} rows", table.row_count());

    let mut out = writer(Vec::new());
    write_records(table, &mut out)?;
    let bytes = out
        .into_inner()
        .map_err(|err| RenderError::Io(err.into_error()))?;
    String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err).into())
}

/// Writes CSV to `w`. Nothing is written when the table has no columns or
/// no rows.
pub fn write<W: Write>(table: &Table, w: W) -> Result<(), RenderError> {
    table.has_headers()?;
    table.has_data()?;
    debug!("writing csv: {} rows", table.row_count());
    write_records(table, &mut writer(w))
}

/// Renders several tables, separated by a blank line.
///
/// An empty slice renders as an empty string.
pub fn render_many(tables: &[Table]) -> Result<String, RenderError> {
    let parts = tables.iter().map(render).collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join("\n"))
}
