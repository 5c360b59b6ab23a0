//! Renderers and the format dispatcher.
//!
//! Each output format has its own module with `render` (to a `String` or
//! bytes) and `write` (to any [`std::io::Write`]) entry points. The
//! functions here pick a renderer from an [`OutputFormat`], or from its name:
//!
//! ```rust
//! use tabkit::render::{render_named, OutputFormat};
//! use tabkit::{CellType, Justify, RenderError, Table};
//!
//! let mut table = Table::new();
//! table.add_column("Name", 10, CellType::String, Justify::Left);
//! table.add_row();
//! table.put_str(-1, 0, "Al");
//!
//! let mut out = Vec::new();
//! render_named(&table, "csv", &mut out, None).unwrap();
//! assert_eq!(out, b"\"Name\"\n\"Al\"\n");
//!
//! let err = render_named(&table, "docx", &mut out, None).unwrap_err();
//! assert!(matches!(err, RenderError::UnsupportedFormat(_)));
//! ```

pub mod csv;
pub mod html;
pub mod pdf;
pub mod text;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

pub use pdf::{CommandRenderer, PdfBridge, PdfOption, PdfRenderer, DEFAULT_CONVERTER};

use crate::error::{PdfError, RenderError};
use crate::Table;

/// The output formats a table can be rendered to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Csv,
    Html,
    Pdf,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Csv,
        OutputFormat::Html,
        OutputFormat::Pdf,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Html => "html",
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    /// Case-insensitive; `txt` is accepted for text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "html" => Ok(OutputFormat::Html),
            "pdf" => Ok(OutputFormat::Pdf),
            _ => Err(RenderError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Writes `table` to `sink` in `format`.
///
/// PDF output needs a bridge; without one the call fails with
/// [`PdfError::NoRenderer`]. Text and HTML output write a notice to the sink
/// before failing on a table without columns or rows.
pub fn render_to<W: Write + ?Sized>(
    table: &Table,
    format: OutputFormat,
    sink: &mut W,
    pdf: Option<&PdfBridge>,
) -> Result<(), RenderError> {
    debug!("rendering table as {}", format);
    match format {
        OutputFormat::Text => text::write(table, sink),
        OutputFormat::Csv => csv::write(table, sink),
        OutputFormat::Html => html::write(table, sink),
        OutputFormat::Pdf => match pdf {
            Some(bridge) => bridge.write(table, sink),
            None => Err(PdfError::NoRenderer.into()),
        },
    }
}

/// Like [`render_to`], with the format given by name.
pub fn render_named<W: Write + ?Sized>(
    table: &Table,
    format: &str,
    sink: &mut W,
    pdf: Option<&PdfBridge>,
) -> Result<(), RenderError> {
    let format: OutputFormat = format.parse()?;
    render_to(table, format, sink, pdf)
}

/// Writes several tables to `sink` in `format`.
///
/// Text and CSV renderings are separated by a blank line. HTML and PDF
/// produce a single document with a page break between tables. Nothing is
/// written unless every table renders.
pub fn render_many_to<W: Write + ?Sized>(
    tables: &[Table],
    format: OutputFormat,
    sink: &mut W,
    pdf: Option<&PdfBridge>,
) -> Result<(), RenderError> {
    debug!("rendering {} tables as {}", tables.len(), format);
    let bytes = match format {
        OutputFormat::Text => text::render_many(tables)?.into_bytes(),
        OutputFormat::Csv => csv::render_many(tables)?.into_bytes(),
        OutputFormat::Html => html::render_many(tables)?.into_bytes(),
        OutputFormat::Pdf => match pdf {
            Some(bridge) => bridge.render_many(tables)?,
            None => return Err(PdfError::NoRenderer.into()),
        },
    };
    sink.write_all(&bytes)?;
    Ok(())
}
