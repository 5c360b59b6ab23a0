//! Error types for table mutation and rendering.
//!
//! [`TableError`] covers index validation and the structural preconditions
//! every renderer checks (columns declared, rows present). [`RenderError`]
//! wraps those plus everything that can go wrong while producing output:
//! template failures, sink I/O, and the PDF converter.
//!
//! Setting a cell with a value of the wrong type is deliberately *not* an
//! error: the `put_*` family returns `false` instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Index and structure errors raised by [`Table`](crate::Table) operations.
///
/// Negative and too-large indices are distinct variants so callers can tell
/// "you passed -3" apart from "the table only has 2 rows".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Row number is less than zero: {0}")]
    RowNegative(isize),

    #[error("Row number > no of rows in table: {index} (rows: {count})")]
    RowOutOfRange { index: isize, count: usize },

    #[error("Column number is less than zero: {0}")]
    ColumnNegative(isize),

    #[error("Column number > no of columns in table: {index} (columns: {count})")]
    ColumnOutOfRange { index: isize, count: usize },

    #[error("No Header Columns")]
    NoColumns,

    #[error("No Records")]
    NoRows,
}

/// Failures reported by a [`PdfRenderer`](crate::render::PdfRenderer).
#[derive(Debug, Error)]
pub enum PdfError {
    #[error(transparent)]
    Pipe(#[from] tabkit_pipe::PipeError),

    #[error("no PDF renderer configured")]
    NoRenderer,

    #[error("PDF renderer returned no output")]
    EmptyOutput,

    #[error("{0}")]
    Renderer(String),
}

/// Error type for every render entry point.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error("unrecognized format: {0}")]
    UnsupportedFormat(String),

    #[error("no tables to render")]
    NoTables,

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("could not read {}: {source}", path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("PDF output failed: {0}")]
    Pdf(#[from] PdfError),
}

impl RenderError {
    /// Returns the table error if this failure came from a structural or
    /// index check.
    pub fn table_error(&self) -> Option<&TableError> {
        match self {
            RenderError::Table(err) => Some(err),
            _ => None,
        }
    }
}
