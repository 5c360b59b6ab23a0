//! PDF output by way of an HTML-to-PDF converter.
//!
//! The table is rendered to HTML and handed, with an ordered list of
//! converter options, to a [`PdfRenderer`]. The default renderer,
//! [`CommandRenderer`], pipes the document through an external program
//! (`wkhtmltopdf` unless told otherwise):
//!
//! ```text
//! wkhtmltopdf [flag [value]]... - -
//! ```
//!
//! reading HTML on stdin and writing PDF on stdout.
//!
//! Any renderer can stand in for the external program, including a closure:
//!
//! ```rust
//! use tabkit::render::{PdfBridge, PdfOption};
//! use tabkit::{CellType, Justify, PdfError, Table};
//!
//! let mut table = Table::new();
//! table.add_column("Name", 0, CellType::String, Justify::Left);
//! table.add_row();
//! table.put_str(-1, 0, "Al");
//!
//! let bridge = PdfBridge::new(|html: &[u8], _opts: &[PdfOption]| -> Result<Vec<u8>, PdfError> {
//!     Ok(html.to_vec())
//! });
//! let bytes = bridge.render(&table).unwrap();
//! assert!(bytes.starts_with(b"<!DOCTYPE html>"));
//! ```

use std::fmt;
use std::io::Write;
use std::time::Duration;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tabkit_pipe::{CommandPipe, PipeTarget};

use super::html;
use crate::error::{PdfError, RenderError};
use crate::Table;

/// Program run by [`CommandRenderer::default`].
pub const DEFAULT_CONVERTER: &str = "wkhtmltopdf";

/// One converter option: a flag and an optional value, e.g.
/// `--page-size Letter` or `--no-collate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfOption {
    pub flag: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl PdfOption {
    pub fn flag(flag: impl Into<String>) -> Self {
        PdfOption {
            flag: flag.into(),
            value: None,
        }
    }

    pub fn with_value(flag: impl Into<String>, value: impl Into<String>) -> Self {
        PdfOption {
            flag: flag.into(),
            value: Some(value.into()),
        }
    }
}

impl fmt::Display for PdfOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {}", self.flag, value),
            None => f.write_str(&self.flag),
        }
    }
}

/// Converts an HTML document to PDF bytes.
pub trait PdfRenderer {
    fn render(&self, html: &[u8], options: &[PdfOption]) -> Result<Vec<u8>, PdfError>;
}

impl<F> PdfRenderer for F
where
    F: Fn(&[u8], &[PdfOption]) -> Result<Vec<u8>, PdfError>,
{
    fn render(&self, html: &[u8], options: &[PdfOption]) -> Result<Vec<u8>, PdfError> {
        self(html, options)
    }
}

/// Runs an external converter that reads HTML on stdin and writes PDF on
/// stdout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandRenderer {
    program: String,
    timeout: Option<Duration>,
}

impl Default for CommandRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER)
    }
}

impl CommandRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        CommandRenderer {
            program: program.into(),
            timeout: None,
        }
    }

    /// Kills the converter if it runs longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Command-line arguments for `options`: each flag followed by its
    /// value when present, then `-` for stdin and `-` for stdout.
    pub fn arguments(options: &[PdfOption]) -> Vec<String> {
        let mut args = Vec::with_capacity(options.len() * 2 + 2);
        for option in options {
            args.push(option.flag.clone());
            if let Some(value) = &option.value {
                args.push(value.clone());
            }
        }
        args.push("-".to_string());
        args.push("-".to_string());
        args
    }

    fn command(&self, options: &[PdfOption]) -> CommandPipe {
        let pipe = CommandPipe::new(self.program.clone()).args(Self::arguments(options));
        match self.timeout {
            Some(timeout) => pipe.with_timeout(timeout),
            None => pipe,
        }
    }
}

impl PdfRenderer for CommandRenderer {
    fn render(&self, html: &[u8], options: &[PdfOption]) -> Result<Vec<u8>, PdfError> {
        debug!(
            "running {} with {} option(s) on {} bytes of html",
            self.program,
            options.len(),
            html.len()
        );
        Ok(self.command(options).pipe(html)?)
    }
}

/// Pairs a [`PdfRenderer`] with the options passed on every conversion.
pub struct PdfBridge {
    renderer: Box<dyn PdfRenderer>,
    options: Vec<PdfOption>,
}

impl Default for PdfBridge {
    fn default() -> Self {
        Self::new(CommandRenderer::default())
    }
}

impl fmt::Debug for PdfBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PdfBridge")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl PdfBridge {
    pub fn new(renderer: impl PdfRenderer + 'static) -> Self {
        PdfBridge {
            renderer: Box::new(renderer),
            options: Vec::new(),
        }
    }

    /// Appends a converter option. Options are passed in insertion order.
    pub fn option(mut self, option: PdfOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = PdfOption>,
    {
        self.options.extend(options);
        self
    }

    pub fn get_options(&self) -> &[PdfOption] {
        &self.options
    }

    /// Renders `table` to PDF bytes.
    pub fn render(&self, table: &Table) -> Result<Vec<u8>, RenderError> {
        let document = html::render(table)?;
        self.convert(document.as_bytes())
    }

    /// Renders several tables into one PDF, one page section per table.
    /// The converter runs once.
    pub fn render_many(&self, tables: &[Table]) -> Result<Vec<u8>, RenderError> {
        let document = html::render_many(tables)?;
        self.convert(document.as_bytes())
    }

    /// Writes the PDF for `table` to `w`. Nothing is written unless the
    /// conversion succeeds.
    pub fn write<W: Write + ?Sized>(&self, table: &Table, w: &mut W) -> Result<(), RenderError> {
        let bytes = self.render(table)?;
        w.write_all(&bytes)?;
        Ok(())
    }

    pub fn write_many<W: Write + ?Sized>(
        &self,
        tables: &[Table],
        w: &mut W,
    ) -> Result<(), RenderError> {
        let bytes = self.render_many(tables)?;
        w.write_all(&bytes)?;
        Ok(())
    }

    fn convert(&self, html: &[u8]) -> Result<Vec<u8>, RenderError> {
        match self.renderer.render(html, &self.options) {
            Ok(pdf) if pdf.is_empty() => {
                warn!("PDF converter produced no output");
                Err(PdfError::EmptyOutput.into())
            }
            Ok(pdf) => Ok(pdf),
            Err(err) => {
                warn!("PDF conversion failed: {}", err);
                Err(err.into())
            }
        }
    }
}
