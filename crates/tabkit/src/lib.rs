//! # tabkit - Typed Tables for Text, CSV, HTML and PDF
//!
//! `tabkit` accumulates typed rows and columns in memory and renders the
//! finished table as aligned text, CSV, styled HTML, or PDF (HTML piped
//! through an external converter).
//!
//! ## Core Concepts
//!
//! - [`Table`]: columns, rows, rowsets, title and section lines, styles
//! - [`CellType`] / [`CellValue`]: every column declares a type and only
//!   accepts values of that type
//! - [`StyleList`]: CSS-like declarations scoped to the title, sections,
//!   header, columns, rows, cells or the whole table
//! - [`layout`]: width negotiation, wrapping and number/date formatting
//! - [`render`]: one module per output format plus [`render::render_to`]
//!
//! ## Quick Start
//!
//! ```rust
//! use tabkit::{CellType, Justify, Section, Table};
//!
//! let mut table = Table::new();
//! table.set_title("Winners");
//! table.set_section(Section::One, "Season 1");
//! table.add_column("Name", 0, CellType::String, Justify::Left);
//! table.add_column("Winnings", 0, CellType::Float, Justify::Right);
//!
//! for (name, amount) in [("Mary", 17633.21), ("Lynette", 45373.0)] {
//!     table.add_row();
//!     table.put_str(-1, 0, name);
//!     table.put_float(-1, 1, amount);
//! }
//!
//! let text = tabkit::render::text::render(&table).unwrap();
//! assert_eq!(
//!     text,
//!     "Winners\n\
//!      Season 1\n\
//!      Name      Winnings\n\
//!      ------------------\n\
//!      Mary     17,633.21\n\
//!      Lynette  45,373.00\n"
//! );
//! ```
//!
//! ## Failure Model
//!
//! Index validation and structural checks return [`TableError`]; every
//! renderer returns [`RenderError`]. Cell writes with the wrong type are not
//! errors: they return `false` and leave the cell alone.

pub mod config;
mod error;
pub mod layout;
pub mod prelude;
pub mod render;
mod table;

// Error types
pub use error::{PdfError, RenderError, TableError};

// Table model exports
pub use table::{
    Cell, CellType, CellValue, ColumnDef, HtmlWidth, Justify, Row, RowsetId, Section, StyleDecl,
    StyleList, Table,
};

// Configuration exports
pub use config::{ConfigError, TableDefaults};

// Render exports
pub use render::{
    render_many_to, render_named, render_to, CommandRenderer, OutputFormat, PdfBridge, PdfOption,
    PdfRenderer,
};
