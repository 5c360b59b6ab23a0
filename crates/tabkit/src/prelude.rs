//! Convenient imports for building and rendering tables.
//!
//! ```rust
//! use tabkit::prelude::*;
//!
//! let mut table = Table::new();
//! table.add_column("Name", 0, CellType::String, Justify::Left);
//! table.add_row();
//! table.put_str(-1, 0, "Al");
//!
//! let mut out = Vec::new();
//! render_to(&table, OutputFormat::Text, &mut out, None).unwrap();
//! ```

pub use crate::render::{render_many_to, render_to, OutputFormat, PdfBridge, PdfOption};
pub use crate::{CellType, Justify, RenderError, Section, Table, TableError};
