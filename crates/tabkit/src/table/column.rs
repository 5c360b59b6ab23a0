//! Column definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cell::CellType;
use super::style::StyleList;

/// Text justification within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Pad on both sides.
    Center,
}

/// A column width that only applies to HTML output, e.g. `12ch` or `200px`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlWidth {
    pub value: u32,
    pub unit: String,
}

impl fmt::Display for HtmlWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Definition of one column: title, type, widths, justification, format and
/// styles.
///
/// `width` is what the caller declared; `0` means auto-fit to content.
/// `print_width` is the width the layout engine last settled on (see
/// [`Table::tighten_columns`](crate::Table::tighten_columns)).
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDef {
    pub(crate) title: String,
    pub(crate) cell_type: CellType,
    pub(crate) width: usize,
    pub(crate) print_width: usize,
    pub(crate) justify: Justify,
    pub(crate) format: Option<String>,
    pub(crate) header_style: StyleList,
    pub(crate) style: StyleList,
    pub(crate) html_width: Option<HtmlWidth>,
}

impl ColumnDef {
    pub(crate) fn new(title: String, width: usize, cell_type: CellType, justify: Justify) -> Self {
        ColumnDef {
            title,
            cell_type,
            width,
            print_width: width,
            justify,
            format: None,
            header_style: StyleList::new(),
            style: StyleList::new(),
            html_width: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Declared width; `0` for auto-fit columns.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_auto_fit(&self) -> bool {
        self.width == 0
    }

    pub fn print_width(&self) -> usize {
        self.print_width
    }

    pub fn justify(&self) -> Justify {
        self.justify
    }

    /// Column-specific format pattern, if any.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn header_style(&self) -> &StyleList {
        &self.header_style
    }

    pub fn style(&self) -> &StyleList {
        &self.style
    }

    pub fn html_width(&self) -> Option<&HtmlWidth> {
        self.html_width.as_ref()
    }
}
