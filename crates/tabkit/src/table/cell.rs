//! Typed cell values.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::style::StyleList;

/// The type a column declares for all of its cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    String,
    Int,
    Float,
    Date,
    DateTime,
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellType::String => "string",
            CellType::Int => "int",
            CellType::Float => "float",
            CellType::Date => "date",
            CellType::DateTime => "datetime",
        };
        f.write_str(name)
    }
}

/// The value held by a cell.
///
/// `Blank` is what every cell of a freshly appended row holds until a value
/// of the column's type is put into it.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Blank,
    Str(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// The declared type this value satisfies, `None` for blanks.
    pub fn cell_type(&self) -> Option<CellType> {
        match self {
            CellValue::Blank => None,
            CellValue::Str(_) => Some(CellType::String),
            CellValue::Int(_) => Some(CellType::Int),
            CellValue::Float(_) => Some(CellType::Float),
            CellValue::Date(_) => Some(CellType::Date),
            CellValue::DateTime(_) => Some(CellType::DateTime),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    /// Natural ordering used by [`Table::sort`](crate::Table::sort).
    ///
    /// Strings compare lexically, numbers numerically (floats by IEEE total
    /// order), dates chronologically. Blanks sort before every value. Values
    /// of different types never meet inside one column; they fall back to
    /// comparing by type.
    pub fn cmp_natural(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Str(a), CellValue::Str(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Float(a), CellValue::Float(b)) => a.total_cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            (CellValue::DateTime(a), CellValue::DateTime(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            CellValue::Blank => 0,
            CellValue::Str(_) => 1,
            CellValue::Int(_) => 2,
            CellValue::Float(_) => 3,
            CellValue::Date(_) => 4,
            CellValue::DateTime(_) => 5,
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Str(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Str(s)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Int(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

/// One cell: its value and the styles scoped to it alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub(crate) value: CellValue,
    pub(crate) style: StyleList,
}

pub(crate) static BLANK_CELL: Cell = Cell {
    value: CellValue::Blank,
    style: StyleList::new(),
};

impl Cell {
    pub fn new(value: impl Into<CellValue>) -> Self {
        Cell {
            value: value.into(),
            style: StyleList::new(),
        }
    }

    pub fn value(&self) -> &CellValue {
        &self.value
    }

    pub fn style(&self) -> &StyleList {
        &self.style
    }

    pub fn is_blank(&self) -> bool {
        self.value.is_blank()
    }

    /// String content, or `""` when the cell holds anything else.
    pub fn as_str(&self) -> &str {
        match &self.value {
            CellValue::Str(s) => s,
            _ => "",
        }
    }

    pub fn as_int(&self) -> i64 {
        match self.value {
            CellValue::Int(v) => v,
            _ => 0,
        }
    }

    pub fn as_float(&self) -> f64 {
        match self.value {
            CellValue::Float(v) => v,
            _ => 0.0,
        }
    }

    pub fn as_date(&self) -> NaiveDate {
        match self.value {
            CellValue::Date(d) => d,
            _ => NaiveDate::default(),
        }
    }

    pub fn as_datetime(&self) -> NaiveDateTime {
        match self.value {
            CellValue::DateTime(dt) => dt,
            _ => NaiveDateTime::default(),
        }
    }
}
