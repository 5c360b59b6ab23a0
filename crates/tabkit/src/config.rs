//! Per-table formatting defaults.
//!
//! A [`TableDefaults`] value is carried by every [`Table`](crate::Table), so
//! two tables in the same process can use different date formats or column
//! separators. Defaults can be written inline or loaded from YAML/JSON:
//!
//! ```rust
//! use tabkit::TableDefaults;
//!
//! let defaults = TableDefaults::from_yaml(r#"
//! separator: " | "
//! date_format: "%Y-%m-%d"
//! "#).unwrap();
//!
//! assert_eq!(defaults.separator, " | ");
//! assert_eq!(defaults.date_format, "%Y-%m-%d");
//! // Unset keys keep their built-in values
//! assert_eq!(defaults.float_format, "#,###.##");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default column separator for text output.
pub const DEFAULT_SEPARATOR: &str = "  ";
/// Default chrono pattern for date cells.
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";
/// Default chrono pattern for datetime cells.
pub const DEFAULT_DATETIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";
/// Default pattern for float cells: grouped thousands, two decimals.
pub const DEFAULT_FLOAT_FORMAT: &str = "#,###.##";
/// Default pattern for integer cells: plain digits.
pub const DEFAULT_INT_FORMAT: &str = "#";

/// Error raised while loading [`TableDefaults`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YAML defaults: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON defaults: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported defaults file extension: {}", .0.display())]
    UnknownExtension(PathBuf),
}

/// Formatting defaults applied when a column does not set its own format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableDefaults {
    /// Text placed between columns in text output.
    pub separator: String,
    /// chrono pattern for [`CellType::Date`](crate::CellType::Date) columns.
    pub date_format: String,
    /// chrono pattern for [`CellType::DateTime`](crate::CellType::DateTime) columns.
    pub datetime_format: String,
    /// Number pattern for float columns.
    pub float_format: String,
    /// Number pattern for integer columns.
    pub int_format: String,
}

impl Default for TableDefaults {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            float_format: DEFAULT_FLOAT_FORMAT.to_string(),
            int_format: DEFAULT_INT_FORMAT.to_string(),
        }
    }
}

impl TableDefaults {
    /// Parses defaults from YAML. Missing keys keep their built-in values.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses defaults from JSON. Missing keys keep their built-in values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads defaults from a `.yaml`, `.yml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            _ => Err(ConfigError::UnknownExtension(path.to_path_buf())),
        }
    }
}
