//! Loading a [`ColumnSet`] from a dataset file.
//!
//! The format is chosen from the extension: `.json` is parsed with
//! serde_json, everything else with serde_yaml (YAML is a superset of JSON,
//! so unknown extensions still accept JSON content).
//!
//! Loading does not validate column lengths; that happens when a table is
//! rendered, see [`ColumnSet::validate`].

use std::path::Path;

use crate::error::DataError;
use crate::types::ColumnSet;

/// Supported dataset encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Yaml,
    Json,
}

impl DataFormat {
    /// Pick a format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => DataFormat::Json,
            _ => DataFormat::Yaml,
        }
    }
}

/// Parse a column set from already-read text.
pub fn parse_column_set(
    contents: &str,
    format: DataFormat,
    path: &Path,
) -> Result<ColumnSet, DataError> {
    match format {
        DataFormat::Json => serde_json::from_str(contents).map_err(|source| DataError::ParseJson {
            path: path.to_path_buf(),
            source,
        }),
        DataFormat::Yaml => serde_yaml::from_str(contents).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a column set from `path`.
///
/// Returns `DataError::NotFound` if absent and `DataError::Parse` /
/// `DataError::ParseJson` (with path) if malformed.
pub fn load_column_set(path: &Path) -> Result<ColumnSet, DataError> {
    if !path.exists() {
        return Err(DataError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse_column_set(&contents, DataFormat::from_path(path), path)?;
    tracing::debug!(path = %path.display(), columns = set.len(), "loaded dataset");
    Ok(set)
}
