//! Error types for rlreport-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from loading column data.
#[derive(Debug, Error)]
pub enum DataError {
    /// Underlying I/O failure while reading a dataset file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset file did not exist.
    #[error("dataset not found at {path}")]
    NotFound { path: PathBuf },

    /// YAML/JSON parse error on load — includes the file path.
    #[error("failed to parse dataset at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON parse error on load for `.json` datasets.
    #[error("failed to parse dataset at {path}: {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A [`ColumnSet`](crate::ColumnSet) that violates the non-empty /
/// equal-length invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    /// A column set with zero columns cannot be rendered.
    #[error("malformed input: column set has no columns")]
    NoColumns,

    /// Columns of unequal length.
    #[error(
        "malformed input: column '{column}' has {found} values, expected {expected}"
    )]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// All errors that can arise from loading a report configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure while reading the config file.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file did not exist.
    #[error("config not found at {path}")]
    NotFound { path: PathBuf },

    /// YAML parse error — includes file path and line context from serde_yaml.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
