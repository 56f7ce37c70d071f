//! rlreport core library — column data types, dataset loading, config, errors.
//!
//! - [`types`] — [`ColumnSet`]
//! - [`dataset`] — load a [`ColumnSet`] from YAML or JSON
//! - [`config`] — [`ReportConfig`]
//! - [`error`] — [`DataError`], [`ConfigError`], [`MalformedInput`]

pub mod config;
pub mod dataset;
pub mod error;
pub mod types;

pub use config::{ReportConfig, DEFAULT_OUTPUT};
pub use dataset::{load_column_set, DataFormat};
pub use error::{ConfigError, DataError, MalformedInput};
pub use types::ColumnSet;
