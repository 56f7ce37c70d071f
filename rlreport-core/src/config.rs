//! Report configuration file.
//!
//! ```yaml
//! template: template.adoc   # required
//! data: agents.yaml         # required
//! output: result.adoc       # default "result.adoc"
//! escape_cells: false       # default false
//! ```
//!
//! Relative paths are resolved against the directory that holds the config
//! file, so a config can be used from any working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name the rendered document is written to when nothing else is given.
pub const DEFAULT_OUTPUT: &str = "result.adoc";

/// Parsed report configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Template document containing `$name` / `${name}` markers.
    pub template: PathBuf,
    /// Column-oriented dataset (YAML or JSON).
    pub data: PathBuf,
    /// Destination of the rendered document.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Escape `|` inside table cells.
    #[serde(default)]
    pub escape_cells: bool,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl ReportConfig {
    /// Load a config from `path` and resolve its relative paths against the
    /// config file's parent directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ReportConfig =
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        tracing::debug!(path = %path.display(), "loaded report config");
        Ok(config.relative_to(base))
    }

    /// Re-anchor every relative path onto `base`.
    pub fn relative_to(self, base: &Path) -> Self {
        let anchor = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        ReportConfig {
            template: anchor(self.template),
            data: anchor(self.data),
            output: anchor(self.output),
            escape_cells: self.escape_cells,
        }
    }
}
