//! Subcommands and the source flags they share.

pub mod diff;
pub mod render;
pub mod table;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rlreport_core::{load_column_set, ReportConfig, DEFAULT_OUTPUT};
use rlreport_renderer::{template, TableOptions, TemplateResolver};

/// Where the template, data and output live. Flags override `--config`.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// YAML report config (template, data, output, escape_cells).
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// AsciiDoc template containing `$name` / `${name}` markers.
    #[arg(long, short = 't')]
    pub template: Option<PathBuf>,

    /// Column dataset (YAML or JSON mapping of column name to values).
    #[arg(long, short = 'd')]
    pub data: Option<PathBuf>,

    /// Output file [default: result.adoc].
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Escape `|` inside table cells.
    #[arg(long)]
    pub escape_cells: bool,
}

impl SourceArgs {
    /// Merge the config file (if any) with command-line overrides.
    pub fn resolve(&self) -> Result<ReportConfig> {
        let base = match &self.config {
            Some(path) => Some(
                ReportConfig::load(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
            ),
            None => None,
        };

        let template = self
            .template
            .clone()
            .or_else(|| base.as_ref().map(|c| c.template.clone()))
            .context("no template given; pass --template or --config")?;
        let data = self
            .data
            .clone()
            .or_else(|| base.as_ref().map(|c| c.data.clone()))
            .context("no dataset given; pass --data or --config")?;
        let output = self
            .output
            .clone()
            .or_else(|| base.as_ref().map(|c| c.output.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let escape_cells = self.escape_cells || base.as_ref().is_some_and(|c| c.escape_cells);

        Ok(ReportConfig {
            template,
            data,
            output,
            escape_cells,
        })
    }
}

/// Read template and data from disk and render the document.
pub fn render_report(config: &ReportConfig) -> Result<String> {
    let template_text = std::fs::read_to_string(&config.template)
        .with_context(|| format!("failed to read template {}", config.template.display()))?;
    tracing::debug!(
        markers = ?template::identifiers(&template_text),
        path = %config.template.display(),
        "template markers"
    );
    let data = load_column_set(&config.data)?;
    let resolver = TemplateResolver::new(TableOptions {
        escape_cells: config.escape_cells,
    });
    resolver
        .render_document(&template_text, &data)
        .with_context(|| format!("failed to render {}", config.template.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn flags_override_config_values() {
        let dir = TempDir::new().unwrap();
        let cfg = dir.path().join("report.yaml");
        std::fs::write(&cfg, "template: t.adoc\ndata: d.yaml\noutput: out.adoc\n").unwrap();

        let args = SourceArgs {
            config: Some(cfg),
            data: Some(PathBuf::from("other.json")),
            escape_cells: true,
            ..SourceArgs::default()
        };
        let resolved = args.resolve().unwrap();
        assert_eq!(resolved.template, dir.path().join("t.adoc"));
        assert_eq!(resolved.data, PathBuf::from("other.json"));
        assert_eq!(resolved.output, dir.path().join("out.adoc"));
        assert!(resolved.escape_cells);
    }

    #[test]
    fn output_defaults_without_config() {
        let args = SourceArgs {
            template: Some(PathBuf::from("t.adoc")),
            data: Some(PathBuf::from("d.yaml")),
            ..SourceArgs::default()
        };
        let resolved = args.resolve().unwrap();
        assert_eq!(resolved.output, PathBuf::from("result.adoc"));
        assert!(!resolved.escape_cells);
    }

    #[test]
    fn missing_template_is_an_error() {
        let args = SourceArgs {
            data: Some(PathBuf::from("d.yaml")),
            ..SourceArgs::default()
        };
        let err = args.resolve().unwrap_err();
        assert!(err.to_string().contains("--template"), "got: {err}");
    }
}
