//! `rlreport diff` — show a unified diff of what `render` would write.

use anyhow::Result;
use clap::Args;
use similar::TextDiff;

use crate::commands::{render_report, SourceArgs};
use crate::writer::read_existing_or_empty;

/// Arguments for `rlreport diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub sources: SourceArgs,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let config = self.sources.resolve()?;
        let rendered = render_report(&config)?;
        let existing = read_existing_or_empty(&config.output)?;

        if existing == rendered {
            println!("No differences for '{}'.", config.output.display());
            return Ok(());
        }

        let name = config.output.display().to_string();
        let unified = unified_diff(&existing, &rendered, &name);
        print!("{unified}");
        if !unified.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}

pub(crate) fn unified_diff(old: &str, new: &str, name: &str) -> String {
    let old_header = format!("a/{name}");
    let new_header = format!("b/{name}");
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_has_headers_and_hunks() {
        let out = unified_diff("a\nb\n", "a\nc\n", "result.adoc");
        assert!(out.contains("--- a/result.adoc"));
        assert!(out.contains("+++ b/result.adoc"));
        assert!(out.contains("-b"));
        assert!(out.contains("+c"));
        assert!(out.contains("@@"));
    }
}
