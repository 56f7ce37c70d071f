//! `rlreport render` — substitute placeholders and write the report.

use anyhow::Result;
use clap::Args;

use crate::commands::{render_report, SourceArgs};
use crate::writer::{atomic_write, WriteResult};

/// Arguments for `rlreport render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Show what would be written without writing the output file.
    #[arg(long, conflicts_with = "stdout")]
    pub dry_run: bool,

    /// Print the rendered report instead of writing it.
    #[arg(long)]
    pub stdout: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let config = self.sources.resolve()?;
        let report = render_report(&config)?;

        if self.stdout {
            print!("{report}");
            if !report.ends_with('\n') {
                println!();
            }
            return Ok(());
        }

        match atomic_write(&config.output, &report, self.dry_run)? {
            WriteResult::Written { path } => println!("✎  wrote {}", path.display()),
            WriteResult::WouldWrite { path } => println!("[dry-run] ~  would write {}", path.display()),
            WriteResult::Unchanged { path } => println!("·  unchanged {}", path.display()),
        }
        Ok(())
    }
}
