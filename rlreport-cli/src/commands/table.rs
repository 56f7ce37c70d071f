//! `rlreport table` — print the reward table for a dataset.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use rlreport_core::load_column_set;
use rlreport_renderer::{render_table_with, TableOptions};

/// Arguments for `rlreport table`.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Column dataset (YAML or JSON).
    #[arg(long, short = 'd')]
    pub data: PathBuf,

    /// Escape `|` inside table cells.
    #[arg(long)]
    pub escape_cells: bool,
}

impl TableArgs {
    pub fn run(self) -> Result<()> {
        let data = load_column_set(&self.data)?;
        let table = render_table_with(
            &data,
            TableOptions {
                escape_cells: self.escape_cells,
            },
        )
        .with_context(|| format!("cannot render table from {}", self.data.display()))?;
        println!("{table}");
        Ok(())
    }
}
