//! rlreport — render AsciiDoc reward reports from column data.
//!
//! # Usage
//!
//! ```text
//! rlreport render [--config report.yaml] [--template T] [--data D] [--output O]
//!                 [--escape-cells] [--dry-run] [--stdout]
//! rlreport table --data D [--escape-cells]
//! rlreport diff [--config report.yaml] [--template T] [--data D] [--output O]
//! ```
//!
//! Set `RUST_LOG` to control diagnostics on stderr (default `warn`).

mod commands;
mod writer;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, render::RenderArgs, table::TableArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "rlreport",
    version,
    about = "Render AsciiDoc reports of per-agent reward statistics",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Substitute placeholders in a template and write the report.
    Render(RenderArgs),

    /// Print the per-agent reward table for a dataset.
    Table(TableArgs),

    /// Show a unified diff of what `render` would change in the output file.
    Diff(DiffArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::Table(args) => args.run(),
        Commands::Diff(args) => args.run(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
