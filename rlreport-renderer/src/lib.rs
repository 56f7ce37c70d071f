//! # rlreport-renderer
//!
//! Renders AsciiDoc reports: per-agent reward statistics become an AsciiDoc
//! table, and the table is substituted into a template with `$name` /
//! `${name}` markers.
//!
//! ## Usage
//!
//! ```rust
//! use rlreport_core::ColumnSet;
//! use rlreport_renderer::render_document;
//!
//! let data = ColumnSet::from_iter([
//!     ("agent", vec!["Pacman_0", "Pacman_1"]),
//!     ("policy_reward_mean", vec!["11.15", "23.81"]),
//! ]);
//! let doc = render_document("Results: ${reward_agents_table}", &data).unwrap();
//! assert!(doc.starts_with("Results: |===\n|agent |policy_reward_mean\n"));
//! ```

pub mod error;
pub mod placeholder;
pub mod resolver;
pub mod table;
pub mod template;

pub use error::{RenderError, TemplateError};
pub use placeholder::{Placeholder, PlaceholderMap};
pub use resolver::{build_placeholder_map, render_document, resolve_placeholder, TemplateResolver};
pub use table::{render_table, render_table_with, RenderedTable, TableOptions};
