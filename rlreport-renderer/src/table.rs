//! AsciiDoc table rendering from a [`ColumnSet`].
//!
//! # Output format
//!
//! ```text
//! |===
//! |agent |policy_reward_mean
//!
//! |Pacman_0
//! |11.15
//!
//! |Pacman_1
//! |23.81
//!
//! |===
//! ```
//!
//! Columns appear in ascending name order. Each row is a block of one `|cell`
//! line per column; row blocks are separated by a blank line. There is no
//! newline after the closing `|===`.
//!
//! Cell values are written verbatim unless [`TableOptions::escape_cells`] is
//! set. A raw `|` inside a value starts a new cell in AsciiDoc and a newline
//! breaks the row layout; only the former is escaped.

use std::fmt;

use rlreport_core::ColumnSet;

use crate::error::RenderError;

/// Block delimiter that opens and closes an AsciiDoc table.
pub const TABLE_DELIMITER: &str = "|===";

/// Cell separator.
pub const CELL_PREFIX: char = '|';

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOptions {
    /// Write `|` inside cell values as `\|`.
    pub escape_cells: bool,
}

/// A complete, immutable AsciiDoc table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    text: String,
    rows: usize,
    columns: usize,
}

impl RenderedTable {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of data rows (excluding the header).
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl fmt::Display for RenderedTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for RenderedTable {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Render `columns` with default options (cell values written verbatim).
pub fn render_table(columns: &ColumnSet) -> Result<RenderedTable, RenderError> {
    render_table_with(columns, TableOptions::default())
}

/// Render `columns` as an AsciiDoc table.
///
/// Fails with [`RenderError::MalformedInput`] when the set has no columns or
/// the columns differ in length.
pub fn render_table_with(
    columns: &ColumnSet,
    options: TableOptions,
) -> Result<RenderedTable, RenderError> {
    let n_rows = columns.validate()?;

    let header = columns
        .column_names()
        .map(|name| format!("{CELL_PREFIX}{name}"))
        .collect::<Vec<_>>()
        .join(" ");

    let rows: Vec<String> = (0..n_rows)
        .map(|row_i| {
            let mut row = String::new();
            for (_, values) in columns.iter() {
                row.push(CELL_PREFIX);
                push_cell(&mut row, &values[row_i], options);
                row.push('\n');
            }
            row
        })
        .collect();
    let body = rows.join("\n");

    let text = format!("{TABLE_DELIMITER}\n{header}\n\n{body}\n{TABLE_DELIMITER}");
    Ok(RenderedTable {
        text,
        rows: n_rows,
        columns: columns.len(),
    })
}

fn push_cell(out: &mut String, value: &str, options: TableOptions) {
    if !options.escape_cells {
        out.push_str(value);
        return;
    }
    for ch in value.chars() {
        if ch == CELL_PREFIX {
            out.push('\\');
        }
        out.push(ch);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
