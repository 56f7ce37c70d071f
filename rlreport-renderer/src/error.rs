//! Error types for rlreport-renderer.

use thiserror::Error;

use rlreport_core::MalformedInput;

/// Failures of a single substitution pass over a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A well-formed marker names something the lookup does not bind.
    #[error("unbound template marker '{name}' at line {line}, column {column}")]
    UnboundMarker {
        name: String,
        line: usize,
        column: usize,
    },

    /// A `$` that starts neither `$$`, `$name` nor `${name}`.
    #[error("invalid placeholder at line {line}, column {column}")]
    InvalidPlaceholder { line: usize, column: usize },
}

/// All errors that can arise from rendering tables and documents.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The column data violates the equal-length / non-empty invariant.
    #[error("{0}")]
    MalformedInput(#[from] MalformedInput),

    /// The template could not be substituted.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}
