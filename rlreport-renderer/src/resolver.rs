//! Placeholder resolution and document rendering.
//!
//! [`TemplateResolver`] fills every [`Placeholder`] from a [`ColumnSet`] and
//! runs one substitution pass over the template. Markers outside the closed
//! placeholder set fail the render with [`TemplateError::UnboundMarker`];
//! placeholders without rendering logic resolve to empty text with a warning.
//!
//! [`TemplateError::UnboundMarker`]: crate::error::TemplateError::UnboundMarker

use rlreport_core::ColumnSet;

use crate::error::RenderError;
use crate::placeholder::{Placeholder, PlaceholderMap};
use crate::table::{render_table_with, TableOptions};
use crate::template;

/// Replacement text for a single placeholder.
pub fn resolve_placeholder(
    placeholder: Placeholder,
    data: &ColumnSet,
    options: TableOptions,
) -> Result<String, RenderError> {
    match placeholder {
        Placeholder::RewardAgentsTable => Ok(render_table_with(data, options)?.into_string()),
        Placeholder::RewardTotalTable | Placeholder::CustomMetricsTable => {
            tracing::warn!(
                placeholder = %placeholder,
                "no substitution implemented for placeholder; rendering empty text"
            );
            Ok(String::new())
        }
    }
}

/// Resolve every placeholder in [`Placeholder::ALL`].
pub fn build_placeholder_map(
    data: &ColumnSet,
    options: TableOptions,
) -> Result<PlaceholderMap, RenderError> {
    let mut map = PlaceholderMap::new();
    for placeholder in Placeholder::ALL {
        map.insert(placeholder, resolve_placeholder(placeholder, data, options)?);
    }
    Ok(map)
}

/// Render `template_text` against `data` with default table options.
pub fn render_document(template_text: &str, data: &ColumnSet) -> Result<String, RenderError> {
    TemplateResolver::default().render_document(template_text, data)
}

/// Renders report templates. Create once and reuse.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateResolver {
    options: TableOptions,
}

impl TemplateResolver {
    pub fn new(options: TableOptions) -> Self {
        TemplateResolver { options }
    }

    pub fn options(&self) -> TableOptions {
        self.options
    }

    /// Resolve all placeholders against `data`.
    pub fn placeholders(&self, data: &ColumnSet) -> Result<PlaceholderMap, RenderError> {
        build_placeholder_map(data, self.options)
    }

    /// Produce the final document text.
    ///
    /// Placeholders are resolved before the template is scanned, so malformed
    /// data fails even when the template references no table.
    pub fn render_document(
        &self,
        template_text: &str,
        data: &ColumnSet,
    ) -> Result<String, RenderError> {
        let map = self.placeholders(data)?;
        let document = template::substitute(template_text, |name| map.get_by_name(name))?;
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TemplateError;
    use crate::table::render_table;

    fn agents() -> ColumnSet {
        ColumnSet::from_iter([
            ("agent", vec!["Pacman_0", "Pacman_1"]),
            ("policy_reward_mean", vec!["11.15", "23.81"]),
        ])
    }

    #[test]
    fn agents_table_delegates_to_table_renderer() {
        let text =
            resolve_placeholder(Placeholder::RewardAgentsTable, &agents(), TableOptions::default())
                .unwrap();
        assert_eq!(text, render_table(&agents()).unwrap().into_string());
    }

    #[test]
    fn unimplemented_placeholders_resolve_empty() {
        for p in [Placeholder::RewardTotalTable, Placeholder::CustomMetricsTable] {
            let text = resolve_placeholder(p, &agents(), TableOptions::default()).unwrap();
            assert_eq!(text, "", "{p} should render empty");
        }
    }

    #[test]
    fn map_has_entry_for_every_placeholder() {
        let map = build_placeholder_map(&agents(), TableOptions::default()).unwrap();
        assert_eq!(map.len(), Placeholder::ALL.len());
        for p in Placeholder::ALL {
            assert!(map.get(p).is_some(), "missing {p}");
        }
    }

    #[test]
    fn document_embeds_table() {
        let doc = render_document("Results: ${reward_agents_table}", &agents()).unwrap();
        let table = render_table(&agents()).unwrap();
        assert_eq!(doc, format!("Results: {table}"));
    }

    #[test]
    fn unknown_marker_is_fatal() {
        let err = render_document("${unknown_var}", &agents()).unwrap_err();
        assert!(
            matches!(
                err,
                RenderError::Template(TemplateError::UnboundMarker { ref name, .. }) if name == "unknown_var"
            ),
            "got: {err}"
        );
    }

    #[test]
    fn escape_option_reaches_table() {
        let data = ColumnSet::from_iter([("agent", vec!["a|b"])]);
        let doc = TemplateResolver::new(TableOptions { escape_cells: true })
            .render_document("$reward_agents_table", &data)
            .unwrap();
        assert!(doc.contains("|a\\|b"), "got: {doc}");
    }
}
