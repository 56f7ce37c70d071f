//! `$`-marker substitution engine.
//!
//! # Syntax
//!
//! - `$name` - substitution; `name` is the longest run of `[_A-Za-z0-9]`
//!   that starts with a letter or underscore
//! - `${name}` - braced form, for markers followed by identifier characters
//! - `$$` - a literal `$`
//!
//! Any other `$` is an error. Substitution happens in a single pass:
//! replacement text is copied to the output and never scanned again, so a
//! value containing `${...}` comes through unchanged.

use crate::error::TemplateError;

/// One lexical piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'t> {
    /// Text copied verbatim.
    Literal(&'t str),
    /// `$$`.
    Dollar,
    /// `$name` or `${name}`; `offset` is the byte offset of the `$`.
    Marker { name: &'t str, offset: usize },
    /// A `$` that starts no valid marker.
    Invalid { offset: usize },
}

/// Iterator over the [`Segment`]s of a template.
#[derive(Debug, Clone)]
pub struct Segments<'t> {
    template: &'t str,
    pos: usize,
}

impl<'t> Segments<'t> {
    pub fn new(template: &'t str) -> Self {
        Segments { template, pos: 0 }
    }
}

impl<'t> Iterator for Segments<'t> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Segment<'t>> {
        let template = self.template;
        let rest = &template[self.pos..];
        if rest.is_empty() {
            return None;
        }
        match rest.find('$') {
            Some(0) => {
                let offset = self.pos;
                let (segment, consumed) = scan_marker(&rest[1..], offset);
                self.pos += 1 + consumed;
                Some(segment)
            }
            Some(n) => {
                self.pos += n;
                Some(Segment::Literal(&rest[..n]))
            }
            None => {
                self.pos = template.len();
                Some(Segment::Literal(rest))
            }
        }
    }
}

/// Classify the text following a `$`. Returns the segment and the number of
/// bytes consumed after the `$`.
fn scan_marker(after: &str, offset: usize) -> (Segment<'_>, usize) {
    if after.starts_with('$') {
        return (Segment::Dollar, 1);
    }
    let n = identifier_len(after);
    if n > 0 {
        return (Segment::Marker { name: &after[..n], offset }, n);
    }
    if let Some(inner) = after.strip_prefix('{') {
        let n = identifier_len(inner);
        if n > 0 && inner[n..].starts_with('}') {
            return (Segment::Marker { name: &inner[..n], offset }, n + 2);
        }
    }
    (Segment::Invalid { offset }, 0)
}

fn identifier_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return 0,
    }
    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count()
}

/// 1-based line and column (in characters) of a byte offset.
///
/// `offset` must lie on a char boundary within `template`; offsets produced
/// by [`Segments`] always do.
fn position(template: &str, offset: usize) -> (usize, usize) {
    let before = &template[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Replace every marker in `template` with the text `lookup` returns for it.
///
/// Fails with [`TemplateError::UnboundMarker`] on the first marker `lookup`
/// returns `None` for, and with [`TemplateError::InvalidPlaceholder`] on a
/// malformed `$`.
pub fn substitute<F, S>(template: &str, mut lookup: F) -> Result<String, TemplateError>
where
    F: FnMut(&str) -> Option<S>,
    S: AsRef<str>,
{
    let mut out = String::with_capacity(template.len());
    for segment in Segments::new(template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Dollar => out.push('$'),
            Segment::Marker { name, offset } => match lookup(name) {
                Some(text) => out.push_str(text.as_ref()),
                None => {
                    let (line, column) = position(template, offset);
                    return Err(TemplateError::UnboundMarker {
                        name: name.to_owned(),
                        line,
                        column,
                    });
                }
            },
            Segment::Invalid { offset } => {
                let (line, column) = position(template, offset);
                return Err(TemplateError::InvalidPlaceholder { line, column });
            }
        }
    }
    Ok(out)
}

/// Marker names in order of first appearance, without duplicates.
/// Malformed `$` sequences are skipped.
pub fn identifiers(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for segment in Segments::new(template) {
        if let Segment::Marker { name, .. } = segment {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lookup(name: &str) -> Option<&'static str> {
        match name {
            "who" => Some("world"),
            "recursive" => Some("${who}"),
            "empty" => Some(""),
            _ => None,
        }
    }

    #[rstest]
    #[case("plain text", "plain text")]
    #[case("hello $who!", "hello world!")]
    #[case("hello ${who}ly", "hello worldly")]
    #[case("cost: $$5", "cost: $5")]
    #[case("$$who", "$who")]
    #[case("[$empty]", "[]")]
    #[case("$who$who", "worldworld")]
    #[case("", "")]
    fn substitutes(#[case] template: &str, #[case] expected: &str) {
        assert_eq!(substitute(template, lookup).unwrap(), expected);
    }

    #[test]
    fn replacement_text_is_not_rescanned() {
        assert_eq!(substitute("x=$recursive", lookup).unwrap(), "x=${who}");
    }

    #[test]
    fn unbraced_marker_takes_longest_identifier() {
        let err = substitute("$who_else", lookup).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnboundMarker { name: "who_else".into(), line: 1, column: 1 }
        );
    }

    #[test]
    fn unbound_marker_reports_position() {
        let err = substitute("line one\n  ${unknown_var}", lookup).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnboundMarker { name: "unknown_var".into(), line: 2, column: 3 }
        );
    }

    #[rstest]
    #[case("price $5", 1, 7)]
    #[case("trailing $", 1, 10)]
    #[case("${who", 1, 1)]
    #[case("${}", 1, 1)]
    #[case("${ who }", 1, 1)]
    #[case("ok\n\u{e9}$-", 2, 2)]
    fn invalid_placeholders(#[case] template: &str, #[case] line: usize, #[case] column: usize) {
        let err = substitute(template, lookup).unwrap_err();
        assert_eq!(err, TemplateError::InvalidPlaceholder { line, column });
    }

    #[test]
    fn position_counts_chars_not_bytes() {
        let template = "\u{e9}\u{e9}\nab\u{e9}$x";
        let offset = template.find('$').unwrap();
        assert_eq!(position(template, offset), (2, 4));
        assert_eq!(position(template, 0), (1, 1));
    }

    #[test]
    fn identifiers_are_unique_and_ordered() {
        let names = identifiers("$b ${a} $b $$c $ ${d");
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn segments_cover_whole_template() {
        let segs: Vec<Segment<'_>> = Segments::new("a$$b${c}").collect();
        assert_eq!(
            segs,
            vec![
                Segment::Literal("a"),
                Segment::Dollar,
                Segment::Literal("b"),
                Segment::Marker { name: "c", offset: 4 },
            ]
        );
    }
}
