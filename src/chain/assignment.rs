//! Textual scan for local-variable assignments.
//!
//! The resolver's first-token fallback: when an identifier matches nothing
//! in the alias table, service index, or struct catalog, the document text
//! above the reference point is scanned for `local <name> = <rhs>` lines.
//! The scan is deliberately textual (no scope awareness, no shadowing or
//! block-nesting analysis) and the LAST match wins.

use crate::base::text_utils;

/// A matched local assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentMatch<'a> {
    /// Right-hand-side text, trimmed.
    pub rhs: &'a str,
    /// Byte offset of the start of the matched line within the scanned
    /// text; recursive resolution scans only text above this.
    pub line_start: usize,
}

/// The last `local <identifier> = <rhs>` line in `prefix_text`, if any.
pub fn last_local_assignment<'a>(
    prefix_text: &'a str,
    identifier: &str,
) -> Option<AssignmentMatch<'a>> {
    if identifier.is_empty() {
        return None;
    }
    let mut found = None;
    let mut offset = 0usize;
    for raw in prefix_text.split_inclusive('\n') {
        let line = raw.trim_end_matches(['\n', '\r']);
        if let Some(rhs) = parse_local_assignment(line, identifier) {
            found = Some(AssignmentMatch {
                rhs,
                line_start: offset,
            });
        }
        offset += raw.len();
    }
    found
}

/// Match one line against `local <identifier> = <rhs>`.
fn parse_local_assignment<'a>(line: &'a str, identifier: &str) -> Option<&'a str> {
    let rest = line.trim_start().strip_prefix("local")?;
    // `local` must be a standalone keyword, not a prefix of `locale` etc.
    let rest = rest.strip_prefix(char::is_whitespace)?.trim_start();
    let rest = rest.strip_prefix(identifier)?;
    // the name must end here, not continue into a longer identifier
    if rest.starts_with(text_utils::is_word_character) {
        return None;
    }
    let rest = rest.trim_start().strip_prefix('=')?;
    // `==` is a comparison, not an assignment
    if rest.starts_with('=') {
        return None;
    }
    let rhs = rest.trim();
    (!rhs.is_empty()).then_some(rhs)
}
