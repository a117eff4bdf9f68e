//! Read-only document text access.
//!
//! The host editor owns document contents. Inference only ever needs two
//! views: all text strictly before a position, and the current line up to
//! the cursor column.

use crate::base::Position;

/// Borrowed view over a document's text with position-based slicing.
#[derive(Debug, Clone, Copy)]
pub struct DocumentView<'a> {
    text: &'a str,
}

impl<'a> DocumentView<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The full underlying text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of a line/column position.
    ///
    /// Columns are counted in characters and clamped to the end of the
    /// line. Returns `None` if the line does not exist.
    pub fn offset_of(&self, position: Position) -> Option<usize> {
        let (line_start, line) = self.line_span(position.line)?;
        Some(line_start + column_to_byte(line, position.column))
    }

    /// All text strictly before the position.
    ///
    /// A position past the end of the document yields the whole text.
    pub fn text_before(&self, position: Position) -> &'a str {
        match self.offset_of(position) {
            Some(offset) => &self.text[..offset],
            None => self.text,
        }
    }

    /// A line's text without its terminator.
    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.line_span(index).map(|(_, line)| line)
    }

    /// The position's line up to (not including) the cursor column.
    pub fn line_prefix(&self, position: Position) -> &'a str {
        let Some(line) = self.line(position.line) else {
            return "";
        };
        &line[..column_to_byte(line, position.column)]
    }

    /// Start offset and terminator-stripped text of a line.
    fn line_span(&self, index: usize) -> Option<(usize, &'a str)> {
        let mut offset = 0usize;
        let mut count = 0usize;
        for (i, raw) in self.text.split_inclusive('\n').enumerate() {
            if i == index {
                return Some((offset, raw.trim_end_matches(['\n', '\r'])));
            }
            offset += raw.len();
            count = i + 1;
        }
        // The empty line after a trailing newline is addressable.
        if index == count && self.text.ends_with('\n') {
            return Some((self.text.len(), ""));
        }
        None
    }
}

/// Byte length of the first `column` characters of a line.
fn column_to_byte(line: &str, column: usize) -> usize {
    line.chars().take(column).map(char::len_utf8).sum()
}
