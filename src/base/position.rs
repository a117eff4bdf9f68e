//! Cursor positions in document text.
//!
//! Inference requests are anchored at an editor cursor; positions use the
//! same 0-indexed line/column convention as the LSP layer that calls in.

/// A position in document text (0-indexed).
///
/// Columns count characters within the line, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}
