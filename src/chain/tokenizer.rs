//! Logos-based tokenizer for chain expressions.
//!
//! Splits on `.` and `:` while keeping a trailing call expression
//! (`name(args)`) glued to its token. Call-argument text is opaque: a
//! nested chain inside an argument list is NOT re-tokenized, and an
//! argument list containing parentheses of its own stops the scan. Both
//! are preserved limitations callers rely on, not defects.

use logos::Logos;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::base::text_utils;

/// Separator that preceded a token within its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// The chain's first token has no separator.
    None,
    /// Property access, `.`.
    Dot,
    /// Method call access, `:`.
    Colon,
}

/// One raw token of a chain expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainToken {
    /// Raw token text, including any trailing call, e.g. `new("Part")`.
    pub text: SmolStr,
    pub separator: Separator,
    /// Byte range of the token within the chain text.
    pub range: TextRange,
}

impl ChainToken {
    /// The token's bare member name (its word-character prefix), if any.
    pub fn identifier(&self) -> Option<&str> {
        text_utils::leading_identifier(&self.text)
    }

    /// Whether the token carries a call expression.
    pub fn is_call(&self) -> bool {
        self.text.contains('(')
    }

    /// Argument text of a trailing call, parentheses stripped, untrimmed.
    pub fn call_arguments(&self) -> Option<&str> {
        let open = self.text.find('(')?;
        let close = self.text.rfind(')')?;
        (close > open).then(|| &self.text[open + 1..close])
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum RawToken {
    #[token(".")]
    Dot,

    #[token(":")]
    Colon,

    /// An identifier segment with an optional opaque call tail. The call
    /// tail admits quotes and separators but no inner parentheses.
    #[regex(r#"[A-Za-z0-9_]+(\([^()]*\))?"#)]
    Segment,
}

/// Split a chain expression into ordered tokens.
///
/// Mirrors separator-split semantics: a separator with no segment before
/// it yields an empty token, as does a trailing separator (`"a."` →
/// `["a", ""]`). An unexpected character ends the scan; tokens produced so
/// far stand.
pub fn tokenize(chain: &str) -> Vec<ChainToken> {
    let mut lexer = RawToken::lexer(chain);
    let mut tokens = Vec::new();
    let mut separator = Separator::None;
    // set while a separator is waiting for its segment
    let mut expecting_segment = true;

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        match raw {
            Ok(RawToken::Segment) => {
                tokens.push(ChainToken {
                    text: SmolStr::new(lexer.slice()),
                    separator,
                    range: TextRange::new(
                        TextSize::new(span.start as u32),
                        TextSize::new(span.end as u32),
                    ),
                });
                expecting_segment = false;
            }
            Ok(RawToken::Dot) | Ok(RawToken::Colon) => {
                if expecting_segment {
                    tokens.push(empty_token(separator, span.start));
                }
                separator = if matches!(raw, Ok(RawToken::Dot)) {
                    Separator::Dot
                } else {
                    Separator::Colon
                };
                expecting_segment = true;
            }
            Err(()) => return tokens,
        }
    }

    if expecting_segment {
        tokens.push(empty_token(separator, chain.len()));
    }
    tokens
}

fn empty_token(separator: Separator, offset: usize) -> ChainToken {
    let at = TextSize::new(offset as u32);
    ChainToken {
        text: SmolStr::default(),
        separator,
        range: TextRange::new(at, at),
    }
}
