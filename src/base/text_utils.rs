//! Text scanning utilities for chain expressions and identifiers.

/// Check if a character is considered part of a word (identifier).
///
/// Uses Unicode Standard Annex #31 rules for identifier characters,
/// matching what the host language treats as a name.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check if a character can appear in a chain expression.
///
/// Chains are dotted/colon navigation paths whose call arguments may carry
/// quoted literals, e.g. `game.Lighting` or `Instance.new("Part")`.
#[inline]
pub fn is_chain_character(c: char) -> bool {
    is_word_character(c) || matches!(c, '.' | ':' | '(' | ')' | '\'' | '"')
}

/// Leading identifier of a raw chain token (its word-character prefix).
///
/// Call tokens like `FindFirstChild("Part")` trim to `FindFirstChild`.
/// Returns `None` when the token does not start with a word character.
pub fn leading_identifier(token: &str) -> Option<&str> {
    let end = token
        .char_indices()
        .find(|(_, c)| !is_word_character(*c))
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    (end > 0).then(|| &token[..end])
}

/// The chain expression ending at the cursor.
///
/// Takes the line text up to the cursor and returns its longest suffix
/// drawn from the chain character set: the lookbehind the completion and
/// signature-help callers perform before asking for inference.
///
/// # Example
/// ```
/// use augur::base::text_utils::chain_before_cursor;
///
/// assert_eq!(chain_before_cursor("local p = game.Lighting."), "game.Lighting.");
/// assert_eq!(chain_before_cursor("print(x"), "print(x");
/// assert_eq!(chain_before_cursor("a + "), "");
/// ```
pub fn chain_before_cursor(line_prefix: &str) -> &str {
    let start = line_prefix
        .char_indices()
        .rev()
        .take_while(|(_, c)| is_chain_character(*c))
        .last()
        .map(|(i, _)| i)
        .unwrap_or(line_prefix.len());
    &line_prefix[start..]
}

/// The chain expression at the cursor, trimmed to the innermost enclosing
/// call.
///
/// The raw lookbehind admits parentheses so that calls *within* a chain
/// stay attached (`Instance.new("Part").Name`). When the cursor sits
/// inside an argument list, everything up to the last unbalanced `(` is
/// the enclosing call, not the chain: in `print(myPart.An` the chain is
/// `myPart.An`.
pub fn chain_at_cursor(line_prefix: &str) -> &str {
    let candidate = chain_before_cursor(line_prefix);
    let mut open_parens: Vec<usize> = Vec::new();
    for (i, c) in candidate.char_indices() {
        match c {
            '(' => open_parens.push(i),
            ')' => {
                open_parens.pop();
            }
            _ => {}
        }
    }
    match open_parens.last() {
        Some(&last_open) => &candidate[last_open + 1..],
        None => candidate,
    }
}
