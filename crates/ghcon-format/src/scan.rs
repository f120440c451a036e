//! Low-level scanning of directive syntax.
//!
//! Everything here works on byte offsets. All delimiters and sentinels are
//! ASCII, so every offset returned is a valid char boundary.

use crate::error::SyntaxErrorKind;

/// Characters that start a directive.
pub(crate) const SENTINELS: [char; 4] = ['[', '?', '@', '$'];

/// A located `[spec:body]` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColorSpan<'a> {
    pub spec: &'a str,
    pub body: &'a str,
    /// Offset of `body` within the scanned text.
    pub body_start: usize,
    /// Offset just past the closing `]`.
    pub end: usize,
}

/// A located `?key{body}` or `@name{body}` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block<'a> {
    pub head: &'a str,
    pub body: &'a str,
    pub body_start: usize,
    pub end: usize,
}

/// Returns the offset of the delimiter closing the one at `start`.
///
/// Depth starts at 1 for the opening delimiter itself.
pub(crate) fn find_matching(text: &str, start: usize, open: u8, close: u8) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &b) in text.as_bytes().iter().enumerate().skip(start) {
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
    }
    None
}

/// Locates the color span starting at `at` (which must hold `[`).
pub(crate) fn color_span(text: &str, at: usize) -> Result<ColorSpan<'_>, SyntaxErrorKind> {
    let end = find_matching(text, at, b'[', b']').ok_or(SyntaxErrorKind::Unbalanced {
        open: '[',
        close: ']',
    })?;
    let inner = &text[at + 1..end];
    let colon = inner
        .find(':')
        .ok_or(SyntaxErrorKind::MissingColorSeparator)?;

    Ok(ColorSpan {
        spec: &inner[..colon],
        body: &inner[colon + 1..],
        body_start: at + 1 + colon + 1,
        end: end + 1,
    })
}

/// Locates the block starting at `at` (which holds `?` or `@`).
///
/// The head runs up to the first `{`; a sentinel with no `{` after it is
/// reported as an unbalanced brace.
pub(crate) fn block(text: &str, at: usize) -> Result<Block<'_>, SyntaxErrorKind> {
    let unbalanced = SyntaxErrorKind::Unbalanced {
        open: '{',
        close: '}',
    };
    let open = text[at + 1..]
        .find('{')
        .map(|i| at + 1 + i)
        .ok_or(unbalanced)?;
    let close = find_matching(text, open, b'{', b'}').ok_or(unbalanced)?;

    Ok(Block {
        head: &text[at + 1..open],
        body: &text[open + 1..close],
        body_start: open + 1,
        end: close + 1,
    })
}

/// Returns the variable name starting at `start`: everything up to the next
/// whitespace or the end of the text.
pub(crate) fn variable_name(text: &str, start: usize) -> &str {
    let rest = &text[start..];
    let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
    &rest[..len]
}

/// Finds the first non-empty `$name` in a raw template body.
///
/// The body has not been split into directives yet, so the name also stops
/// at closing delimiters belonging to nested spans.
pub(crate) fn first_variable(body: &str) -> Option<&str> {
    let mut pos = 0;
    while let Some(rel) = body[pos..].find('$') {
        let start = pos + rel + 1;
        let rest = &body[start..];
        let len = rest
            .find(|c: char| c.is_whitespace() || c == ']' || c == '}')
            .unwrap_or(rest.len());
        if len > 0 {
            return Some(&rest[..len]);
        }
        pos = start;
    }
    None
}

/// Splits a function body into its raw arguments with their offsets.
///
/// Only `@` at depth 0 separates arguments; an `@` inside a nested `{...}` or
/// `[...]` belongs to that nested directive. An `@name{...}` call written
/// directly in the body is kept whole inside its argument.
pub(crate) fn argument_spans(body: &str) -> Vec<(usize, &str)> {
    let bytes = body.as_bytes();
    let mut args = Vec::new();
    let mut braces = 0usize;
    let mut brackets = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => braces += 1,
            b'}' => braces = braces.saturating_sub(1),
            b'[' => brackets += 1,
            b']' => brackets = brackets.saturating_sub(1),
            b'@' if braces == 0 && brackets == 0 => {
                if let Some(close) = nested_call_end(body, i) {
                    i = close + 1;
                    continue;
                }
                args.push((start, &body[start..i]));
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    args.push((start, &body[start..]));
    args
}

/// If the `@` at `at` opens a call (a name with no whitespace or `@`, then a
/// balanced `{...}`), returns the offset of its closing brace.
fn nested_call_end(text: &str, at: usize) -> Option<usize> {
    let rest = &text[at + 1..];
    let name_len = rest.find(|c: char| c.is_whitespace() || c == '@' || c == '{')?;
    if name_len == 0 || !rest[name_len..].starts_with('{') {
        return None;
    }
    find_matching(text, at + 1 + name_len, b'{', b'}')
}

/// Splits a function body into its raw arguments.
pub fn split_arguments(body: &str) -> Vec<&str> {
    argument_spans(body).into_iter().map(|(_, arg)| arg).collect()
}
