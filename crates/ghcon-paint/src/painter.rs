//! Turns color-tagged text into terminal output.
//!
//! The input is what the format renderer produces: plain text interleaved
//! with `[color:text]` spans, which may nest. The painter supports three
//! modes, mirroring how the output will be consumed:
//!
//! ```rust
//! use ghcon_paint::{PaintMode, Painter, Palette};
//!
//! let palette = Palette::new().alias("Issue_Open", "DarkYellow");
//!
//! // Plain text for pipes and files
//! let plain = Painter::new(palette.clone(), PaintMode::Remove);
//! assert_eq!(plain.paint("[Issue_Open:#12] Fix bug").unwrap(), "#12 Fix bug");
//!
//! // Tags left visible, for debugging formats
//! let debug = Painter::new(palette.clone(), PaintMode::Keep);
//! assert_eq!(debug.paint("[Issue_Open:#12] Fix bug").unwrap(), "[Issue_Open:#12] Fix bug");
//!
//! // ANSI colors for a terminal
//! let ansi = Painter::new(palette, PaintMode::Apply);
//! assert!(ansi.paint("[Issue_Open:#12] Fix bug").unwrap().contains("\x1b["));
//! ```
//!
//! # Span syntax
//!
//! A span opens with `[`, a color name (possibly empty, with no brackets,
//! backslashes or newlines) and a `:`. It closes at the matching `]`. An empty color
//! name leaves the color unchanged. A `[` that does not open a span, an
//! unterminated span and a `]` without an open span are all literal text.
//! `\[`, `\]` and `\\` produce the literal characters; see [`escape`].

use std::io::Write;

use console::Style;

use crate::color::ConsoleColor;
use crate::error::PaintError;
use crate::palette::Palette;

/// How color spans are transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    /// Replace spans with ANSI color codes.
    Apply,

    /// Drop span markers, keeping only the text.
    Remove,

    /// Leave the input as-is (after checking the color names).
    Keep,
}

impl PaintMode {
    /// `Apply` when the terminal supports colors, `Remove` otherwise.
    pub fn detect() -> Self {
        if console::colors_enabled() {
            PaintMode::Apply
        } else {
            PaintMode::Remove
        }
    }
}

/// Paints color-tagged text using a [`Palette`] for name resolution.
#[derive(Debug, Clone)]
pub struct Painter {
    palette: Palette,
    mode: PaintMode,
}

impl Painter {
    pub fn new(palette: Palette, mode: PaintMode) -> Self {
        Self { palette, mode }
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Transforms `input` according to the paint mode.
    ///
    /// # Errors
    ///
    /// [`PaintError::UnknownColor`] when a span names a color that is neither
    /// a palette color nor an alias, in every mode.
    pub fn paint(&self, input: &str) -> Result<String, PaintError> {
        let tokens: Vec<Token<'_>> = Tokenizer::new(input).collect();
        let mut output = Output::new(self.mode, input.len());
        let mut stack: Vec<Option<ConsoleColor>> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            match *token {
                Token::Text(text) => output.text(text),
                Token::Escaped { ch, raw } => output.escaped(ch, raw),
                Token::Open { name, offset, raw } => {
                    if has_matching_close(&tokens[i + 1..]) {
                        let color = self.color(name, offset)?;
                        stack.push(color);
                        output.open(color, raw);
                    } else {
                        output.text(raw);
                    }
                }
                Token::Close => match stack.pop() {
                    Some(color) => output.close(color, &stack),
                    None => output.text("]"),
                },
            }
        }

        Ok(output.finish())
    }

    /// Paints `input` and writes it to `writer`, followed by a newline.
    pub fn write_line<W: Write>(&self, writer: &mut W, input: &str) -> Result<(), PaintError> {
        let painted = self.paint(input)?;
        writeln!(writer, "{}", painted)?;
        Ok(())
    }

    fn color(&self, name: &str, offset: usize) -> Result<Option<ConsoleColor>, PaintError> {
        if name.is_empty() {
            return Ok(None);
        }
        self.palette
            .resolve(name)
            .map(Some)
            .ok_or_else(|| PaintError::UnknownColor {
                name: name.to_string(),
                offset,
            })
    }
}

/// Escapes `text` so the painter prints it literally, even inside a span.
///
/// ```rust
/// use ghcon_paint::{escape, PaintMode, Painter, Palette};
///
/// let title = "[wip] fix \\ path";
/// let painter = Painter::new(Palette::new(), PaintMode::Remove);
/// let tagged = format!("[Red:{}]", escape(title));
/// assert_eq!(painter.paint(&tagged).unwrap(), title);
/// ```
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn has_matching_close(tokens: &[Token<'_>]) -> bool {
    let mut depth = 0usize;
    for token in tokens {
        match token {
            Token::Open { .. } => depth += 1,
            Token::Close if depth == 0 => return true,
            Token::Close => depth -= 1,
            _ => {}
        }
    }
    false
}

/// Accumulates painted output. In `Apply` mode, text is buffered per color
/// run so each run gets one pair of escape codes.
struct Output {
    mode: PaintMode,
    out: String,
    run: String,
    style: Option<Style>,
}

impl Output {
    fn new(mode: PaintMode, capacity: usize) -> Self {
        Self {
            mode,
            out: String::with_capacity(capacity),
            run: String::new(),
            style: None,
        }
    }

    fn text(&mut self, text: &str) {
        match self.mode {
            PaintMode::Apply => self.run.push_str(text),
            PaintMode::Remove | PaintMode::Keep => self.out.push_str(text),
        }
    }

    fn escaped(&mut self, ch: char, raw: &str) {
        match self.mode {
            PaintMode::Apply => self.run.push(ch),
            PaintMode::Remove => self.out.push(ch),
            PaintMode::Keep => self.out.push_str(raw),
        }
    }

    fn open(&mut self, color: Option<ConsoleColor>, raw: &str) {
        match self.mode {
            PaintMode::Apply => {
                if let Some(color) = color {
                    self.flush();
                    self.style = Some(color.style().force_styling(true));
                }
            }
            PaintMode::Remove => {}
            PaintMode::Keep => self.out.push_str(raw),
        }
    }

    // `stack` is what remains open after closing a span of `color`.
    fn close(&mut self, color: Option<ConsoleColor>, stack: &[Option<ConsoleColor>]) {
        match self.mode {
            PaintMode::Apply => {
                if color.is_none() {
                    return;
                }
                self.flush();
                self.style = stack
                    .iter()
                    .rev()
                    .find_map(|color| *color)
                    .map(|color| color.style().force_styling(true));
            }
            PaintMode::Remove => {}
            PaintMode::Keep => self.out.push(']'),
        }
    }

    fn flush(&mut self) {
        if self.run.is_empty() {
            return;
        }
        match &self.style {
            Some(style) => {
                let styled = style.apply_to(self.run.as_str()).to_string();
                self.out.push_str(&styled);
            }
            None => self.out.push_str(&self.run),
        }
        self.run.clear();
    }

    fn finish(mut self) -> String {
        self.flush();
        self.out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Text(&'a str),
    Escaped { ch: char, raw: &'a str },
    Open { name: &'a str, offset: usize, raw: &'a str },
    Close,
}

struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Characters that end a span name; only `:` makes it a span.
    fn ends_name(c: char) -> bool {
        matches!(c, ':' | '[' | ']' | '\\' | '\n')
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.input[self.pos..];
        let first = rest.chars().next()?;
        let start = self.pos;

        match first {
            '\\' => {
                if let Some(ch @ ('[' | ']' | '\\')) = rest[1..].chars().next() {
                    self.pos += 2;
                    return Some(Token::Escaped {
                        ch,
                        raw: &self.input[start..self.pos],
                    });
                }
                self.pos += 1;
                Some(Token::Text("\\"))
            }
            '[' => {
                let name_len = rest[1..]
                    .find(Self::ends_name)
                    .unwrap_or(rest.len() - 1);
                if rest[1 + name_len..].starts_with(':') {
                    self.pos += name_len + 2;
                    Some(Token::Open {
                        name: &rest[1..1 + name_len],
                        offset: start,
                        raw: &self.input[start..self.pos],
                    })
                } else {
                    self.pos += 1;
                    Some(Token::Text("["))
                }
            }
            ']' => {
                self.pos += 1;
                Some(Token::Close)
            }
            _ => {
                let len = rest
                    .find(|c: char| matches!(c, '[' | ']' | '\\'))
                    .unwrap_or(rest.len());
                self.pos += len;
                Some(Token::Text(&rest[..len]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::new()
            .alias("Issue_Open", "DarkYellow")
            .alias("Issue_Par", "DarkYellow")
    }

    fn paint(mode: PaintMode, input: &str) -> String {
        Painter::new(palette(), mode).paint(input).unwrap()
    }

    fn styled(color: ConsoleColor, text: &str) -> String {
        color.style().force_styling(true).apply_to(text).to_string()
    }

    mod tokenizer {
        use super::*;

        fn tokens(input: &str) -> Vec<Token<'_>> {
            Tokenizer::new(input).collect()
        }

        #[test]
        fn plain_text() {
            assert_eq!(tokens("hello"), vec![Token::Text("hello")]);
        }

        #[test]
        fn span() {
            assert_eq!(
                tokens("a[Red:b]"),
                vec![
                    Token::Text("a"),
                    Token::Open {
                        name: "Red",
                        offset: 1,
                        raw: "[Red:"
                    },
                    Token::Text("b"),
                    Token::Close,
                ]
            );
        }

        #[test]
        fn empty_name() {
            assert_eq!(
                tokens("[:x]")[0],
                Token::Open {
                    name: "",
                    offset: 0,
                    raw: "[:"
                }
            );
        }

        #[test]
        fn bracket_without_name_is_text() {
            assert_eq!(
                tokens("[wip] x"),
                vec![
                    Token::Text("["),
                    Token::Text("wip"),
                    Token::Close,
                    Token::Text(" x"),
                ]
            );
        }

        #[test]
        fn escapes() {
            assert_eq!(
                tokens(r"\[\]\\\x"),
                vec![
                    Token::Escaped { ch: '[', raw: r"\[" },
                    Token::Escaped { ch: ']', raw: r"\]" },
                    Token::Escaped { ch: '\\', raw: r"\\" },
                    Token::Text("\\"),
                    Token::Text("x"),
                ]
            );
        }

        #[test]
        fn trailing_backslash() {
            assert_eq!(tokens("a\\"), vec![Token::Text("a"), Token::Text("\\")]);
        }

        #[test]
        fn name_with_punctuation() {
            assert_eq!(
                tokens("[Dark Yellow:x]")[0],
                Token::Open {
                    name: "Dark Yellow",
                    offset: 0,
                    raw: "[Dark Yellow:"
                }
            );
            assert_eq!(tokens("[a]b:c]")[0], Token::Text("["));
        }

        #[test]
        fn unterminated_name() {
            assert_eq!(tokens("[Red"), vec![Token::Text("["), Token::Text("Red")]);
        }
    }

    mod remove_mode {
        use super::*;

        #[test]
        fn plain_text_unchanged() {
            assert_eq!(paint(PaintMode::Remove, "hello world"), "hello world");
        }

        #[test]
        fn spans_stripped() {
            assert_eq!(
                paint(PaintMode::Remove, "[Issue_Open:12] [:bob] Fix [Red:a [Blue:b] c]"),
                "12 bob Fix a b c"
            );
        }

        #[test]
        fn literal_brackets_survive() {
            assert_eq!(paint(PaintMode::Remove, "[wip] a]b [x"), "[wip] a]b [x");
        }

        #[test]
        fn unterminated_span_is_literal() {
            assert_eq!(paint(PaintMode::Remove, "[Red:open"), "[Red:open");
        }

        #[test]
        fn escapes_resolved() {
            assert_eq!(paint(PaintMode::Remove, r"[Red:a\]b] \[x\]"), "a]b [x]");
        }
    }

    mod keep_mode {
        use super::*;

        #[test]
        fn input_unchanged() {
            let input = r"[Issue_Open:12] [:bob] \[x\] [wip]";
            assert_eq!(paint(PaintMode::Keep, input), input);
        }
    }

    mod apply_mode {
        use super::*;

        #[test]
        fn plain_text_unchanged() {
            assert_eq!(paint(PaintMode::Apply, "hello"), "hello");
        }

        #[test]
        fn alias_applies_color() {
            assert_eq!(
                paint(PaintMode::Apply, "#[Issue_Open:12] x"),
                format!("#{} x", styled(ConsoleColor::DarkYellow, "12"))
            );
        }

        #[test]
        fn empty_color_changes_nothing() {
            assert_eq!(paint(PaintMode::Apply, "[:bob] x"), "bob x");
        }

        #[test]
        fn nested_spans_restore_outer_color() {
            assert_eq!(
                paint(PaintMode::Apply, "[Red:a[Blue:b]c]"),
                format!(
                    "{}{}{}",
                    styled(ConsoleColor::Red, "a"),
                    styled(ConsoleColor::Blue, "b"),
                    styled(ConsoleColor::Red, "c")
                )
            );
        }

        #[test]
        fn uncolored_inner_span_keeps_outer_color() {
            assert_eq!(
                paint(PaintMode::Apply, "[Red:a[:b]c]"),
                styled(ConsoleColor::Red, "abc")
            );
        }
    }

    #[test]
    fn test_unknown_color_is_error() {
        let err = Painter::new(palette(), PaintMode::Remove)
            .paint("ok [Chartreuse:x]")
            .unwrap_err();
        match err {
            PaintError::UnknownColor { name, offset } => {
                assert_eq!(name, "Chartreuse");
                assert_eq!(offset, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_color_name_with_space_is_error() {
        for mode in [PaintMode::Apply, PaintMode::Remove, PaintMode::Keep] {
            let err = Painter::new(palette(), mode)
                .paint("[Dark Yellow:x]")
                .unwrap_err();
            assert!(matches!(
                err,
                PaintError::UnknownColor { ref name, offset: 0 } if name == "Dark Yellow"
            ));
        }
        assert!(Painter::new(palette(), PaintMode::Remove)
            .paint("see [note.1:x]")
            .is_err());
    }

    #[test]
    fn test_unknown_color_in_unterminated_span_is_text() {
        assert_eq!(paint(PaintMode::Remove, "[Chartreuse:x"), "[Chartreuse:x");
    }

    #[test]
    fn test_detect_follows_console() {
        let expected = if console::colors_enabled() {
            PaintMode::Apply
        } else {
            PaintMode::Remove
        };
        assert_eq!(PaintMode::detect(), expected);
    }

    #[test]
    fn test_accessors() {
        let painter = Painter::new(palette(), PaintMode::Keep);
        assert_eq!(painter.mode(), PaintMode::Keep);
        assert_eq!(painter.palette().get("Issue_Par"), Some("DarkYellow"));
    }

    #[test]
    fn test_write_line() {
        let mut buf = Vec::new();
        Painter::new(palette(), PaintMode::Remove)
            .write_line(&mut buf, "[Red:a] b")
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a b\n");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r"a[b]c\d"), r"a\[b\]c\\d");
        assert_eq!(escape("plain"), "plain");
    }
}
