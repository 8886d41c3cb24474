//! Token type and lexical classification.
//!
//! Classification covers the literal rules only. Whether a [`TokenTag::Word`]
//! names a registered operation or falls back to a symbol is decided by the
//! dispatcher, which owns the operation registry.

/// Character that starts a comment token.
pub const COMMENT_MARKER: char = '#';

/// Lexical class of a token, in dispatch priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenTag {
    /// Starts with [`COMMENT_MARKER`]. Discarded.
    Comment,
    /// Wrapped in a matching pair of double quotes, at least two chars long.
    Str,
    /// Optional sign followed by one or more ASCII digits.
    Integer,
    /// Optional sign, ASCII digits and exactly one decimal point, with at
    /// least one digit overall.
    Float,
    /// Anything else: an operation name or a symbol.
    Word,
}

impl TokenTag {
    /// Human-readable name for diagnostics and debug output.
    pub fn name(self) -> &'static str {
        match self {
            TokenTag::Comment => "comment",
            TokenTag::Str => "string",
            TokenTag::Integer => "integer",
            TokenTag::Float => "float",
            TokenTag::Word => "word",
        }
    }
}

/// A token borrowed from the scanned line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn new(text: &'a str, start: usize) -> Self {
        Token { text, start }
    }

    /// Raw token text, quotes included.
    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the first character in the line.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Lexical class of this token.
    pub fn tag(&self) -> TokenTag {
        classify(self.text)
    }

    /// Interior of a string literal, or `None` if the token is not one.
    pub fn string_contents(&self) -> Option<&'a str> {
        string_contents(self.text)
    }
}

/// Classify token text by the literal rules, first match wins.
pub fn classify(text: &str) -> TokenTag {
    if text.starts_with(COMMENT_MARKER) {
        TokenTag::Comment
    } else if string_contents(text).is_some() {
        TokenTag::Str
    } else if is_integer_literal(text) {
        TokenTag::Integer
    } else if is_float_literal(text) {
        TokenTag::Float
    } else {
        TokenTag::Word
    }
}

/// Strip the surrounding quotes of a string literal token.
///
/// A lone `"` or an unterminated `"abc` is not a string literal.
pub fn string_contents(text: &str) -> Option<&str> {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

/// `[+-]?[0-9]+`
pub fn is_integer_literal(text: &str) -> bool {
    let digits = strip_sign(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `[+-]?` followed by digits and exactly one `.`, with at least one digit.
pub fn is_float_literal(text: &str) -> bool {
    let body = strip_sign(text);
    let mut seen_dot = false;
    let mut any_digit = false;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => any_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    any_digit && seen_dot
}

fn strip_sign(text: &str) -> &str {
    text.strip_prefix(['+', '-']).unwrap_or(text)
}
