//! Line scanner producing whitespace-delimited tokens.
//!
//! The scanner walks one line of input and yields [`Token`] slices that
//! borrow from it. A double quote toggles quoted mode; inside quoted mode
//! whitespace belongs to the current token and the closing quote ends the
//! token immediately. There is no escaping, nesting or line continuation.
//!
//! Separators are the six ASCII whitespace characters (space, `\t`, `\n`,
//! `\x0B`, `\x0C`, `\r`). Other Unicode spaces, such as U+00A0, are token
//! characters.
//!
//! An unterminated quote is not rejected here. The scan reaches the end of
//! the line still quoted and the accumulated text is flushed as the final
//! token, without a closing quote.

use crate::tag::Token;

/// Whether `c` separates tokens.
#[inline]
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// `line` without leading or trailing separators.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(is_separator)
}

/// Iterator over the tokens of a single line.
///
/// Every token is a contiguous, non-empty slice of the input, so spans can
/// be recovered from [`Token::start`] and [`Token::end`].
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `line`.
    pub fn new(line: &'a str) -> Self {
        Scanner { line, pos: 0 }
    }

    /// Byte offset of the next unread character.
    pub fn pos(&self) -> usize {
        self.pos
    }

    fn emit(&mut self, start: usize, end: usize) -> Token<'a> {
        self.pos = end;
        Token::new(&self.line[start..end], start)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.line[self.pos..];
        let base = self.pos;
        let mut start: Option<usize> = None;
        let mut in_quotes = false;

        for (offset, c) in rest.char_indices() {
            let i = base + offset;
            if c == '"' {
                let token_start = *start.get_or_insert(i);
                if in_quotes {
                    return Some(self.emit(token_start, i + c.len_utf8()));
                }
                in_quotes = true;
            } else if is_separator(c) && !in_quotes {
                if let Some(token_start) = start {
                    return Some(self.emit(token_start, i));
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }

        self.pos = self.line.len();
        start.map(|token_start| Token::new(&self.line[token_start..], token_start))
    }
}

/// Split one line into tokens.
///
/// Convenience wrapper that collects a [`Scanner`].
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    Scanner::new(line).collect()
}
