//! Woflang lexer core - tokenizer for one line of Woflang input.
//!
//! Standalone crate with no `wof_*` dependencies:
//! - [`Scanner`] splits a line into [`Token`]s on ASCII whitespace, keeping
//!   double-quoted runs together
//! - [`classify`] applies the literal rules (comment, string, integer, float)
//!   and reports everything else as [`TokenTag::Word`]
//!
//! ```text
//! "5 3 +"          -> [5] [3] [+]
//! "\"hi there\" x" -> ["hi there"] [x]
//! ```

mod scanner;
mod tag;

pub use scanner::{is_separator, tokenize, trim_line, Scanner};
pub use tag::{
    classify, is_float_literal, is_integer_literal, string_contents, Token, TokenTag,
    COMMENT_MARKER,
};
