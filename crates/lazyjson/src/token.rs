//! Single-character lookahead over the source text.
//!
//! The tokenizer never advances: the caller skips whitespace, asks for the
//! kind of token at an offset and then hands the offset to the matching
//! scalar parser or span scanner.

use crate::error::{ParserError, SyntaxError};

/// Structural classification of the character at an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    ObjectStart,
    ObjectEnd,
    ArrayStart,
    ArrayEnd,
    Separator,
    /// `"` or `'`; the quote that opens a string also closes it.
    Quote(u8),
    /// A digit or `-`.
    Number,
    /// The first letter of `true`, `false` or `null` (or a misspelling).
    Alpha,
    End,
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Token::ObjectStart => f.write_str("start of an object"),
            Token::ObjectEnd => f.write_str("end of an object"),
            Token::ArrayStart => f.write_str("start of an array"),
            Token::ArrayEnd => f.write_str("end of an array"),
            Token::Separator => f.write_str("separator"),
            Token::Quote(_) => f.write_str("string"),
            Token::Number => f.write_str("number"),
            Token::Alpha => f.write_str("literal"),
            Token::End => f.write_str("end of input"),
        }
    }
}

/// Classifies the character at `offset` without consuming it.
///
/// # Errors
///
/// Returns [`SyntaxError::UnexpectedCharacter`] for anything that cannot
/// start a token.
pub(crate) fn peek(src: &str, offset: usize) -> Result<Token, ParserError> {
    let Some(&byte) = src.as_bytes().get(offset) else {
        return Ok(Token::End);
    };

    match byte {
        b'{' => Ok(Token::ObjectStart),
        b'}' => Ok(Token::ObjectEnd),
        b'[' => Ok(Token::ArrayStart),
        b']' => Ok(Token::ArrayEnd),
        b',' => Ok(Token::Separator),
        b'"' | b'\'' => Ok(Token::Quote(byte)),
        b'0'..=b'9' | b'-' => Ok(Token::Number),
        b if b.is_ascii_alphabetic() => Ok(Token::Alpha),
        _ => Err(unexpected_char(src, offset)),
    }
}

/// Builds an [`SyntaxError::UnexpectedCharacter`] for the character that
/// starts at `offset`.
pub(crate) fn unexpected_char(src: &str, offset: usize) -> ParserError {
    let ch = src
        .get(offset..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    ParserError::new(SyntaxError::UnexpectedCharacter(ch), offset)
}

/// Insignificant whitespace, including vertical tab and form feed.
#[inline]
pub(crate) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C')
}

/// Bytes that end a bare number or literal.
#[inline]
pub(crate) fn is_delimiter(byte: u8) -> bool {
    is_space(byte) || matches!(byte, b'[' | b'{' | b',' | b']' | b'}')
}

/// Returns the first offset at or after `offset` that is not whitespace.
pub(crate) fn skip_whitespace(src: &str, mut offset: usize) -> usize {
    let bytes = src.as_bytes();
    while offset < bytes.len() && is_space(bytes[offset]) {
        offset += 1;
    }
    offset
}
