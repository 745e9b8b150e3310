//! Parsers for the four scalar kinds.
//!
//! Each parser starts at the first byte of the value and returns the value
//! together with the offset just past it.

use crate::{
    error::{ParserError, SyntaxError},
    token::is_delimiter,
    value::Json,
};

/// Parses a string opened by `quote` at `offset`.
///
/// Recognized escapes are `\n`, `\t`, `\r`, `\v` and `\b`; a backslash before
/// any other character yields that character.
pub(crate) fn parse_string(src: &str, offset: usize, quote: u8) -> Result<(String, usize), ParserError> {
    let quote = char::from(quote);
    let mut value = String::new();
    let mut escaped = false;

    for (i, ch) in src[offset + 1..].char_indices() {
        let at = offset + 1 + i;
        if ch == '\n' {
            return Err(ParserError::new(SyntaxError::UnterminatedString, at));
        }
        if escaped {
            escaped = false;
            value.push(match ch {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                'v' => '\x0B',
                'b' => '\x08',
                other => other,
            });
            continue;
        }
        match ch {
            '\\' => escaped = true,
            c if c == quote => return Ok((value, at + 1)),
            c => value.push(c),
        }
    }

    Err(ParserError::new(SyntaxError::UnterminatedString, src.len()))
}

/// Parses a number by reading up to the next whitespace or structural byte.
/// Slices that overflow to an infinity are rejected.
pub(crate) fn parse_number(src: &str, offset: usize) -> Result<(f64, usize), ParserError> {
    let end = scan_bare(src, offset);
    let slice = &src[offset..end];
    match slice.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok((n, end)),
        _ => Err(ParserError::new(SyntaxError::InvalidNumber(slice.to_string()), offset)),
    }
}

/// Parses `true`, `false` or `null`.
pub(crate) fn parse_literal(src: &str, offset: usize) -> Result<(Json, usize), ParserError> {
    let end = scan_bare(src, offset);
    let value = match &src[offset..end] {
        "true" => Json::Boolean(true),
        "false" => Json::Boolean(false),
        "null" => Json::Null,
        other => {
            return Err(ParserError::new(
                SyntaxError::UnrecognizedLiteral(other.to_string()),
                offset,
            ));
        }
    };
    Ok((value, end))
}

fn scan_bare(src: &str, offset: usize) -> usize {
    let bytes = src.as_bytes();
    let mut end = offset;
    while end < bytes.len() && !is_delimiter(bytes[end]) {
        end += 1;
    }
    // Delimiters are ASCII, so `end` always lands on a char boundary.
    end
}
