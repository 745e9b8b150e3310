//! Balanced-bracket lookahead used to defer nested containers.
//!
//! Instead of recursing into a nested object or array, the tree builder
//! captures its text here and stores it in a pending node. Only brackets of
//! the same kind as the opener are counted, and brackets inside strings are
//! ignored. Whitespace outside strings is dropped from the captured text,
//! except for a single space where it separates two values.

use log::trace;

use crate::{
    builder::MAX_DEPTH,
    error::{ParserError, SyntaxError},
    token::{is_space, unexpected_char},
};

/// Captures the container that opens at `offset`.
///
/// Returns the captured text (brackets included) and the offset just past the
/// matching closer. Objects and arrays inside the span, the opener included,
/// may nest at most `max_depth` levels.
pub(crate) fn capture(
    src: &str,
    offset: usize,
    max_depth: usize,
) -> Result<(String, usize), ParserError> {
    let (open, close) = match src.as_bytes().get(offset) {
        Some(b'{') => ('{', '}'),
        Some(b'[') => ('[', ']'),
        Some(_) => return Err(unexpected_char(src, offset)),
        None => return Err(ParserError::new(SyntaxError::UnexpectedEndOfInput, offset)),
    };

    let mut raw = String::new();
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut level = 0usize;
    let mut depth = 0usize;
    let mut gap = false;

    for (i, ch) in src[offset..].char_indices() {
        let at = offset + i;

        if let Some(q) = quote {
            raw.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }

        if ch.is_ascii() && is_space(ch as u8) {
            gap = true;
            continue;
        }
        if gap && !is_structural(ch) && !raw.ends_with(is_structural) {
            raw.push(' ');
        }
        gap = false;

        match ch {
            '{' | '[' => {
                depth += 1;
                if depth > max_depth {
                    return Err(ParserError::new(
                        SyntaxError::DepthLimitExceeded { limit: MAX_DEPTH },
                        at,
                    ));
                }
            }
            '}' | ']' => depth = depth.saturating_sub(1),
            _ => {}
        }

        match ch {
            '"' | '\'' => {
                quote = Some(ch);
                raw.push(ch);
            }
            '\\' => return Err(unexpected_char(src, at)),
            c if c == open => {
                if i > 0 {
                    level += 1;
                }
                raw.push(c);
            }
            c if c == close => {
                raw.push(c);
                if level == 0 {
                    trace!("captured {} byte span at {offset}", raw.len());
                    return Ok((raw, at + 1));
                }
                level -= 1;
            }
            c => raw.push(c),
        }
    }

    Err(ParserError::new(SyntaxError::UnexpectedEndOfInput, src.len()))
}

fn is_structural(ch: char) -> bool {
    matches!(ch, '{' | '}' | '[' | ']' | ',' | ':')
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(r#"{"a": 1}"#, r#"{"a":1}"#)]
    #[case("[ 1 , [2, [3]] ]", "[1,[2,[3]]]")]
    #[case(r#"{"a": {"b": {}}}"#, r#"{"a":{"b":{}}}"#)]
    #[case(r#"{"s": "} not the end"}"#, r#"{"s":"} not the end"}"#)]
    #[case(r#"["]", ']', "\"]"]"#, r#"["]",']',"\"]"]"#)]
    #[case(r#"{"q": "it's {"}"#, r#"{"q":"it's {"}"#)]
    #[case(r#"{"k": [ "}" ] }"#, r#"{"k":["}"]}"#)]
    #[case("[\"keep   spaces\"]", "[\"keep   spaces\"]")]
    #[case("[1 2, tru  e]", "[1 2,tru e]")]
    #[case("{\"a\"\t:\n-1 }", "{\"a\":-1}")]
    #[case("[1 \"a\" 'b']", "[1 \"a\" 'b']")]
    fn captures_matching_container(#[case] src: &str, #[case] expected: &str) {
        let (raw, end) = capture(src, 0, MAX_DEPTH).unwrap();
        assert_eq!(raw, expected);
        assert_eq!(end, src.len());
    }

    #[test]
    fn stops_at_the_matching_closer() {
        let src = r#"{"a":[1,2],"b":3}"#;
        let (raw, end) = capture(src, 5, MAX_DEPTH).unwrap();
        assert_eq!(raw, "[1,2]");
        assert_eq!(&src[end..], r#","b":3}"#);
    }

    #[test]
    fn other_bracket_kind_does_not_affect_level() {
        let src = "[{]";
        let (raw, end) = capture(src, 0, MAX_DEPTH).unwrap();
        assert_eq!(raw, "[{]");
        assert_eq!(end, 3);
    }

    #[rstest]
    #[case("[1, 2")]
    #[case(r#"{"a": "}"#)]
    #[case("[[]")]
    fn reports_end_of_input(#[case] src: &str) {
        let err = capture(src, 0, MAX_DEPTH).unwrap_err();
        assert_eq!(err.syntax_error(), &SyntaxError::UnexpectedEndOfInput);
        assert_eq!(err.offset(), src.len());
    }

    #[rstest]
    #[case("[[[]]]", 3, None)]
    #[case("[[[]]]", 2, Some(2))]
    #[case("[{}, {}, {}]", 2, None)]
    #[case("[{\"a\": [1]}]", 2, Some(7))]
    #[case("[\"[[[[\"]", 1, None)]
    fn limits_nesting(#[case] src: &str, #[case] max_depth: usize, #[case] failure: Option<usize>) {
        match capture(src, 0, max_depth) {
            Ok(_) => assert_eq!(failure, None),
            Err(err) => {
                assert_eq!(
                    err.syntax_error(),
                    &SyntaxError::DepthLimitExceeded { limit: MAX_DEPTH }
                );
                assert_eq!(Some(err.offset()), failure);
            }
        }
    }

    #[test]
    fn rejects_backslash_outside_strings() {
        let err = capture(r"[1, \2]", 0, MAX_DEPTH).unwrap_err();
        assert_eq!(err.syntax_error(), &SyntaxError::UnexpectedCharacter('\\'));
        assert_eq!(err.offset(), 4);
    }
}
