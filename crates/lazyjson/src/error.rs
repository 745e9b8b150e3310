use thiserror::Error;

use crate::{token::Token, value::JsonType};

/// A failure while turning JSON text into a tree.
///
/// The offset is a byte offset into the text that was being parsed. For
/// errors raised while materializing a pending container, that text is the
/// captured span of the container, not the original document.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{source} at position {offset}")]
pub struct ParserError {
    pub(crate) source: SyntaxError,
    pub(crate) offset: usize,
}

impl ParserError {
    pub(crate) fn new(source: SyntaxError, offset: usize) -> Self {
        Self { source, offset }
    }

    /// The underlying syntax error.
    #[must_use]
    pub fn syntax_error(&self) -> &SyntaxError {
        &self.source
    }

    /// Byte offset at which the error was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// What the parser was looking for when it hit an unexpected token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    PropertyName,
    Colon,
    Value,
    ObjectSeparator,
    ArraySeparator,
    Document,
    EndOfDocument,
}

impl core::fmt::Display for Expected {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Expected::PropertyName => "expected a property name",
            Expected::Colon => "expected ':'",
            Expected::Value => "a value is expected",
            Expected::ObjectSeparator => "expected ',' or end of object",
            Expected::ArraySeparator => "expected ',' or end of array",
            Expected::Document => "expected '{' or '['",
            Expected::EndOfDocument => "expected end of document",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),
    #[error("unexpected {found}, {expected}")]
    UnexpectedToken { found: Token, expected: Expected },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unrecognized literal '{0}'")]
    UnrecognizedLiteral(String),
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("containers nested deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },
}

/// Any error surfaced by the crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] ParserError),
    #[error("cannot {operation} a JSON {found}")]
    TypeMismatch {
        operation: &'static str,
        found: JsonType,
    },
    #[error("index {index} is out of bounds for a container of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Flat classification of [`Error`], one entry per failure family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    UnterminatedString,
    InvalidNumber,
    UnrecognizedLiteral,
    UnexpectedEndOfInput,
    DepthLimitExceeded,
    TypeMismatch,
    IndexOutOfBounds,
}

impl Error {
    /// Returns the failure family of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Parse(err) => match err.source {
                SyntaxError::UnexpectedCharacter(_) | SyntaxError::UnexpectedToken { .. } => {
                    ErrorKind::Syntax
                }
                SyntaxError::UnterminatedString => ErrorKind::UnterminatedString,
                SyntaxError::InvalidNumber(_) => ErrorKind::InvalidNumber,
                SyntaxError::UnrecognizedLiteral(_) => ErrorKind::UnrecognizedLiteral,
                SyntaxError::UnexpectedEndOfInput => ErrorKind::UnexpectedEndOfInput,
                SyntaxError::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
            },
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
        }
    }

    /// Byte offset of a parse error, `None` for access errors.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Parse(err) => Some(err.offset),
            _ => None,
        }
    }
}
