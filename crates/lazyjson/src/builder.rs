//! Recursive-descent grammar for objects and arrays.
//!
//! The builder walks one container at a time. Scalars are parsed in place;
//! nested containers are handed to the span scanner and stored as pending
//! nodes unless [`ParserOptions::eager`] is set.

use log::debug;

use crate::{
    error::{Expected, ParserError, SyntaxError},
    options::ParserOptions,
    scalar, span,
    token::{self, Token},
    value::{Array, Json, Lazy, Map},
};

/// Deepest nesting of objects and arrays a document may have, the root
/// container counting as level one.
///
/// The limit is checked while parsing, for pending containers as well, so
/// every tree the parser hands out can be resolved and serialized without
/// unbounded recursion.
pub const MAX_DEPTH: usize = 128;

/// Children that can be built from the captured text of a pending container.
pub trait Materialize: Sized {
    /// Parses `span`, which must hold exactly one container of this kind.
    ///
    /// # Errors
    ///
    /// Any syntax error found in `span`.
    fn materialize(span: &str) -> Result<Self, ParserError>;

    /// Number of direct children.
    fn child_count(&self) -> usize;
}

impl Materialize for Array {
    fn materialize(span: &str) -> Result<Self, ParserError> {
        let mut builder = TreeBuilder::new(span, ParserOptions::default());
        builder.expect_opener(Token::ArrayStart)?;
        let items = builder.array()?;
        builder.finish()?;
        Ok(items)
    }

    fn child_count(&self) -> usize {
        self.len()
    }
}

impl Materialize for Map {
    fn materialize(span: &str) -> Result<Self, ParserError> {
        let mut builder = TreeBuilder::new(span, ParserOptions::default());
        builder.expect_opener(Token::ObjectStart)?;
        let members = builder.object()?;
        builder.finish()?;
        Ok(members)
    }

    fn child_count(&self) -> usize {
        self.len()
    }
}

/// Parses a whole document whose root is an object or an array.
pub(crate) fn parse_document(src: &str, options: ParserOptions) -> Result<Json, ParserError> {
    debug!("parsing {} byte document (eager: {})", src.len(), options.eager);
    let mut builder = TreeBuilder::new(src, options);
    builder.skip_whitespace();
    let root = match builder.peek()? {
        Token::ObjectStart => Json::Object(Lazy::Materialized(builder.object()?)),
        Token::ArrayStart => Json::Array(Lazy::Materialized(builder.array()?)),
        _ => return Err(builder.unexpected(Expected::Document)),
    };
    builder.finish()?;
    debug!("parsed {} document", root.kind());
    Ok(root)
}

struct TreeBuilder<'a> {
    src: &'a str,
    pos: usize,
    /// Nesting level of the container being parsed.
    depth: usize,
    options: ParserOptions,
}

impl<'a> TreeBuilder<'a> {
    fn new(src: &'a str, options: ParserOptions) -> Self {
        Self {
            src,
            pos: 0,
            depth: 0,
            options,
        }
    }

    fn peek(&self) -> Result<Token, ParserError> {
        token::peek(self.src, self.pos)
    }

    fn skip_whitespace(&mut self) {
        self.pos = token::skip_whitespace(self.src, self.pos);
    }

    /// Error for whatever sits at the current position when `expected` was
    /// required there.
    fn unexpected(&self, expected: Expected) -> ParserError {
        match self.peek() {
            Ok(Token::End) => ParserError::new(SyntaxError::UnexpectedEndOfInput, self.pos),
            Ok(found) => ParserError::new(SyntaxError::UnexpectedToken { found, expected }, self.pos),
            Err(err) => err,
        }
    }

    fn expect_opener(&mut self, opener: Token) -> Result<(), ParserError> {
        self.skip_whitespace();
        if self.peek()? == opener {
            Ok(())
        } else {
            Err(self.unexpected(Expected::Document))
        }
    }

    /// Only whitespace may follow the root container.
    fn finish(&mut self) -> Result<(), ParserError> {
        self.skip_whitespace();
        if self.pos < self.src.len() {
            return Err(self.unexpected(Expected::EndOfDocument));
        }
        Ok(())
    }

    /// Descends into the container whose opener is at the current position.
    fn enter(&mut self) -> Result<(), ParserError> {
        if self.depth == MAX_DEPTH {
            return Err(ParserError::new(
                SyntaxError::DepthLimitExceeded { limit: MAX_DEPTH },
                self.pos,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn object(&mut self) -> Result<Map, ParserError> {
        self.enter()?;
        let members = self.members()?;
        self.depth -= 1;
        Ok(members)
    }

    fn array(&mut self) -> Result<Array, ParserError> {
        self.enter()?;
        let items = self.elements()?;
        self.depth -= 1;
        Ok(items)
    }

    /// Parses the members of the object whose `{` is at the current position.
    fn members(&mut self) -> Result<Map, ParserError> {
        let mut members = Map::new();
        self.pos += 1;
        self.skip_whitespace();

        loop {
            let name = match self.peek()? {
                Token::ObjectEnd => {
                    self.pos += 1;
                    return Ok(members);
                }
                Token::Quote(quote) => {
                    let (name, end) = scalar::parse_string(self.src, self.pos, quote)?;
                    self.pos = end;
                    name
                }
                _ => return Err(self.unexpected(Expected::PropertyName)),
            };

            self.skip_whitespace();
            if self.src.as_bytes().get(self.pos) != Some(&b':') {
                return Err(self.unexpected(Expected::Colon));
            }
            self.pos += 1;
            self.skip_whitespace();

            let value = self.value()?;

            self.skip_whitespace();
            let next = self.peek()?;
            if !matches!(next, Token::Separator | Token::ObjectEnd) {
                return Err(self.unexpected(Expected::ObjectSeparator));
            }
            self.pos += 1;
            self.skip_whitespace();

            members.insert(name, value);

            if next == Token::ObjectEnd {
                return Ok(members);
            }
        }
    }

    /// Parses the elements of the array whose `[` is at the current position.
    fn elements(&mut self) -> Result<Array, ParserError> {
        let mut items = Array::new();
        self.pos += 1;
        self.skip_whitespace();

        loop {
            if self.peek()? == Token::ArrayEnd {
                self.pos += 1;
                return Ok(items);
            }

            let value = self.value()?;

            self.skip_whitespace();
            let next = self.peek()?;
            if !matches!(next, Token::Separator | Token::ArrayEnd) {
                return Err(self.unexpected(Expected::ArraySeparator));
            }
            self.pos += 1;
            self.skip_whitespace();

            items.push(value);

            if next == Token::ArrayEnd {
                return Ok(items);
            }
        }
    }

    /// Parses one member value or array element.
    fn value(&mut self) -> Result<Json, ParserError> {
        let value = match self.peek()? {
            Token::ObjectStart if self.options.eager => {
                Json::Object(Lazy::Materialized(self.object()?))
            }
            Token::ArrayStart if self.options.eager => Json::Array(Lazy::Materialized(self.array()?)),
            Token::ObjectStart => {
                let (raw, end) = span::capture(self.src, self.pos, MAX_DEPTH - self.depth)?;
                self.pos = end;
                Json::Object(Lazy::Pending(raw))
            }
            Token::ArrayStart => {
                let (raw, end) = span::capture(self.src, self.pos, MAX_DEPTH - self.depth)?;
                self.pos = end;
                Json::Array(Lazy::Pending(raw))
            }
            Token::Alpha => {
                let (value, end) = scalar::parse_literal(self.src, self.pos)?;
                self.pos = end;
                value
            }
            Token::Number => {
                let (n, end) = scalar::parse_number(self.src, self.pos)?;
                self.pos = end;
                Json::Number(n)
            }
            Token::Quote(quote) => {
                let (s, end) = scalar::parse_string(self.src, self.pos, quote)?;
                self.pos = end;
                Json::String(s)
            }
            _ => return Err(self.unexpected(Expected::Value)),
        };
        Ok(value)
    }
}
