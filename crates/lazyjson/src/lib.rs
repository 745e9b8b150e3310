//! A JSON value tree with a recursive-descent parser that defers nested
//! containers until they are first read.
//!
//! Parsing builds the root container and its scalar members right away. Each
//! nested object or array is only scanned for its matching bracket and kept
//! as text; indexing, iterating or serializing it builds its children then.
//!
//! ```rust
//! use lazyjson::parse;
//!
//! let mut doc = parse(r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#).unwrap();
//! let second = doc.index(1).unwrap();
//! assert_eq!(second.key("id").unwrap().as_f64(), Some(2.0));
//!
//! assert!(doc.index(1).unwrap().is_resolved());
//! assert!(!doc.index(0).unwrap().is_resolved());
//! ```
#![allow(missing_docs)]

mod builder;
mod construct;
mod error;
mod options;
mod path;
mod scalar;
mod span;
mod token;
mod value;

pub mod ser;

#[cfg(test)]
mod tests;

pub use builder::{MAX_DEPTH, Materialize};
pub use error::{Error, ErrorKind, Expected, ParserError, SyntaxError};
pub use options::{ParserOptions, WriterOptions};
pub use path::{PathComponent, PathComponentFrom};
pub use token::Token;
pub use value::{Array, Children, Json, JsonType, Lazy, Map};

/// Parses a JSON document whose root is an object or an array.
///
/// Nested containers are left pending; see [`ParserOptions::eager`] to parse
/// the whole document up front.
///
/// # Errors
///
/// Returns the first syntax error found outside pending containers.
pub fn parse(json: impl AsRef<str>) -> Result<Json, ParserError> {
    builder::parse_document(json.as_ref(), ParserOptions::default())
}

/// Parses a JSON document with explicit options.
///
/// # Errors
///
/// Returns the first syntax error found outside pending containers.
pub fn parse_with(json: impl AsRef<str>, options: ParserOptions) -> Result<Json, ParserError> {
    builder::parse_document(json.as_ref(), options)
}

#[doc(hidden)]
pub use std::vec;

/// Macro to build a `Vec<PathComponent>` from a heterogeneous list of keys and
/// indices.
///
/// ```rust
/// use lazyjson::{path, PathComponent};
///
/// let p = path![0, "foo", 2];
/// assert_eq!(
///     p,
///     vec![
///         PathComponent::Index(0),
///         PathComponent::Key("foo".into()),
///         PathComponent::Index(2)
///     ]
/// );
/// ```
#[macro_export]
macro_rules! path {
    ( $( $elem:expr ),* $(,)? ) => {{
        use $crate::PathComponentFrom;
        $crate::vec![$($crate::PathComponent::from_path_component($elem)),*]
    }};
}
