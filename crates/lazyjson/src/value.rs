//! JSON value tree.
//!
//! This module defines the [`Json`] enum, which represents any JSON value, and
//! [`Lazy`], the two-state holder used for the children of arrays and objects.
//! A container produced by the parser starts out as a pending span of source
//! text and is only built into a tree when something reads it.

use indexmap::IndexMap;
use log::trace;

use crate::{
    builder::Materialize,
    error::{Error, ParserError},
    options::WriterOptions,
    path::PathComponent,
    ser,
};

pub type Map = IndexMap<String, Json>;
pub type Array = Vec<Json>;

/// The kind of a [`Json`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl core::fmt::Display for JsonType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        })
    }
}

/// Children of a container that may not have been parsed yet.
///
/// `Pending` holds the captured source text of the container, brackets
/// included. [`Lazy::resolve`] turns it into `Materialized` exactly once; a
/// materialized value never goes back to pending.
#[derive(Debug, Clone, PartialEq)]
pub enum Lazy<T> {
    Pending(String),
    Materialized(T),
}

impl<T> Lazy<T> {
    /// Returns `true` once the children have been built.
    #[must_use]
    pub fn is_materialized(&self) -> bool {
        matches!(self, Self::Materialized(_))
    }

    /// Returns the children if they have already been built.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Pending(_) => None,
            Self::Materialized(v) => Some(v),
        }
    }

    /// Returns the captured text of a pending container.
    #[must_use]
    pub fn span(&self) -> Option<&str> {
        match self {
            Self::Pending(span) => Some(span),
            Self::Materialized(_) => None,
        }
    }
}

impl<T: Materialize> Lazy<T> {
    /// Builds the children from the captured text if that has not happened
    /// yet. Calling it again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the syntax error found in the captured text. The node stays
    /// pending in that case.
    pub fn resolve(&mut self) -> Result<&mut T, ParserError> {
        match self {
            Self::Materialized(v) => Ok(v),
            Self::Pending(span) => {
                let value = T::materialize(span)?;
                trace!("materialized {} byte span into {} children", span.len(), value.child_count());
                *self = Self::Materialized(value);
                self.resolve()
            }
        }
    }
}

/// A JSON value.
///
/// Numbers are always stored as `f64`. Arrays keep their elements in order and
/// objects keep their members in insertion order; assigning to an existing
/// member replaces the value in place.
///
/// # Examples
///
/// ```
/// use lazyjson::{Json, parse};
///
/// let mut doc = parse(r#"{"quiz": {"maths": [1, 2]}}"#).unwrap();
/// let maths = doc.key("quiz").unwrap().key("maths").unwrap();
/// assert_eq!(maths.serialize().unwrap(), "[1.000000,2.000000]");
///
/// doc.key("hello").unwrap().assign("world");
/// assert_eq!(
///     doc.serialize().unwrap(),
///     r#"{"quiz":{"maths":[1.000000,2.000000]},"hello":"world"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Json {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Lazy<Array>),
    Object(Lazy<Map>),
}

impl Default for Json {
    /// An empty object.
    fn default() -> Self {
        Self::Object(Lazy::Materialized(Map::new()))
    }
}

impl Json {
    /// Returns the kind of this value.
    #[must_use]
    pub fn kind(&self) -> JsonType {
        match self {
            Json::Null => JsonType::Null,
            Json::Boolean(_) => JsonType::Boolean,
            Json::Number(_) => JsonType::Number,
            Json::String(_) => JsonType::String,
            Json::Array(_) => JsonType::Array,
            Json::Object(_) => JsonType::Object,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `false` only for a container whose children have not been
    /// built yet. Scalars are always resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        match self {
            Json::Array(lazy) => lazy.is_materialized(),
            Json::Object(lazy) => lazy.is_materialized(),
            _ => true,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Json::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Json::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Json::String(s) => Some(s),
            _ => None,
        }
    }

    /// Builds the children of this node if it is a pending container.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the captured text is malformed.
    pub fn resolve(&mut self) -> Result<(), Error> {
        match self {
            Json::Array(lazy) => {
                lazy.resolve()?;
            }
            Json::Object(lazy) => {
                lazy.resolve()?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Builds every pending container below and including this node.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::Parse`] found. Nodes resolved before the
    /// failure stay resolved.
    pub fn resolve_all(&mut self) -> Result<(), Error> {
        match self {
            Json::Array(lazy) => {
                for child in lazy.resolve()? {
                    child.resolve_all()?;
                }
            }
            Json::Object(lazy) => {
                for child in lazy.resolve()?.values_mut() {
                    child.resolve_all()?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Accesses a child by number.
    ///
    /// On an array this is the element at `index`; using the index one past
    /// the end appends a `null` element and returns it. On an object the
    /// index is a member name in decimal form, so `index(0)` is `key("0")`,
    /// including the insertion of a missing member.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] on a scalar, [`Error::IndexOutOfBounds`] past
    /// the end of an array, [`Error::Parse`] if the container cannot be
    /// materialized.
    pub fn index(&mut self, index: usize) -> Result<&mut Json, Error> {
        match self {
            Json::Array(lazy) => {
                let items = lazy.resolve()?;
                let len = items.len();
                if index == len {
                    items.push(Json::Null);
                }
                items
                    .get_mut(index)
                    .ok_or(Error::IndexOutOfBounds { index, len })
            }
            Json::Object(_) => self.key(&index.to_string()),
            other => Err(Error::TypeMismatch {
                operation: "index into",
                found: other.kind(),
            }),
        }
    }

    /// Accesses an object member by name, inserting a `null` member first if
    /// it does not exist.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] on arrays and scalars, [`Error::Parse`] if the
    /// object cannot be materialized.
    pub fn key(&mut self, key: &str) -> Result<&mut Json, Error> {
        match self {
            Json::Object(lazy) => {
                let members = lazy.resolve()?;
                Ok(members.entry(key.to_string()).or_insert(Json::Null))
            }
            other => Err(Error::TypeMismatch {
                operation: "look up a key in",
                found: other.kind(),
            }),
        }
    }

    /// Follows `path` from this node, applying [`Json::index`] and
    /// [`Json::key`] in turn.
    ///
    /// ```
    /// use lazyjson::{parse, path};
    ///
    /// let mut doc = parse(r#"[{"name": "Franz"}]"#).unwrap();
    /// let name = doc.get_path(&path![0, "name"]).unwrap();
    /// assert_eq!(name.as_str(), Some("Franz"));
    /// ```
    ///
    /// # Errors
    ///
    /// The first error returned by a step.
    pub fn get_path(&mut self, path: &[PathComponent]) -> Result<&mut Json, Error> {
        let mut current = self;
        for component in path {
            current = match component {
                PathComponent::Key(k) => current.key(k)?,
                PathComponent::Index(i) => current.index(*i)?,
            };
        }
        Ok(current)
    }

    /// Iterates over the children of a container in order.
    ///
    /// Array elements are paired with [`PathComponent::Index`], object members
    /// with [`PathComponent::Key`]. The iterator is double-ended, so `.rev()`
    /// walks the children backwards.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] on a scalar, [`Error::Parse`] if the container
    /// cannot be materialized.
    pub fn children(&mut self) -> Result<Children<'_>, Error> {
        let inner = match self {
            Json::Array(lazy) => ChildrenInner::Array(lazy.resolve()?.iter().enumerate()),
            Json::Object(lazy) => ChildrenInner::Object(lazy.resolve()?.iter()),
            other => {
                return Err(Error::TypeMismatch {
                    operation: "iterate over",
                    found: other.kind(),
                });
            }
        };
        Ok(Children { inner })
    }

    /// Returns a copy of the elements of an array.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless this is an array.
    pub fn to_vec(&mut self) -> Result<Vec<Json>, Error> {
        match self {
            Json::Array(lazy) => Ok(lazy.resolve()?.clone()),
            other => Err(Error::TypeMismatch {
                operation: "convert to a list",
                found: other.kind(),
            }),
        }
    }

    /// Number of children of a container.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] on a scalar.
    pub fn len(&mut self) -> Result<usize, Error> {
        match self {
            Json::Array(lazy) => Ok(lazy.resolve()?.len()),
            Json::Object(lazy) => Ok(lazy.resolve()?.len()),
            other => Err(Error::TypeMismatch {
                operation: "take the length of",
                found: other.kind(),
            }),
        }
    }

    /// Replaces this value, dropping any children or pending text.
    pub fn assign(&mut self, value: impl Into<Json>) -> &mut Self {
        *self = value.into();
        self
    }

    /// Renders this value as compact JSON text, resolving every pending
    /// container in place first.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if a pending container is malformed.
    pub fn serialize(&mut self) -> Result<String, Error> {
        self.serialize_with(WriterOptions::default())
    }

    /// Like [`Json::serialize`] with explicit writer options.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if a pending container is malformed.
    pub fn serialize_with(&mut self, options: WriterOptions) -> Result<String, Error> {
        self.resolve_all()?;
        self.render_with(options)
    }

    /// Renders this value without modifying it. Pending containers are built
    /// into temporary trees that are dropped afterwards.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if a pending container is malformed.
    pub fn render(&self) -> Result<String, Error> {
        self.render_with(WriterOptions::default())
    }

    /// Like [`Json::render`] with explicit writer options.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] if a pending container is malformed.
    pub fn render_with(&self, options: WriterOptions) -> Result<String, Error> {
        let mut out = String::new();
        ser::write_json(self, &mut out, options)?;
        Ok(out)
    }
}

impl core::str::FromStr for Json {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

/// Iterator over the children of a container, see [`Json::children`].
pub struct Children<'a> {
    inner: ChildrenInner<'a>,
}

enum ChildrenInner<'a> {
    Array(core::iter::Enumerate<core::slice::Iter<'a, Json>>),
    Object(indexmap::map::Iter<'a, String, Json>),
}

impl<'a> Iterator for Children<'a> {
    type Item = (PathComponent<&'a str>, &'a Json);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ChildrenInner::Array(it) => it.next().map(|(i, v)| (PathComponent::Index(i), v)),
            ChildrenInner::Object(it) => it.next().map(|(k, v)| (PathComponent::Key(k.as_str()), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ChildrenInner::Array(it) => it.size_hint(),
            ChildrenInner::Object(it) => it.size_hint(),
        }
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ChildrenInner::Array(it) => it.next_back().map(|(i, v)| (PathComponent::Index(i), v)),
            ChildrenInner::Object(it) => it
                .next_back()
                .map(|(k, v)| (PathComponent::Key(k.as_str()), v)),
        }
    }
}

impl ExactSizeIterator for Children<'_> {}

#[cfg(any(test, feature = "serde"))]
mod serde_impls {
    use serde::{
        Serialize, Serializer,
        ser::{Error as _, SerializeMap, SerializeSeq},
    };

    use super::{Json, Lazy};
    use crate::builder::Materialize;

    fn with_children<T, S, F>(lazy: &Lazy<T>, f: F) -> Result<S::Ok, S::Error>
    where
        T: Materialize,
        S: Serializer,
        F: FnOnce(&T) -> Result<S::Ok, S::Error>,
    {
        match lazy {
            Lazy::Materialized(children) => f(children),
            Lazy::Pending(span) => {
                let children = T::materialize(span).map_err(S::Error::custom)?;
                f(&children)
            }
        }
    }

    impl Serialize for Json {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Json::Null => serializer.serialize_unit(),
                Json::Boolean(b) => serializer.serialize_bool(*b),
                Json::Number(n) => serializer.serialize_f64(*n),
                Json::String(s) => serializer.serialize_str(s),
                Json::Array(lazy) => with_children::<_, S, _>(lazy, |items| {
                    let mut seq = serializer.serialize_seq(Some(items.len()))?;
                    for item in items {
                        seq.serialize_element(item)?;
                    }
                    seq.end()
                }),
                Json::Object(lazy) => with_children::<_, S, _>(lazy, |members| {
                    let mut map = serializer.serialize_map(Some(members.len()))?;
                    for (k, v) in members {
                        map.serialize_entry(k, v)?;
                    }
                    map.end()
                }),
            }
        }
    }
}
