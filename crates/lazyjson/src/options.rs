/// Configuration options for the tree builder.
///
/// # Examples
///
/// ```rust
/// use lazyjson::{ParserOptions, parse_with};
///
/// let mut doc = parse_with(r#"{"a": [1, 2]}"#, ParserOptions { eager: true }).unwrap();
/// assert!(doc.key("a").unwrap().is_resolved());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Whether to build nested objects and arrays while parsing.
    ///
    /// By default a nested container is only scanned for its matching closing
    /// bracket and kept as unparsed text until it is first accessed. Enabling
    /// this parses the whole document up front, so syntax errors anywhere in
    /// the document are reported by the parse call itself.
    ///
    /// # Default
    ///
    /// `false`
    pub eager: bool,
}

/// Configuration options for the serializer.
///
/// # Examples
///
/// ```rust
/// use lazyjson::{Json, WriterOptions};
///
/// let mut v = Json::object([("a", 1), ("b", 2)]);
/// assert_eq!(v.serialize().unwrap(), r#"{"a":1.000000,"b":2.000000}"#);
/// assert_eq!(
///     v.serialize_with(WriterOptions { spaced_members: true }).unwrap(),
///     r#"{"a":1.000000, "b":2.000000}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterOptions {
    /// Whether to separate object members with `", "` instead of `","`.
    ///
    /// Array elements are always separated by a bare `","`. Enabling this
    /// reproduces the legacy layout where only object members carry a space
    /// after the comma.
    ///
    /// # Default
    ///
    /// `false`
    pub spaced_members: bool,
}
