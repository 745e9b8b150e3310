//! Building trees from native Rust values.
//!
//! Every supported native type converts into [`Json`] through `From`, so the
//! kind of a value is picked at compile time: integers and floats become
//! numbers, `&str` and `String` strings, `bool` booleans, and `()` or `None`
//! null.

use crate::value::{Array, Json, Lazy, Map};

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Json {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(n: $t) -> Self {
                    Json::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Json {
    fn from(b: bool) -> Self {
        Json::Boolean(b)
    }
}

impl From<&str> for Json {
    fn from(s: &str) -> Self {
        Json::String(s.to_string())
    }
}

impl From<String> for Json {
    fn from(s: String) -> Self {
        Json::String(s)
    }
}

impl From<()> for Json {
    fn from((): ()) -> Self {
        Json::Null
    }
}

impl<T: Into<Json>> From<Option<T>> for Json {
    fn from(v: Option<T>) -> Self {
        v.map_or(Json::Null, Into::into)
    }
}

impl From<Array> for Json {
    fn from(items: Array) -> Self {
        Json::Array(Lazy::Materialized(items))
    }
}

impl From<Map> for Json {
    fn from(members: Map) -> Self {
        Json::Object(Lazy::Materialized(members))
    }
}

impl FromIterator<Json> for Json {
    fn from_iter<I: IntoIterator<Item = Json>>(iter: I) -> Self {
        Json::Array(Lazy::Materialized(iter.into_iter().collect()))
    }
}

impl FromIterator<(String, Json)> for Json {
    fn from_iter<I: IntoIterator<Item = (String, Json)>>(iter: I) -> Self {
        Json::Object(Lazy::Materialized(iter.into_iter().collect()))
    }
}

impl Json {
    /// Builds an array from positional values.
    ///
    /// ```
    /// use lazyjson::Json;
    ///
    /// let mut v = Json::array([Json::from(1), "two".into(), true.into(), ().into()]);
    /// assert_eq!(v.serialize().unwrap(), r#"[1.000000,"two",true,null]"#);
    /// ```
    pub fn array<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Json>,
    {
        Json::Array(Lazy::Materialized(values.into_iter().map(Into::into).collect()))
    }

    /// Builds an object from `(name, value)` pairs. A repeated name keeps its
    /// first position and takes the last value.
    ///
    /// ```
    /// use lazyjson::Json;
    ///
    /// let mut v = Json::object([("name", "Franz"), ("surname", "Kafka")]);
    /// assert_eq!(v.serialize().unwrap(), r#"{"name":"Franz","surname":"Kafka"}"#);
    /// ```
    pub fn object<I, K, V>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Json>,
    {
        Json::Object(Lazy::Materialized(
            members
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }
}

/// Builds an array [`Json`] from a list of values of any supported type.
///
/// ```rust
/// use lazyjson::json_array;
///
/// let mut v = json_array![1, "Hello World", false];
/// assert_eq!(v.serialize().unwrap(), r#"[1.000000,"Hello World",false]"#);
/// ```
#[macro_export]
macro_rules! json_array {
    ( $( $elem:expr ),* $(,)? ) => {
        $crate::Json::array::<_, $crate::Json>([$($crate::Json::from($elem)),*])
    };
}

/// Builds an object [`Json`] from `name => value` pairs of any supported
/// type.
///
/// ```rust
/// use lazyjson::json_object;
///
/// let mut v = json_object! {
///     "name" => "Franz",
///     "surname" => "Kafka",
///     "birth" => 1883,
/// };
/// assert_eq!(
///     v.serialize().unwrap(),
///     r#"{"name":"Franz","surname":"Kafka","birth":1883.000000}"#
/// );
/// ```
#[macro_export]
macro_rules! json_object {
    ( $( $key:expr => $value:expr ),* $(,)? ) => {
        $crate::Json::object::<_, ::std::string::String, $crate::Json>([
            $((::std::string::String::from($key), $crate::Json::from($value))),*
        ])
    };
}
