/// A component in the path to a JSON value.
///
/// Paths are sequences of keys or indices (for objects and arrays,
/// respectively) used by [`Json::get_path`](crate::Json::get_path) to reach a
/// value nested inside a document, and yielded alongside each child by
/// [`Json::children`](crate::Json::children).
///
/// # Examples
///
/// ```
/// use lazyjson::PathComponent;
///
/// let key: PathComponent = "foo".into();
/// assert_eq!(key.as_key(), Some("foo"));
///
/// let idx: PathComponent = 3usize.into();
/// assert_eq!(idx.as_index(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathComponent<K = String> {
    Key(K),
    Index(usize),
}

impl<K: AsRef<str>> PathComponent<K> {
    /// Returns the key if this component addresses an object member.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(k) => Some(k.as_ref()),
            Self::Index(_) => None,
        }
    }

    /// Returns the index if this component addresses an array element.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Key(_) => None,
            Self::Index(i) => Some(*i),
        }
    }
}

impl PathComponent<&str> {
    /// Converts a borrowed component into an owned one.
    #[must_use]
    pub fn into_owned(self) -> PathComponent {
        match self {
            Self::Key(k) => PathComponent::Key(k.to_string()),
            Self::Index(i) => PathComponent::Index(i),
        }
    }
}

impl From<usize> for PathComponent {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl From<&str> for PathComponent {
    fn from(key: &str) -> Self {
        Self::Key(key.into())
    }
}

impl From<String> for PathComponent {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

/// Conversion used by [`path!`](crate::path). Unlike `From`, it accepts the
/// signed integer type an unsuffixed literal defaults to.
#[doc(hidden)]
pub trait PathComponentFrom<T> {
    fn from_path_component(value: T) -> PathComponent;
}

macro_rules! index_components {
    ($($t:ty),+) => {
        $(
            impl PathComponentFrom<$t> for PathComponent {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn from_path_component(index: $t) -> Self {
                    Self::Index(index as usize)
                }
            }
        )+
    };
}

index_components!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<'a> PathComponentFrom<&'a str> for PathComponent {
    fn from_path_component(key: &'a str) -> Self {
        key.into()
    }
}

impl PathComponentFrom<String> for PathComponent {
    fn from_path_component(key: String) -> Self {
        key.into()
    }
}
