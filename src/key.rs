//! Collection keys.
//!
//! Every element of a [`Collection`](crate::Collection) lives under a [`Key`], which
//! is either an integer index or a string. Collections built from plain sequences
//! use integer keys `0..n`; associative construction and grouping use whatever keys
//! the caller supplies.

use crate::CollectionError;
use std::fmt;

/// A key in a [`Collection`](crate::Collection).
///
/// Integer keys sort before string keys. Integers compare numerically and strings
/// lexicographically.
///
/// ```
/// use ironcollect::Key;
///
/// assert_eq!(Key::from(3), Key::Int(3));
/// assert_eq!(Key::from("name"), Key::Str("name".into()));
/// assert!(Key::Int(100) < Key::from("a"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Positional or explicit integer key.
    Int(i64),
    /// Associative string key.
    Str(String),
}

impl Key {
    /// Returns the integer value if this is an integer key.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    /// Returns the string value if this is a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Parse a string key, turning canonical integer strings (`"4"`, `"-2"`) into
    /// integer keys. `"04"` and `"+4"` stay strings.
    pub fn parse(s: &str) -> Self {
        match s.parse::<i64>() {
            Ok(i) if i.to_string() == s => Key::Int(i),
            _ => Key::Str(s.to_string()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => write!(f, "{s}"),
        }
    }
}

macro_rules! impl_int_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Key {
                fn from(value: $t) -> Self {
                    Key::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_int_key!(i8, i16, i32, i64, u8, u16, u32);

// u64 and the pointer-sized integers may not fit in an i64 key.
macro_rules! impl_try_int_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl TryFrom<$t> for Key {
                type Error = CollectionError;

                fn try_from(value: $t) -> Result<Self, Self::Error> {
                    i64::try_from(value).map(Key::Int).map_err(|_| CollectionError::InvalidKey {
                        reason: format!("integer {value} does not fit in an i64 key"),
                    })
                }
            }
        )*
    };
}

impl_try_int_key!(u64, usize, isize);

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Str(value.clone())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<char> for Key {
    fn from(value: char) -> Self {
        Key::Str(value.to_string())
    }
}
