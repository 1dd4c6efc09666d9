//! Lookup keys.
//!
//! A key is either a string (possibly a dot-separated path) or an integer.
//! Integer keys are looked up by their decimal form, so `Key::Int(1)` and
//! `Key::from("1")` address the same slot.

use std::borrow::Cow;
use std::fmt;

/// A string or integer lookup key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key<'k> {
    Str(Cow<'k, str>),
    Int(i64),
}

impl<'k> Key<'k> {
    /// The string form used for lookups
    pub fn as_str(&self) -> Cow<'_, str> {
        match self {
            Key::Str(s) => Cow::Borrowed(s.as_ref()),
            Key::Int(i) => Cow::Owned(i.to_string()),
        }
    }

    /// Check whether the key spans more than one segment
    pub fn is_path(&self) -> bool {
        matches!(self, Key::Str(s) if s.contains('.'))
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => f.write_str(s),
            Key::Int(i) => write!(f, "{}", i),
        }
    }
}

impl<'k> From<&'k str> for Key<'k> {
    fn from(value: &'k str) -> Self {
        Key::Str(Cow::Borrowed(value))
    }
}

impl<'k> From<&'k String> for Key<'k> {
    fn from(value: &'k String) -> Self {
        Key::Str(Cow::Borrowed(value.as_str()))
    }
}

impl<'k> From<String> for Key<'k> {
    fn from(value: String) -> Self {
        Key::Str(Cow::Owned(value))
    }
}

impl<'k> From<Cow<'k, str>> for Key<'k> {
    fn from(value: Cow<'k, str>) -> Self {
        Key::Str(value)
    }
}

impl<'k> From<i64> for Key<'k> {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl<'k> From<i32> for Key<'k> {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl<'k> From<u32> for Key<'k> {
    fn from(value: u32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl<'k> From<u64> for Key<'k> {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Key::Int)
            .unwrap_or_else(|_| Key::Str(Cow::Owned(value.to_string())))
    }
}

impl<'k> From<usize> for Key<'k> {
    fn from(value: usize) -> Self {
        Key::from(value as u64)
    }
}

/// A key that may be absent.
///
/// `get` returns the whole container when handed an absent key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyArg<'k>(pub Option<Key<'k>>);

impl KeyArg<'static> {
    /// Absent key: select the whole container
    pub const WHOLE: KeyArg<'static> = KeyArg(None);
}

impl<'k> KeyArg<'k> {
    pub fn into_inner(self) -> Option<Key<'k>> {
        self.0
    }
}

impl<'k> From<Key<'k>> for KeyArg<'k> {
    fn from(key: Key<'k>) -> Self {
        KeyArg(Some(key))
    }
}

impl<'k> From<Option<Key<'k>>> for KeyArg<'k> {
    fn from(key: Option<Key<'k>>) -> Self {
        KeyArg(key)
    }
}

impl<'k> From<&'k str> for KeyArg<'k> {
    fn from(key: &'k str) -> Self {
        KeyArg(Some(key.into()))
    }
}

impl<'k> From<Option<&'k str>> for KeyArg<'k> {
    fn from(key: Option<&'k str>) -> Self {
        KeyArg(key.map(Key::from))
    }
}

impl<'k> From<&'k String> for KeyArg<'k> {
    fn from(key: &'k String) -> Self {
        KeyArg(Some(key.into()))
    }
}

impl<'k> From<Option<&'k String>> for KeyArg<'k> {
    fn from(key: Option<&'k String>) -> Self {
        KeyArg(key.map(Key::from))
    }
}

macro_rules! impl_owned_key_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'k> From<$ty> for KeyArg<'k> {
                fn from(key: $ty) -> Self {
                    KeyArg(Some(Key::from(key)))
                }
            }

            impl<'k> From<Option<$ty>> for KeyArg<'k> {
                fn from(key: Option<$ty>) -> Self {
                    KeyArg(key.map(Key::from))
                }
            }
        )*
    };
}

impl_owned_key_arg!(String, i64, i32, u32, u64, usize);
