use crate::{Case, UnknownEnumValue};

use core::fmt::{self, Debug};
use core::hash::{Hash, Hasher};

/// A raw case number as seen through a portable ("native") case enumeration.
///
/// Native case enumerations are shared outside their message, so a number
/// produced by a newer schema may reach code that does not know it. Instead of
/// failing, the number is kept as [`OpenEnum::Unknown`] and can be passed
/// along unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum OpenEnum<T> {
    /// A case declared by the enumeration.
    Known(T),
    /// A number not declared by the enumeration.
    Unknown(Unknown),
}

impl<T> Default for OpenEnum<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::Known(T::default())
    }
}

impl<T> From<T> for OpenEnum<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl<T> OpenEnum<T>
where
    T: Case,
{
    /// Converts a raw case number into an open case value.
    pub fn from_raw(value: i32) -> Self {
        match T::for_number(value) {
            Some(case) => Self::Known(case),
            None => Self::Unknown(Unknown(value)),
        }
    }

    /// Converts an open case value back into its raw number.
    pub fn to_raw(self) -> i32 {
        match self {
            Self::Known(case) => case.into(),
            Self::Unknown(u) => u.0,
        }
    }

    /// Returns `true` if the value is a declared member case, i.e. neither
    /// unknown nor `NOT_SET`.
    pub fn is_set(self) -> bool {
        match self {
            Self::Known(case) => case.is_set(),
            Self::Unknown(_) => false,
        }
    }

    /// If the value is known, returns it in `Ok`, otherwise returns an `Err`
    /// with the unknown number.
    pub fn get(self) -> Result<T, UnknownEnumValue> {
        match self {
            Self::Known(case) => Ok(case),
            Self::Unknown(u) => Err(u.into()),
        }
    }

    /// If the value is known, returns it in `Some`, otherwise returns `None`.
    pub fn known(self) -> Option<T> {
        match self {
            Self::Known(case) => Some(case),
            Self::Unknown(_) => None,
        }
    }

    /// Returns the known case, or `default` if the number is unknown.
    pub fn unwrap_or(self, default: T) -> T {
        self.known().unwrap_or(default)
    }

    /// Returns the known case, or computes one from the unknown number.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Unknown) -> T,
    {
        match self {
            Self::Known(case) => case,
            Self::Unknown(u) => f(u),
        }
    }
}

impl<T: Hash> Hash for OpenEnum<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            OpenEnum::Known(v) => v.hash(state),
            OpenEnum::Unknown(u) => u.0.hash(state),
        }
    }
}

/// A case number not declared by the enumeration it was looked up in.
///
/// This wrapper keeps [`OpenEnum::Unknown`] from carrying a number that is in
/// fact known, and should rarely be used by name.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unknown(i32);

impl Debug for Unknown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Unknown> for i32 {
    fn from(value: Unknown) -> Self {
        value.0
    }
}

impl From<Unknown> for UnknownEnumValue {
    fn from(value: Unknown) -> Self {
        UnknownEnumValue(value.0)
    }
}
