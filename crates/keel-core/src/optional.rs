//! Explicit presence: a value that is either there or checked to be absent.

use crate::contract::{self, Violation};
use crate::error::Failure;
use crate::outcome::Outcome;

/// A single value that may be absent.
///
/// There is no null sentinel: absence is its own variant and reading the
/// value of an empty optional is a [`Violation::EmptyAccess`]. Converts
/// losslessly to and from [`Option`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[must_use]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value.
    #[default]
    Empty,
}

impl<T> Optional<T> {
    /// A present optional holding `value`.
    pub fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// An empty optional.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Whether a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Whether the optional is empty.
    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Take the value.
    ///
    /// # Panics
    ///
    /// Contract violation ([`Violation::EmptyAccess`]) when empty.
    #[track_caller]
    pub fn get(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => contract::violated(Violation::EmptyAccess),
        }
    }

    /// Take the value, or `default` when empty.
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// Borrow the contents.
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Apply `f` to a present value. `f` is never called when empty.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(f(value)),
            Self::Empty => Optional::Empty,
        }
    }

    /// Chain a computation that may itself produce nothing.
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Keep the value only if `predicate` accepts it.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) if predicate(&value) => Self::Present(value),
            _ => Self::Empty,
        }
    }

    /// Turn absence into a domain failure.
    pub fn ok_or(self, failure: Failure) -> Outcome<T> {
        match self {
            Self::Present(value) => Outcome::Ok(value),
            Self::Empty => Outcome::Err(failure),
        }
    }

    /// Convert to a standard [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Present(v),
            None => Self::Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(v) => Some(v),
            Optional::Empty => None,
        }
    }
}
