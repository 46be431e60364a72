//! Success or structured failure, as a value.
//!
//! [`Outcome`] is the two-arm sum type domain code returns instead of
//! throwing. The failure arm carries a [`Failure`] (code + message). State
//! is inspected with [`Outcome::is_ok`] / [`Outcome::is_err`] or `match`
//! before the payload is taken; [`Outcome::unwrap`] on a failure is a
//! contract violation, not a recoverable error.
//!
//! Interop with `?` goes through [`Outcome::into_result`] and the
//! `From<Result<T, Failure>>` impl.

use std::borrow::Cow;

use crate::contract::{self, Violation};
use crate::error::{ErrorCode, Failure};
use crate::optional::Optional;

/// Either a value or a [`Failure`]. Exactly one arm is populated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// Success.
    Ok(T),
    /// Failure with a stable code and a message.
    Err(Failure),
}

impl<T> Outcome<T> {
    /// A successful outcome.
    pub fn ok(value: T) -> Self {
        Self::Ok(value)
    }

    /// A failed outcome.
    pub fn err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Err(Failure::new(code, message))
    }

    /// Whether this is the success arm.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Whether this is the failure arm.
    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Take the success value.
    ///
    /// # Panics
    ///
    /// Contract violation ([`Violation::UnwrapOnFailure`]) on the failure
    /// arm. The panic message names the code and message.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(failure) => contract::violated(Violation::UnwrapOnFailure {
                code: failure.code(),
                message: failure.message().to_owned(),
            }),
        }
    }

    /// Take the success value, or `default` on failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// The failure code, empty on success.
    pub fn error_code(&self) -> Optional<ErrorCode> {
        match self {
            Self::Ok(_) => Optional::Empty,
            Self::Err(failure) => Optional::Present(failure.code()),
        }
    }

    /// The failure message, empty on success.
    pub fn error_message(&self) -> Optional<&str> {
        match self {
            Self::Ok(_) => Optional::Empty,
            Self::Err(failure) => Optional::Present(failure.message()),
        }
    }

    /// The failure, if any.
    pub fn failure(&self) -> Optional<&Failure> {
        match self {
            Self::Ok(_) => Optional::Empty,
            Self::Err(failure) => Optional::Present(failure),
        }
    }

    /// The success value as an [`Optional`], discarding any failure.
    pub fn ok_value(self) -> Optional<T> {
        match self {
            Self::Ok(value) => Optional::Present(value),
            Self::Err(_) => Optional::Empty,
        }
    }

    /// Transform the success value. Failures pass through untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Transform the failure. Success passes through untouched.
    pub fn map_err<F>(self, f: F) -> Self
    where
        F: FnOnce(Failure) -> Failure,
    {
        match self {
            Self::Ok(value) => Self::Ok(value),
            Self::Err(failure) => Self::Err(f(failure)),
        }
    }

    /// Chain a fallible computation on success.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Convert to a standard [`Result`] for use with `?`.
    pub fn into_result(self) -> Result<T, Failure> {
        self.into()
    }
}

impl<T> From<Result<T, Failure>> for Outcome<T> {
    fn from(value: Result<T, Failure>) -> Self {
        match value {
            Ok(v) => Self::Ok(v),
            Err(f) => Self::Err(f),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Failure> {
    fn from(value: Outcome<T>) -> Self {
        match value {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(f) => Err(f),
        }
    }
}
