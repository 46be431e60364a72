//! Structured domain errors carried by [`Outcome`](crate::outcome::Outcome).
//!
//! A [`Failure`] pairs a small, stable [`ErrorCode`] with a human-readable
//! message. Callers branch on the code; the message is for people.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Stable numeric identifier for a class of domain failure.
///
/// Codes are assigned by the layer that produces them and never reused
/// for a different meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ErrorCode(pub u16);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for ErrorCode {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

/// The error arm of an [`Outcome`](crate::outcome::Outcome).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    code: ErrorCode,
    message: Cow<'static, str>,
}

impl Failure {
    /// Create a failure from a code and message.
    ///
    /// Static messages are stored without allocating.
    pub fn new(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// The stable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the message, keeping the code.
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: self.code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error {}: {}", self.code, self.message)
    }
}

impl Error for Failure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_code_then_message() {
        let f = Failure::new(ErrorCode(1), "Null input");
        assert_eq!(f.to_string(), "error 1: Null input");
    }

    #[test]
    fn owned_and_static_messages_compare_equal() {
        let a = Failure::new(ErrorCode(7), "bad digit");
        let b = Failure::new(ErrorCode(7), String::from("bad digit"));
        assert_eq!(a, b);
    }

    #[test]
    fn with_message_keeps_code() {
        let f = Failure::new(ErrorCode(3), "first").with_message(format!("second ({})", 2));
        assert_eq!(f.code(), ErrorCode(3));
        assert_eq!(f.message(), "second (2)");
    }

    #[test]
    fn failure_is_std_error() {
        fn takes_error(_: &dyn Error) {}
        takes_error(&Failure::new(ErrorCode(1), "x"));
    }
}
