//! Contract violations: caller misuse that halts the offending operation.
//!
//! A [`Violation`] is never returned as a value. It is reported through
//! [`violated`], which panics with a `contract violation:` prefix and the
//! caller's location. Recoverable conditions (arena exhaustion, domain
//! failures) use `Result`/[`Outcome`](crate::outcome::Outcome) instead.

use std::fmt;

use crate::error::ErrorCode;

/// A caller-side misuse of one of the core primitives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// Element access at or past the end of a bounded view.
    OutOfBounds {
        /// The rejected index.
        index: usize,
        /// Length of the view.
        len: usize,
    },
    /// `get()` on an empty [`Optional`](crate::optional::Optional).
    EmptyAccess,
    /// `unwrap()` on the error arm of an [`Outcome`](crate::outcome::Outcome).
    UnwrapOnFailure {
        /// Code carried by the failure.
        code: ErrorCode,
        /// Message carried by the failure.
        message: String,
    },
    /// A kind-checked accessor was used on a variant of a different kind.
    WrongKind {
        /// The kind the caller asked for.
        expected: &'static str,
        /// The kind actually stored.
        found: &'static str,
    },
    /// A view was constructed longer than the memory it was given.
    LengthExceedsBase {
        /// Requested view length.
        len: usize,
        /// Elements actually available in the base.
        available: usize,
    },
    /// Two views that must have equal lengths did not.
    LengthMismatch {
        /// Length of the destination.
        dst: usize,
        /// Length of the source.
        src: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, len } => {
                write!(f, "index out of bounds: index {index}, len {len}")
            }
            Self::EmptyAccess => write!(f, "empty access: optional holds no value"),
            Self::UnwrapOnFailure { code, message } => {
                write!(f, "unwrap on failure: error {code}: {message}")
            }
            Self::WrongKind { expected, found } => {
                write!(f, "wrong kind: expected {expected}, found {found}")
            }
            Self::LengthExceedsBase { len, available } => {
                write!(f, "view length exceeds base: len {len}, available {available}")
            }
            Self::LengthMismatch { dst, src } => {
                write!(f, "length mismatch: destination {dst}, source {src}")
            }
        }
    }
}

/// Report a contract violation and halt.
///
/// # Panics
///
/// Always. The panic message is `contract violation: {violation}` and the
/// reported location is the caller of the primitive that detected it.
#[cold]
#[track_caller]
pub fn violated(violation: Violation) -> ! {
    panic!("contract violation: {violation}")
}

/// Check `index < len`, reporting [`Violation::OutOfBounds`] otherwise.
#[inline]
#[track_caller]
pub fn check_index(index: usize, len: usize) {
    if index >= len {
        violated(Violation::OutOfBounds { index, len });
    }
}
