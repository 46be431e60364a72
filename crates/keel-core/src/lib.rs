//! Core types for the Keel primitives.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! value-level building blocks the rest of the workspace is written in:
//!
//! - [`Optional`]: explicit presence instead of null sentinels.
//! - [`Outcome`]: success or a structured [`Failure`] (code + message).
//! - [`BoundedView`] / [`BoundedViewMut`]: non-owning, bounds-checked views.
//! - [`Shape`]: a closed tagged variant with exhaustive dispatch.
//! - [`contract`]: how caller misuse is reported (it halts).
//! - [`id`]: arena identity and generation counters.
//!
//! # Error taxonomy
//!
//! Recoverable conditions travel as values ([`Outcome`], `Result`,
//! [`Optional`]). Contract violations (out-of-bounds index, reading an
//! empty optional, unwrapping a failure, reading the wrong variant) panic
//! at the point of misuse via [`contract::violated`] and are never meant to
//! be caught and continued from.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod id;
pub mod optional;
pub mod outcome;
pub mod shape;
pub mod view;

// Public re-exports for the primary API surface.
pub use contract::Violation;
pub use error::{ErrorCode, Failure};
pub use id::{ArenaId, Generation};
pub use optional::Optional;
pub use outcome::Outcome;
pub use shape::{area, perimeter, Circle, Shape, ShapeKind, Square};
pub use view::{BoundedView, BoundedViewMut};
