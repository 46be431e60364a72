//! Keel: arena allocation, bounded views, and explicit presence/outcome
//! types for systems code.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Keel sub-crates. For most users, adding `keel` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use keel::prelude::*;
//!
//! // Caller-owned memory; the arena borrows it.
//! let mut backing = [0u64; 128];
//! let mut arena = Arena::new(bytemuck::cast_slice_mut::<u64, u8>(&mut backing));
//!
//! let region = arena.alloc_slice::<i32>(10).unwrap();
//! assert!(arena.alloc(2000).is_empty());
//!
//! let mut nums = arena.view_mut::<i32>(region).unwrap();
//! for i in 0..nums.len() {
//!     nums.set(i, i as i32);
//! }
//! assert_eq!(nums.as_view().iter().sum::<i32>(), 45);
//!
//! let parsed: Outcome<u8> = Outcome::err(ErrorCode(1), "Null input");
//! assert!(parsed.is_err());
//!
//! assert_eq!(area(&Shape::square(3.0)), 9.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `keel-arena` | `Arena`, `Region`, plans, config, stats |
//! | [`types`] | `keel-core` | `Optional`, `Outcome`, views, `Shape`, ids, contract checks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arena allocation and region handles (`keel-arena`).
pub use keel_arena as arena;

/// Core value types: presence, outcomes, views, tagged variants
/// (`keel-core`).
pub use keel_core as types;

/// Common imports for typical usage.
///
/// ```rust
/// use keel::prelude::*;
/// ```
pub mod prelude {
    pub use keel_arena::{
        Arena, ArenaConfig, ArenaError, ArenaStats, Region, RegionPlan, RegionTable,
    };
    pub use keel_core::{
        area, perimeter, BoundedView, BoundedViewMut, Circle, ErrorCode, Failure, Generation,
        Optional, Outcome, Shape, ShapeKind, Square,
    };
}
