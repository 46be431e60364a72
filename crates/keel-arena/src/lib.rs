//! Fixed-capacity generational bump arena for Keel.
//!
//! An [`Arena`] binds to a byte buffer the caller supplies (borrowed or
//! owned) and hands out non-overlapping [`Region`]s by advancing a cursor.
//! Regions resolve back to bytes or to typed, bounds-checked views.
//!
//! # Architecture
//!
//! ```text
//! Arena<B> (owns or exclusively borrows B: AsRef<[u8]> + AsMut<[u8]>)
//! ├── cursor (`used`): only grows until reset
//! ├── Generation: advanced on reset; stamped into every Region
//! ├── ArenaId: process-unique; stamped into every Region
//! └── counters → ArenaStats
//!
//! Region (Copy handle: arena, generation, offset, len)
//!   └── Arena::view / view_mut → BoundedView<'_, T> / BoundedViewMut<'_, T>
//! ```
//!
//! # Reclamation
//!
//! There is no per-region free. [`Arena::reset`] reclaims the whole buffer
//! and starts a new generation: views cannot survive it (it needs
//! `&mut self`), and older regions fail to resolve with
//! [`ArenaError::StaleRegion`].
//!
//! # Safety
//!
//! No `unsafe`. Byte-to-`[T]` casts go through `bytemuck` and are limited
//! to `Pod` element types; alignment and length are checked on every cast.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod bump;
pub mod config;
pub mod error;
pub mod handle;
pub mod plan;
pub mod stats;

// Public re-exports for the primary API surface.
pub use bump::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::Region;
pub use plan::{RegionPlan, RegionRequest, RegionTable};
pub use stats::ArenaStats;
