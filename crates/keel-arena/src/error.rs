//! Arena-specific error types.

use std::error::Error;
use std::fmt;

use keel_core::{ArenaId, Generation};

/// Errors that can occur during arena operations.
///
/// All of these are recoverable: the arena is left exactly as it was
/// before the failing call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Not enough room left for the request, including alignment padding.
    OutOfMemory {
        /// Number of bytes requested (for plans: bytes the plan needs from
        /// the current cursor, padding included).
        requested: usize,
        /// Bytes left between the cursor and the end of the buffer.
        remaining: usize,
    },
    /// The alignment is zero or not a power of two.
    InvalidAlignment {
        /// The rejected alignment.
        align: usize,
    },
    /// A region issued by a different arena.
    ForeignRegion {
        /// The arena that issued the region.
        region_arena: ArenaId,
        /// The arena it was presented to.
        arena: ArenaId,
    },
    /// A region from a generation that has since been reset.
    StaleRegion {
        /// The generation encoded in the region.
        region_generation: Generation,
        /// The arena's current generation.
        current: Generation,
    },
    /// The region's start address does not satisfy the element alignment.
    Misaligned {
        /// Alignment the element type needs.
        align: usize,
        /// Offset of the region within the buffer.
        offset: usize,
    },
    /// The region's byte length is not a whole number of elements.
    SizeMismatch {
        /// Region length in bytes.
        len: usize,
        /// Size of one element in bytes.
        elem_size: usize,
    },
    /// Two requests in one plan share a name.
    DuplicateRegion {
        /// The repeated name.
        name: String,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena out of memory: requested {requested} bytes, {remaining} bytes remaining"
                )
            }
            Self::InvalidAlignment { align } => {
                write!(f, "invalid alignment {align}: must be a non-zero power of two")
            }
            Self::ForeignRegion {
                region_arena,
                arena,
            } => {
                write!(
                    f,
                    "foreign region: issued by arena {region_arena}, presented to arena {arena}"
                )
            }
            Self::StaleRegion {
                region_generation,
                current,
            } => {
                write!(
                    f,
                    "stale region: generation {region_generation}, current {current}"
                )
            }
            Self::Misaligned { align, offset } => {
                write!(f, "region at offset {offset} is not aligned to {align} bytes")
            }
            Self::SizeMismatch { len, elem_size } => {
                write!(
                    f,
                    "region of {len} bytes is not a whole number of {elem_size}-byte elements"
                )
            }
            Self::DuplicateRegion { name } => {
                write!(f, "duplicate region name '{name}' in plan")
            }
        }
    }
}

impl Error for ArenaError {}
