//! Region handles.
//!
//! A [`Region`] records where an allocation lives inside an arena. It is a
//! plain `Copy` value that does not borrow the arena; it is turned back
//! into bytes or a typed view through the arena, which checks the arena ID
//! and generation in O(1) first.

use std::fmt;

use keel_core::{ArenaId, Generation};

/// Location of one allocation within an arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct Region {
    /// Arena that issued this region.
    pub(crate) arena: ArenaId,
    /// Arena generation when this allocation was made.
    pub(crate) generation: Generation,
    /// Byte offset from the start of the buffer.
    pub(crate) offset: usize,
    /// Length in bytes.
    pub(crate) len: usize,
}

impl Region {
    pub(crate) fn new(arena: ArenaId, generation: Generation, offset: usize, len: usize) -> Self {
        Self {
            arena,
            generation,
            offset,
            len,
        }
    }

    /// The arena that issued this region.
    pub fn arena(&self) -> ArenaId {
        self.arena
    }

    /// The generation this region belongs to.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Byte offset from the start of the arena's buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length region.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last byte offset.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Whether the two regions share at least one byte.
    ///
    /// Zero-length regions overlap nothing.
    pub fn overlaps(&self, other: &Region) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.offset < other.end()
            && other.offset < self.end()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Region(arena={}, gen={}, off={}, len={})",
            self.arena, self.generation, self.offset, self.len
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(offset: usize, len: usize) -> Region {
        Region::new(ArenaId::next(), Generation::INITIAL, offset, len)
    }

    #[test]
    fn accessors() {
        let r = Region::new(ArenaId::next(), Generation(4), 16, 40);
        assert_eq!(r.generation(), Generation(4));
        assert_eq!(r.offset(), 16);
        assert_eq!(r.len(), 40);
        assert_eq!(r.end(), 56);
        assert!(!r.is_empty());
    }

    #[test]
    fn adjacent_regions_do_not_overlap() {
        assert!(!region(0, 8).overlaps(&region(8, 8)));
        assert!(!region(8, 8).overlaps(&region(0, 8)));
    }

    #[test]
    fn intersecting_regions_overlap() {
        assert!(region(0, 9).overlaps(&region(8, 8)));
        assert!(region(4, 2).overlaps(&region(0, 16)));
    }

    #[test]
    fn empty_region_overlaps_nothing() {
        assert!(!region(4, 0).overlaps(&region(0, 16)));
        assert!(region(4, 0).is_empty());
    }
}
