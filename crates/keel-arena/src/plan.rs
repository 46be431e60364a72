//! Named, all-or-nothing allocation plans.
//!
//! A [`RegionPlan`] lists named `(size, align)` requests. Passing it to
//! [`Arena::reserve`](crate::Arena::reserve) carves every request or none,
//! and returns a [`RegionTable`] that maps each name to its region in plan
//! order.

use indexmap::IndexMap;
use keel_core::Optional;

use crate::error::ArenaError;
use crate::handle::Region;

/// One named request inside a [`RegionPlan`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionRequest {
    /// Lookup key in the resulting [`RegionTable`].
    pub name: String,
    /// Size in bytes.
    pub size: usize,
    /// Required start alignment in bytes.
    pub align: usize,
}

/// An ordered list of named allocation requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionPlan {
    requests: Vec<RegionRequest>,
}

impl RegionPlan {
    /// An empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request of `size` bytes at `align`.
    pub fn region(mut self, name: impl Into<String>, size: usize, align: usize) -> Self {
        self.requests.push(RegionRequest {
            name: name.into(),
            size,
            align,
        });
        self
    }

    /// Append room for `len` values of `T` at `T`'s alignment.
    ///
    /// A size that overflows `usize` saturates, so the plan can never fit.
    pub fn slice_of<T>(self, name: impl Into<String>, len: usize) -> Self {
        let size = len.saturating_mul(std::mem::size_of::<T>());
        self.region(name, size, std::mem::align_of::<T>())
    }

    /// The requests, in placement order.
    pub fn requests(&self) -> &[RegionRequest] {
        &self.requests
    }

    /// Number of requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether the plan has no requests.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Sum of requested sizes, padding excluded.
    pub fn total_size(&self) -> usize {
        self.requests
            .iter()
            .fold(0usize, |acc, r| acc.saturating_add(r.size))
    }

    /// Reject duplicate names and invalid alignments.
    pub fn validate(&self) -> Result<(), ArenaError> {
        for (i, request) in self.requests.iter().enumerate() {
            if !request.align.is_power_of_two() {
                return Err(ArenaError::InvalidAlignment {
                    align: request.align,
                });
            }
            if self.requests[..i].iter().any(|r| r.name == request.name) {
                return Err(ArenaError::DuplicateRegion {
                    name: request.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Regions carved from one [`RegionPlan`], by name, in plan order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionTable {
    regions: IndexMap<String, Region>,
}

impl RegionTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            regions: IndexMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, name: String, region: Region) {
        self.regions.insert(name, region);
    }

    /// The region reserved under `name`.
    pub fn get(&self, name: &str) -> Optional<Region> {
        self.regions.get(name).copied().into()
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// `(name, region)` pairs in plan order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Region)> + '_ {
        self.regions.iter().map(|(name, region)| (name.as_str(), *region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arena;
    use keel_test_utils::AlignedBuffer;

    fn header_and_payload() -> RegionPlan {
        RegionPlan::new()
            .region("header", 12, 4)
            .slice_of::<u64>("payload", 8)
    }

    #[test]
    fn plan_accumulates_in_order() {
        let plan = header_and_payload();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.total_size(), 12 + 64);
        assert_eq!(plan.requests()[1].align, 8);
        assert_eq!(plan.requests()[1].name, "payload");
    }

    #[test]
    fn duplicate_names_rejected() {
        let plan = RegionPlan::new().region("a", 1, 1).region("a", 2, 1);
        assert_eq!(
            plan.validate(),
            Err(ArenaError::DuplicateRegion { name: "a".into() })
        );
    }

    #[test]
    fn bad_alignment_rejected() {
        let plan = RegionPlan::new().region("a", 1, 5);
        assert_eq!(
            plan.validate(),
            Err(ArenaError::InvalidAlignment { align: 5 })
        );
    }

    #[test]
    fn reserve_places_every_region() {
        let mut arena = Arena::new(AlignedBuffer::new(256));
        let table = arena.reserve(&header_and_payload()).unwrap();
        let header = table.get("header").get();
        let payload = table.get("payload").get();
        assert_eq!(header.offset(), 0);
        assert_eq!(payload.offset(), 16);
        assert_eq!(arena.used(), 80);
        assert!(arena.view::<u64>(payload).is_ok());
        let names: Vec<_> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["header", "payload"]);
        assert!(table.get("missing").is_empty());
    }

    #[test]
    fn reserve_is_all_or_nothing() {
        let mut arena = Arena::new(AlignedBuffer::new(64));
        assert!(arena.alloc(8).is_present());
        let plan = RegionPlan::new().region("a", 32, 1).region("b", 32, 1);
        assert_eq!(
            arena.reserve(&plan),
            Err(ArenaError::OutOfMemory {
                requested: 64,
                remaining: 56,
            })
        );
        assert_eq!(arena.used(), 8);
        assert_eq!(arena.stats().allocations, 1);
        assert_eq!(arena.stats().failed_allocations, 1);
    }

    #[test]
    fn reserve_rejects_duplicates_without_allocating() {
        let mut arena = Arena::new(AlignedBuffer::new(64));
        let plan = RegionPlan::new().region("a", 1, 1).region("a", 1, 1);
        assert!(matches!(
            arena.reserve(&plan),
            Err(ArenaError::DuplicateRegion { .. })
        ));
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn empty_plan_reserves_nothing() {
        let mut arena = Arena::new(AlignedBuffer::new(8));
        let table = arena.reserve(&RegionPlan::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn overflowing_slice_never_fits() {
        let mut arena = Arena::new(AlignedBuffer::new(64));
        let plan = RegionPlan::new().slice_of::<u32>("huge", usize::MAX);
        assert!(matches!(
            arena.reserve(&plan),
            Err(ArenaError::OutOfMemory { .. })
        ));
    }
}
