//! Benchmark profiles and utilities for the Keel primitives.
//!
//! Provides pre-built workloads and arenas for benchmarking:
//!
//! - [`churn_workload`]: seeded mix of small allocations at varied alignments
//! - [`frame_plan`]: a fixed per-frame scratch layout reserved in one call
//! - [`arena_for`]: an arena sized to hold a whole workload
//! - [`fill_sequential`]: write `0..len` through a bounds-checked view

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use keel_arena::{Arena, RegionPlan};
use keel_core::BoundedViewMut;
use keel_test_utils::{AlignedBuffer, AllocWorkload};

/// Number of requests in [`churn_workload`].
pub const CHURN_REQUESTS: usize = 1_000;

/// Largest request size in [`churn_workload`].
pub const CHURN_MAX_SIZE: usize = 256;

/// Element count of each slice in [`frame_plan`].
pub const FRAME_ELEMS: usize = 4_096;

/// Seeded allocation mix: [`CHURN_REQUESTS`] requests, sizes `0..=CHURN_MAX_SIZE`.
pub fn churn_workload(seed: u64) -> AllocWorkload {
    AllocWorkload::seeded(seed, CHURN_REQUESTS, CHURN_MAX_SIZE)
}

/// Per-frame scratch layout: positions, velocities, and an index list.
pub fn frame_plan() -> RegionPlan {
    RegionPlan::new()
        .slice_of::<f32>("positions", FRAME_ELEMS)
        .slice_of::<f32>("velocities", FRAME_ELEMS)
        .slice_of::<u32>("indices", FRAME_ELEMS)
}

/// An arena whose capacity covers every request in `workload` at worst-case
/// padding, so a single pass never runs out of memory.
pub fn arena_for(workload: &AllocWorkload) -> Arena<AlignedBuffer> {
    let worst_padding: usize = workload.iter().map(|r| r.align - 1).sum();
    Arena::new(AlignedBuffer::new(workload.total_size() + worst_padding))
}

/// Write `0, 1, 2, ...` through `view` using checked element access.
pub fn fill_sequential(view: &mut BoundedViewMut<'_, u32>) {
    for i in 0..view.len() {
        view.set(i, i as u32);
    }
}
