//! Criterion micro-benchmarks for arena allocation, reservation, and reset.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use keel_arena::Arena;
use keel_bench::{arena_for, churn_workload, fill_sequential, frame_plan, FRAME_ELEMS};
use keel_test_utils::AlignedBuffer;

/// Benchmark: 1K seeded allocations at mixed alignments, then reset.
fn bench_alloc_churn(c: &mut Criterion) {
    let workload = churn_workload(42);
    let mut arena = arena_for(&workload);
    c.bench_function("arena_alloc_churn_1k", |b| {
        b.iter(|| {
            for req in workload.iter() {
                black_box(arena.alloc_aligned(req.size, req.align).unwrap());
            }
            arena.reset();
        });
    });
}

/// Benchmark: byte-aligned `alloc` until exhaustion, then reset.
fn bench_alloc_until_full(c: &mut Criterion) {
    let mut arena = Arena::new(AlignedBuffer::new(64 * 1024));
    c.bench_function("arena_alloc_until_full_64k", |b| {
        b.iter(|| {
            while let Some(region) = arena.alloc(48).into_option() {
                black_box(region);
            }
            arena.reset();
        });
    });
}

/// Benchmark: reserve a three-slice frame layout in one call, then reset.
fn bench_reserve_frame(c: &mut Criterion) {
    let plan = frame_plan();
    let mut arena = Arena::new(AlignedBuffer::new(plan.total_size() + 64));
    c.bench_function("arena_reserve_frame", |b| {
        b.iter(|| {
            let table = arena.reserve(&plan).unwrap();
            black_box(table.len());
            arena.reset();
        });
    });
}

/// Benchmark: allocate and fill a 4K-element view each frame.
fn bench_frame_fill(c: &mut Criterion) {
    let mut arena = Arena::new(AlignedBuffer::new(FRAME_ELEMS * 4));
    c.bench_function("arena_frame_fill_4k", |b| {
        b.iter(|| {
            {
                let mut view = arena.alloc_view_mut::<u32>(FRAME_ELEMS).unwrap();
                fill_sequential(&mut view);
                black_box(view.get(FRAME_ELEMS - 1));
            }
            arena.reset();
        });
    });
}

criterion_group!(
    benches,
    bench_alloc_churn,
    bench_alloc_until_full,
    bench_reserve_frame,
    bench_frame_fill
);
criterion_main!(benches);
