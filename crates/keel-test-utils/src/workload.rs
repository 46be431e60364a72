//! Seeded allocation workloads.
//!
//! Same seed, same requests: fragmentation tests and benchmarks replay an
//! identical mix on every run.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Alignments a workload draws from.
pub const ALIGNS: [usize; 5] = [1, 2, 4, 8, 16];

/// One allocation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocRequest {
    pub size: usize,
    pub align: usize,
}

/// An ordered list of allocation requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocWorkload {
    pub requests: Vec<AllocRequest>,
}

impl AllocWorkload {
    /// `count` requests with sizes in `0..=max_size` and alignments drawn
    /// from [`ALIGNS`], generated from `seed`.
    pub fn seeded(seed: u64, count: usize, max_size: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let span = max_size as u64 + 1;
        let requests = (0..count)
            .map(|_| AllocRequest {
                size: (rng.next_u64() % span) as usize,
                align: ALIGNS[(rng.next_u32() as usize) % ALIGNS.len()],
            })
            .collect();
        Self { requests }
    }

    /// `count` identical requests.
    pub fn uniform(count: usize, size: usize, align: usize) -> Self {
        Self {
            requests: vec![AllocRequest { size, align }; count],
        }
    }

    /// Sum of requested sizes, padding excluded.
    pub fn total_size(&self) -> usize {
        self.requests.iter().map(|r| r.size).sum()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AllocRequest> {
        self.requests.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_workload() {
        assert_eq!(
            AllocWorkload::seeded(42, 100, 64),
            AllocWorkload::seeded(42, 100, 64)
        );
    }

    #[test]
    fn different_seed_different_workload() {
        assert_ne!(
            AllocWorkload::seeded(1, 100, 64),
            AllocWorkload::seeded(2, 100, 64)
        );
    }

    #[test]
    fn requests_respect_bounds() {
        let w = AllocWorkload::seeded(7, 500, 32);
        assert_eq!(w.len(), 500);
        assert!(w.iter().all(|r| r.size <= 32));
        assert!(w.iter().all(|r| ALIGNS.contains(&r.align)));
    }

    #[test]
    fn uniform_total() {
        let w = AllocWorkload::uniform(4, 10, 8);
        assert_eq!(w.total_size(), 40);
    }
}
