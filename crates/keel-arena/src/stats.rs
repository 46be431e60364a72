//! Allocation counters for an arena.
//!
//! [`ArenaStats`] is a point-in-time copy of an arena's fill level and
//! cumulative counters, for telemetry and capacity tuning by callers.

use keel_core::Generation;

/// Fill level and cumulative counters of one arena.
///
/// Counters are cumulative across resets; `used` and `generation` describe
/// the current generation only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    /// Buffer size in bytes.
    pub capacity: usize,
    /// Bytes handed out in the current generation, padding included.
    pub used: usize,
    /// Largest `used` value ever reached.
    pub high_water: usize,
    /// Current generation.
    pub generation: Generation,
    /// Cumulative number of successful allocations.
    pub allocations: u64,
    /// Cumulative number of allocations (or plans) rejected for lack of room.
    pub failed_allocations: u64,
    /// Cumulative bytes skipped to satisfy alignment.
    pub padding_bytes: usize,
    /// Cumulative number of resets.
    pub resets: u64,
}

impl ArenaStats {
    /// Bytes still available in the current generation.
    pub fn remaining(&self) -> usize {
        self.capacity - self.used
    }

    /// Fraction of capacity in use, in `[0.0, 1.0]`. Zero for an empty buffer.
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.used as f64 / self.capacity as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let s = ArenaStats::default();
        assert_eq!(s.capacity, 0);
        assert_eq!(s.allocations, 0);
        assert_eq!(s.utilization(), 0.0);
    }

    #[test]
    fn remaining_and_utilization() {
        let s = ArenaStats {
            capacity: 1024,
            used: 256,
            ..Default::default()
        };
        assert_eq!(s.remaining(), 768);
        assert_eq!(s.utilization(), 0.25);
    }
}
