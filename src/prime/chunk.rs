//! Chunk Partitioning Module
//!
//! Splits the divisor search range `[5, sqrt(n)]` into contiguous pieces,
//! one per worker.

use crate::prime::oracle::FIRST_WHEEL_DIVISOR;

// == Chunk ==
/// A closed range `[start, end]` of candidate divisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub start: u64,
    pub end: u64,
}

impl Chunk {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Number of integers covered by the chunk.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    // == Find Divisor ==
    /// Returns the smallest divisor of `n` of the form 6k±1 inside the chunk.
    pub fn find_divisor(&self, n: u64) -> Option<u64> {
        (self.start..=self.end)
            .filter(|d| d % 6 == 1 || d % 6 == 5)
            .find(|d| n % d == 0)
    }
}

// == Partition ==
/// Partitions `[5, sqrt_n]` into at most `workers` contiguous chunks of
/// `ceil(len / workers)` integers each, the last one clipped to `sqrt_n`.
///
/// Returns no chunks when `sqrt_n < 5`. Chunks that would start past
/// `sqrt_n` are left out, so fewer than `workers` chunks come back whenever
/// `ceil(len / workers) * (workers - 1) >= len`, e.g. `partition(13, 4)`.
pub fn partition(sqrt_n: u64, workers: usize) -> Vec<Chunk> {
    if sqrt_n < FIRST_WHEEL_DIVISOR {
        return Vec::new();
    }

    let workers = workers.max(1) as u64;
    let span = sqrt_n - FIRST_WHEEL_DIVISOR + 1;
    let step = span.div_ceil(workers);

    (0..workers)
        .map(|i| FIRST_WHEEL_DIVISOR + i * step)
        .take_while(|&start| start <= sqrt_n)
        .map(|start| Chunk::new(start, (start + step - 1).min(sqrt_n)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_ten_thousand() {
        // n = 10000 -> sqrt 100
        let chunks = partition(100, 4);
        assert_eq!(
            chunks,
            vec![
                Chunk::new(5, 28),
                Chunk::new(29, 52),
                Chunk::new(53, 76),
                Chunk::new(77, 100),
            ]
        );
    }

    #[test]
    fn test_partition_last_chunk_shorter() {
        let chunks = partition(14, 4);
        // span 10, step 3
        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[3], Chunk::new(14, 14));
        assert_eq!(chunks.iter().map(Chunk::len).sum::<u64>(), 10);
    }

    #[test]
    fn test_partition_below_five() {
        assert!(partition(4, 4).is_empty());
        assert!(partition(0, 4).is_empty());
    }

    #[test]
    fn test_partition_range_shorter_than_workers() {
        let chunks = partition(6, 4);
        assert_eq!(chunks, vec![Chunk::new(5, 5), Chunk::new(6, 6)]);
    }

    #[test]
    fn test_partition_step_rounding_drops_empty_tail() {
        // span 9, step 3: a fourth chunk would start at 14
        assert_eq!(
            partition(13, 4),
            vec![Chunk::new(5, 7), Chunk::new(8, 10), Chunk::new(11, 13)]
        );
        // span 5, step 2
        assert_eq!(
            partition(9, 4),
            vec![Chunk::new(5, 6), Chunk::new(7, 8), Chunk::new(9, 9)]
        );
        assert!(partition(13, 4).iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_partition_zero_workers_treated_as_one() {
        assert_eq!(partition(50, 0), vec![Chunk::new(5, 50)]);
    }

    #[test]
    fn test_find_divisor() {
        let chunk = Chunk::new(5, 28);
        assert_eq!(chunk.find_divisor(7 * 13), Some(7));
        assert_eq!(chunk.find_divisor(23 * 29), Some(23));
        assert_eq!(chunk.find_divisor(29 * 31), None);
    }

    #[test]
    fn test_find_divisor_skips_non_wheel_values() {
        // 25 = 5 * 5; chunk starts at 6 so only wheel values 7, 11, ... are tried
        let chunk = Chunk::new(6, 10);
        assert_eq!(chunk.find_divisor(25), None);
        assert_eq!(chunk.find_divisor(49), Some(7));
    }
}
