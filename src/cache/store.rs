//! Prime Cache Store Module
//!
//! Bounded map from integers to their primality. Fills up to capacity and
//! then stops accepting new keys; nothing is ever evicted.

use std::collections::HashMap;

use crate::cache::CacheStats;

// == Prime Cache ==
/// Bounded primality cache without eviction.
#[derive(Debug)]
pub struct PrimeCache {
    /// Number -> is prime
    entries: HashMap<u64, bool>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl PrimeCache {
    // == Constructor ==
    /// Creates a new PrimeCache holding at most `capacity` results.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Get ==
    /// Looks up a cached result, recording a hit or a miss.
    pub fn get(&mut self, n: u64) -> Option<bool> {
        match self.entries.get(&n) {
            Some(&is_prime) => {
                self.stats.record_hit();
                Some(is_prime)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Looks up a cached result without touching the statistics.
    pub fn peek(&self, n: u64) -> Option<bool> {
        self.entries.get(&n).copied()
    }

    // == Insert ==
    /// Stores a result if there is room for it.
    ///
    /// Returns `true` when the key is present afterwards. Existing keys are
    /// left untouched since their value is deterministic.
    pub fn insert(&mut self, n: u64, is_prime: bool) -> bool {
        if self.entries.contains_key(&n) {
            return true;
        }
        if self.is_full() {
            self.stats.record_rejected();
            return false;
        }
        self.entries.insert(n, is_prime);
        true
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats.set_capacity(self.capacity);
        stats
    }

    /// Returns the current number of cached results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true once no further keys will be accepted.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}
