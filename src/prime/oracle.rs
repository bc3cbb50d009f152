//! Primality Oracle Module
//!
//! Trial division over the 6k±1 wheel, plus the cache-aware front end used
//! by the HTTP handlers.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::PrimeCache;
use crate::error::Result;
use crate::prime::ParallelDispatcher;

/// First divisor tested after the 2 and 3 shortcuts.
pub const FIRST_WHEEL_DIVISOR: u64 = 5;

// == Quick Verdict ==
/// Answers the cases that need no trial division.
///
/// Returns `None` when `n > 3` is coprime to 6.
pub fn quick_verdict(n: u64) -> Option<bool> {
    if n <= 1 {
        Some(false)
    } else if n <= 3 {
        Some(true)
    } else if n % 2 == 0 || n % 3 == 0 {
        Some(false)
    } else {
        None
    }
}

// == Integer Square Root ==
/// Exact `floor(sqrt(n))` for any `u64`.
pub fn isqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= n) {
        root += 1;
    }
    root
}

// == Is Prime ==
/// Sequential trial division testing `i` and `i + 2` for `i = 5, 11, 17, ...`
/// up to `floor(sqrt(n))`.
pub fn is_prime(n: u64) -> bool {
    if let Some(verdict) = quick_verdict(n) {
        return verdict;
    }

    let mut i = FIRST_WHEEL_DIVISOR;
    // i <= n / i is i * i <= n without overflow
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

// == Verdict ==
/// Result of a cache-aware primality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub is_prime: bool,
    /// True only when the answer was already cached before this call
    pub cached: bool,
}

// == Cached Is Prime ==
/// Consults the cache, computing and storing the answer on a miss.
pub fn is_prime_cached(cache: &mut PrimeCache, n: u64) -> Verdict {
    if let Some(is_prime) = cache.get(n) {
        return Verdict {
            is_prime,
            cached: true,
        };
    }

    let is_prime = is_prime(n);
    cache.insert(n, is_prime);
    Verdict {
        is_prime,
        cached: false,
    }
}

// == Prime Oracle ==
/// Shared front end over the cache and, optionally, the parallel dispatcher.
///
/// Cloning is cheap; all clones share one cache.
#[derive(Clone)]
pub struct PrimeOracle {
    cache: Arc<RwLock<PrimeCache>>,
    dispatcher: Option<ParallelDispatcher>,
}

impl PrimeOracle {
    /// Creates an oracle that computes misses sequentially.
    pub fn sequential(cache: PrimeCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            dispatcher: None,
        }
    }

    /// Creates an oracle that sends misses through the given dispatcher.
    pub fn parallel(cache: PrimeCache, dispatcher: ParallelDispatcher) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            dispatcher: Some(dispatcher),
        }
    }

    /// Shared handle to the underlying cache.
    pub fn cache(&self) -> &Arc<RwLock<PrimeCache>> {
        &self.cache
    }

    pub fn is_parallel(&self) -> bool {
        self.dispatcher.is_some()
    }

    // == Check ==
    /// Determines the primality of `n`.
    ///
    /// The lock is not held while the dispatcher runs, so two requests for the
    /// same uncached number may both compute it.
    pub async fn check(&self, n: u64) -> Result<Verdict> {
        let dispatcher = match &self.dispatcher {
            Some(dispatcher) => dispatcher,
            None => {
                let mut cache = self.cache.write().await;
                return Ok(is_prime_cached(&mut cache, n));
            }
        };

        if let Some(is_prime) = self.cache.write().await.get(n) {
            debug!("Cache hit for {}", n);
            return Ok(Verdict {
                is_prime,
                cached: true,
            });
        }

        let is_prime = dispatcher.is_prime(n).await?;
        self.cache.write().await.insert(n, is_prime);

        Ok(Verdict {
            is_prime,
            cached: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        let cases = [
            (0, false),
            (1, false),
            (2, true),
            (3, true),
            (4, false),
            (5, true),
            (97, true),
            (100, false),
            (7919, true),
            (7920, false),
        ];
        for (n, expected) in cases {
            assert_eq!(is_prime(n), expected, "is_prime({})", n);
        }
    }

    #[test]
    fn test_squares_of_primes() {
        // Divisor exactly at sqrt(n)
        assert!(!is_prime(25));
        assert!(!is_prime(49));
        assert!(!is_prime(121));
        assert!(!is_prime(997 * 997));
    }

    #[test]
    fn test_large_values() {
        assert!(is_prime(999_983));
        assert!(!is_prime(1_000_000));
        // Largest prime below 2^53
        assert!(is_prime(9_007_199_254_740_881));
    }

    #[test]
    fn test_quick_verdict() {
        assert_eq!(quick_verdict(0), Some(false));
        assert_eq!(quick_verdict(2), Some(true));
        assert_eq!(quick_verdict(9), Some(false));
        assert_eq!(quick_verdict(25), None);
    }

    #[test]
    fn test_isqrt() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(24), 4);
        assert_eq!(isqrt(25), 5);
        assert_eq!(isqrt(10_000), 100);
        assert_eq!(isqrt(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn test_cached_second_call_hits() {
        let mut cache = PrimeCache::new(10);

        let first = is_prime_cached(&mut cache, 7919);
        let second = is_prime_cached(&mut cache, 7919);

        assert_eq!(
            first,
            Verdict {
                is_prime: true,
                cached: false
            }
        );
        assert_eq!(
            second,
            Verdict {
                is_prime: true,
                cached: true
            }
        );
    }

    #[test]
    fn test_cached_full_cache_still_answers() {
        let mut cache = PrimeCache::new(1);
        is_prime_cached(&mut cache, 2);

        let verdict = is_prime_cached(&mut cache, 4);
        assert!(!verdict.is_prime);
        assert!(!verdict.cached);

        // Still not cached on the next call
        assert!(!is_prime_cached(&mut cache, 4).cached);
        assert!(is_prime_cached(&mut cache, 2).cached);
    }

    #[tokio::test]
    async fn test_oracle_sequential() {
        let oracle = PrimeOracle::sequential(PrimeCache::new(10));
        assert!(!oracle.is_parallel());

        let verdict = oracle.check(17).await.unwrap();
        assert!(verdict.is_prime);
        assert!(!verdict.cached);
        assert!(oracle.check(17).await.unwrap().cached);
    }

    #[tokio::test]
    async fn test_oracle_parallel() {
        let oracle = PrimeOracle::parallel(PrimeCache::new(10), ParallelDispatcher::new(4));
        assert!(oracle.is_parallel());

        let verdict = oracle.check(999_983).await.unwrap();
        assert!(verdict.is_prime);
        assert!(!verdict.cached);

        let again = oracle.check(999_983).await.unwrap();
        assert!(again.is_prime);
        assert!(again.cached);
        assert_eq!(oracle.cache().read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_oracle_clones_share_cache() {
        let oracle = PrimeOracle::sequential(PrimeCache::new(10));
        let clone = oracle.clone();

        oracle.check(97).await.unwrap();
        assert!(clone.check(97).await.unwrap().cached);
    }
}
