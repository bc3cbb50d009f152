//! Parallel Dispatcher Module
//!
//! Fans one primality check out over a fixed number of chunk tasks and
//! resolves as soon as any of them finds a divisor.

use tokio::task::JoinSet;
use tracing::debug;

use crate::error::{PrimeError, Result};
use crate::prime::chunk::{partition, Chunk};
use crate::prime::oracle::{isqrt, quick_verdict, FIRST_WHEEL_DIVISOR};

/// Chunk tasks per check unless configured otherwise.
pub const DEFAULT_WORKERS: usize = 4;

// == Parallel Dispatcher ==
/// Splits trial division across concurrent blocking tasks.
#[derive(Debug, Clone, Copy)]
pub struct ParallelDispatcher {
    workers: usize,
}

impl Default for ParallelDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

impl ParallelDispatcher {
    /// Creates a dispatcher using `workers` chunk tasks (at least one).
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    // == Is Prime ==
    /// Determines the primality of `n` using one task per chunk.
    ///
    /// The first chunk to report a divisor decides the result and the
    /// remaining tasks are aborted. Completion order does not matter. A task
    /// that panics or is cancelled fails the whole check with
    /// [`PrimeError::Dispatch`].
    pub async fn is_prime(&self, n: u64) -> Result<bool> {
        if let Some(verdict) = quick_verdict(n) {
            return Ok(verdict);
        }

        let sqrt_n = isqrt(n);
        if sqrt_n < FIRST_WHEEL_DIVISOR {
            return Ok(true);
        }

        let mut tasks = JoinSet::new();
        for chunk in partition(sqrt_n, self.workers) {
            tasks.spawn_blocking(move || chunk.find_divisor(n).map(|d| (chunk, d)));
        }

        first_divisor_wins(tasks, n).await
    }
}

// == Fan-in ==
/// Awaits chunk reports in completion order.
///
/// Resolves to `false` on the first reported divisor and `true` once every
/// task reported none. Outstanding tasks are aborted as soon as the outcome
/// is known.
async fn first_divisor_wins(mut tasks: JoinSet<Option<(Chunk, u64)>>, n: u64) -> Result<bool> {
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(Some((chunk, divisor))) => {
                debug!(
                    "Divisor {} of {} found in chunk [{}, {}]",
                    divisor, n, chunk.start, chunk.end
                );
                tasks.abort_all();
                return Ok(false);
            }
            Ok(None) => {}
            Err(e) => {
                tasks.abort_all();
                return Err(PrimeError::Dispatch(e.to_string()));
            }
        }
    }

    Ok(true)
}
