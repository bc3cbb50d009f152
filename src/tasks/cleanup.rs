//! Rate Limiter Cleanup Task
//!
//! Background task that periodically drops expired rate limit windows.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::rate_limit::RateLimiter;

/// Spawns a background task that periodically prunes expired client windows.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between runs, so the limiter does not keep one entry per client forever.
///
/// # Arguments
/// * `limiter` - Shared rate limiter handle
/// * `cleanup_interval_secs` - Interval in seconds between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let limiter = RateLimiter::new(RateLimitConfig::default());
/// let cleanup_handle = spawn_cleanup_task(limiter.clone(), 60);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(limiter: RateLimiter, cleanup_interval_secs: u64) -> JoinHandle<()> {
    // A zero interval would spin
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting rate limiter cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = limiter.prune_expired().await;

            if removed > 0 {
                info!("Rate limiter cleanup: removed {} expired clients", removed);
            } else {
                debug!("Rate limiter cleanup: no expired clients found");
            }
        }
    })
}
