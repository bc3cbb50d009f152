//! Rate Limiting Module
//!
//! Fixed-window request limiting per client IP address.
//!
//! Each client gets `max_requests` requests per `window`. The window opens on
//! the client's first request and the counter resets once it has elapsed.
//! Stale windows are removed by the background cleanup task.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

// == Rate Limit Config ==
/// Configuration for per-client rate limiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Requests allowed per window, 0 disables limiting
    pub max_requests: u32,
    /// Length of a window
    pub window: Duration,
}

impl RateLimitConfig {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }

    /// A configuration that admits every request.
    pub fn disabled() -> Self {
        Self::new(0, Duration::ZERO)
    }

    pub fn is_enabled(&self) -> bool {
        self.max_requests > 0
    }
}

impl Default for RateLimitConfig {
    /// 100 requests per 15 minutes.
    fn default() -> Self {
        Self::new(100, Duration::from_secs(15 * 60))
    }
}

// == Rate Limit Decision ==
/// Outcome of checking one request against the limiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    /// Request admitted
    Allowed {
        /// Requests left in the current window
        remaining: u32,
    },
    /// Request rejected
    Limited {
        /// Time until the window resets
        retry_after: Duration,
    },
}

impl RateLimitDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

/// Request count for one client in its current window.
#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

// == Rate Limiter ==
/// Per-IP fixed-window rate limiter.
///
/// Cloning is cheap and every clone shares the same counters.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: Arc<Mutex<HashMap<IpAddr, Window>>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    // == Check ==
    /// Counts a request from `ip` and decides whether to admit it.
    pub async fn check(&self, ip: IpAddr) -> RateLimitDecision {
        self.check_at(ip, Instant::now()).await
    }

    async fn check_at(&self, ip: IpAddr, now: Instant) -> RateLimitDecision {
        if !self.config.is_enabled() {
            return RateLimitDecision::Allowed {
                remaining: u32::MAX,
            };
        }

        let mut windows = self.windows.lock().await;
        let window = windows.entry(ip).or_insert(Window {
            started: now,
            count: 0,
        });

        let elapsed = now.saturating_duration_since(window.started);
        if elapsed >= self.config.window {
            window.started = now;
            window.count = 0;
        }

        if window.count >= self.config.max_requests {
            let retry_after = self
                .config
                .window
                .saturating_sub(now.saturating_duration_since(window.started));
            return RateLimitDecision::Limited { retry_after };
        }

        window.count += 1;
        RateLimitDecision::Allowed {
            remaining: self.config.max_requests - window.count,
        }
    }

    // == Prune Expired ==
    /// Drops windows that have fully elapsed.
    ///
    /// Returns the number of clients removed.
    pub async fn prune_expired(&self) -> usize {
        self.prune_expired_at(Instant::now()).await
    }

    async fn prune_expired_at(&self, now: Instant) -> usize {
        let mut windows = self.windows.lock().await;
        let before = windows.len();
        let window_len = self.config.window;
        windows.retain(|_, w| now.saturating_duration_since(w.started) < window_len);
        before - windows.len()
    }

    /// Number of clients with an open window.
    pub async fn tracked_clients(&self) -> usize {
        self.windows.lock().await.len()
    }
}
