//! API Handlers
//!
//! HTTP request handlers for each prime check server endpoint.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{rejection::QueryRejection, Query, RawQuery, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::cache::PrimeCache;
use crate::config::Config;
use crate::error::{PrimeError, Result};
use crate::models::{
    CheckPrimeQuery, CheckPrimeResponse, HealthResponse, NotFoundResponse, StatsResponse,
};
use crate::prime::{ParallelDispatcher, PrimeOracle};
use crate::rate_limit::{RateLimitConfig, RateLimiter};

/// Routes listed in 404 responses.
pub const AVAILABLE_ENDPOINTS: &[&str] = &[
    "GET /check-prime?number=<integer>",
    "GET /health",
    "GET /stats",
];

/// Application state shared across all handlers.
///
/// The oracle owns the shared cache; the limiter owns the per-client
/// counters. Both are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub oracle: PrimeOracle,
    pub limiter: RateLimiter,
    /// Largest absolute value accepted
    pub max_value: u64,
    pub started_at: Instant,
    /// Per-request timeout applied by the router
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState around an existing oracle and limiter.
    pub fn new(oracle: PrimeOracle, limiter: RateLimiter, max_value: u64) -> Self {
        Self {
            oracle,
            limiter,
            max_value,
            started_at: Instant::now(),
            request_timeout: Duration::from_secs(Config::default().request_timeout),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        let cache = PrimeCache::new(config.cache_capacity);
        let oracle = if config.parallel_check {
            PrimeOracle::parallel(cache, ParallelDispatcher::new(config.parallel_workers))
        } else {
            PrimeOracle::sequential(cache)
        };
        let limiter = RateLimiter::new(RateLimitConfig::new(
            config.rate_limit_max,
            Duration::from_secs(config.rate_limit_window),
        ));

        Self {
            request_timeout: Duration::from_secs(config.request_timeout),
            ..Self::new(oracle, limiter, config.max_value)
        }
    }

    /// Shared cache handle, for tasks outside the request path.
    pub fn cache(&self) -> Arc<tokio::sync::RwLock<PrimeCache>> {
        self.oracle.cache().clone()
    }
}

/// Handler for GET /check-prime
///
/// Validates the `number` query parameter and reports whether its absolute
/// value is prime. A query string that does not deserialize at all (such as
/// a repeated `number`) is reported as `NotANumber` with the raw query.
pub async fn check_prime_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
    query: std::result::Result<Query<CheckPrimeQuery>, QueryRejection>,
) -> Result<Json<CheckPrimeResponse>> {
    let started = Instant::now();

    let Query(query) = query.map_err(|rejection| {
        debug!("Rejected query string: {}", rejection.body_text());
        PrimeError::NotANumber {
            received: raw.unwrap_or_default(),
        }
    })?;

    let number = query.validate(state.max_value)?;
    let verdict = state.oracle.check(number.absolute).await?;

    let execution_time = started.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "check-prime {} -> {} (cached: {}, {:.3}ms)",
        number.original, verdict.is_prime, verdict.cached, execution_time
    );

    Ok(Json(CheckPrimeResponse::new(number, verdict, execution_time)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.oracle.cache().read().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for GET /health
///
/// Returns process status and cache size.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = state.oracle.cache().read().await;
    Json(HealthResponse::healthy(
        state.started_at.elapsed().as_secs(),
        cache.len(),
        cache.capacity(),
    ))
}

/// Fallback for unknown routes
pub async fn not_found_handler() -> (StatusCode, Json<NotFoundResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse::new(AVAILABLE_ENDPOINTS)),
    )
}
