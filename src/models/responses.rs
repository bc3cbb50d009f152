//! Response DTOs for the prime check API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::ValidatedNumber;
use crate::prime::Verdict;

/// Response body for `GET /check-prime`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckPrimeResponse {
    /// The number as received, sign included
    pub number: i64,
    /// The magnitude that was tested
    pub absolute_value: u64,
    pub is_prime: bool,
    /// Whether the answer was already cached
    pub cached: bool,
    /// Time spent answering, in milliseconds
    pub execution_time: f64,
}

impl CheckPrimeResponse {
    pub fn new(number: ValidatedNumber, verdict: Verdict, execution_time: f64) -> Self {
        Self {
            number: number.original,
            absolute_value: number.absolute,
            is_prime: verdict.is_prime,
            cached: verdict.cached,
            execution_time,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    /// Results not stored because the cache was full
    pub rejected_inserts: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            rejected_inserts: stats.rejected_inserts,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Process id of the server
    pub pid: u32,
    pub uptime_seconds: u64,
    pub cache_size: usize,
    pub cache_capacity: usize,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(uptime_seconds: u64, cache_size: usize, cache_capacity: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            pid: std::process::id(),
            uptime_seconds,
            cache_size,
            cache_capacity,
        }
    }
}

/// Response body for unknown routes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotFoundResponse {
    pub error: String,
    /// Routes the server does answer
    pub available_endpoints: Vec<String>,
}

impl NotFoundResponse {
    pub fn new(endpoints: &[&str]) -> Self {
        Self {
            error: "Not found".to_string(),
            available_endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
        }
    }
}
