//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use tracing::warn;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Largest absolute value accepted by `/check-prime`
    pub max_value: u64,
    /// Maximum number of results the prime cache keeps
    pub cache_capacity: usize,
    /// Route cache misses through the parallel dispatcher
    pub parallel_check: bool,
    /// Number of chunk tasks per parallel check
    pub parallel_workers: usize,
    /// Requests allowed per client per window (0 disables rate limiting)
    pub rate_limit_max: u32,
    /// Rate limit window length in seconds
    pub rate_limit_window: u64,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
    /// Interval in seconds between rate limiter cleanups
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MAX_VALUE` - Largest accepted absolute value (default: 1000000)
    /// - `CACHE_CAPACITY` - Maximum cached results (default: 10000)
    /// - `PARALLEL_CHECK` - Use the parallel dispatcher, accepts true/false,
    ///   1/0, yes/no or on/off (default: true)
    /// - `PARALLEL_WORKERS` - Chunk tasks per check (default: 4)
    /// - `RATE_LIMIT_MAX` - Requests per window per client (default: 100)
    /// - `RATE_LIMIT_WINDOW` - Window length in seconds (default: 900)
    /// - `REQUEST_TIMEOUT` - Request timeout in seconds (default: 10)
    /// - `CLEANUP_INTERVAL` - Rate limiter cleanup frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            max_value: env_or("MAX_VALUE", defaults.max_value),
            cache_capacity: env_or("CACHE_CAPACITY", defaults.cache_capacity),
            parallel_check: env_flag("PARALLEL_CHECK", defaults.parallel_check),
            parallel_workers: env_or("PARALLEL_WORKERS", defaults.parallel_workers),
            rate_limit_max: env_or("RATE_LIMIT_MAX", defaults.rate_limit_max),
            rate_limit_window: env_or("RATE_LIMIT_WINDOW", defaults.rate_limit_window),
            request_timeout: env_or("REQUEST_TIMEOUT", defaults.request_timeout),
            cleanup_interval: env_or("CLEANUP_INTERVAL", defaults.cleanup_interval),
        }
    }
}

/// Reads `name` from the environment, keeping `default` when it is unset.
/// A value that is set but does not parse is logged and ignored.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env_with(name, default, |v| v.parse().ok())
}

fn env_flag(name: &str, default: bool) -> bool {
    env_with(name, default, parse_flag)
}

fn env_with<T>(name: &str, default: T, parse: impl FnOnce(&str) -> Option<T>) -> T {
    let Ok(raw) = env::var(name) else {
        return default;
    };
    match parse(raw.trim()) {
        Some(value) => value,
        None => {
            warn!("Ignoring invalid value {:?} for {}, using default", raw, name);
            default
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            max_value: 1_000_000,
            cache_capacity: 10_000,
            parallel_check: true,
            parallel_workers: 4,
            rate_limit_max: 100,
            rate_limit_window: 15 * 60,
            request_timeout: 10,
            cleanup_interval: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.max_value, 1_000_000);
        assert_eq!(config.cache_capacity, 10_000);
        assert!(config.parallel_check);
        assert_eq!(config.parallel_workers, 4);
        assert_eq!(config.rate_limit_max, 100);
        assert_eq!(config.rate_limit_window, 900);
        assert_eq!(config.request_timeout, 10);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("MAX_VALUE");
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("PARALLEL_WORKERS");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.max_value, 1_000_000);
        assert_eq!(config.cache_capacity, 10_000);
        assert_eq!(config.parallel_workers, 4);
    }

    #[test]
    fn test_env_or_ignores_garbage() {
        env::set_var("PRIME_CHECK_TEST_GARBAGE", "not-a-number");
        assert_eq!(env_or("PRIME_CHECK_TEST_GARBAGE", 7u64), 7);
        env::set_var("PRIME_CHECK_TEST_GARBAGE", " 42 ");
        assert_eq!(env_or("PRIME_CHECK_TEST_GARBAGE", 7u64), 42);
        env::remove_var("PRIME_CHECK_TEST_GARBAGE");
    }

    #[test]
    fn test_parse_flag() {
        for v in ["true", "TRUE", "1", "yes", "On"] {
            assert_eq!(parse_flag(v), Some(true), "{}", v);
        }
        for v in ["false", "False", "0", "no", "OFF"] {
            assert_eq!(parse_flag(v), Some(false), "{}", v);
        }
        assert_eq!(parse_flag("2"), None);
        assert_eq!(parse_flag(""), None);
    }

    #[test]
    fn test_env_flag_accepts_numeric() {
        env::set_var("PRIME_CHECK_TEST_FLAG", "0");
        assert!(!env_flag("PRIME_CHECK_TEST_FLAG", true));
        env::set_var("PRIME_CHECK_TEST_FLAG", " 1 ");
        assert!(env_flag("PRIME_CHECK_TEST_FLAG", false));
        env::set_var("PRIME_CHECK_TEST_FLAG", "maybe");
        assert!(env_flag("PRIME_CHECK_TEST_FLAG", true));
        env::remove_var("PRIME_CHECK_TEST_FLAG");
        assert!(!env_flag("PRIME_CHECK_TEST_FLAG", false));
    }
}
