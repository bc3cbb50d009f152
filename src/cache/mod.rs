//! Cache Module
//!
//! Provides the bounded in-memory cache of primality results.

mod stats;
mod store;

// Re-export public types
pub use stats::CacheStats;
pub use store::PrimeCache;
