//! Prime Check - A small HTTP service that tests integers for primality
//!
//! Trial division over the 6k±1 wheel, optionally split across concurrent
//! chunk tasks, with a bounded result cache and per-client rate limiting.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod prime;
pub mod rate_limit;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
