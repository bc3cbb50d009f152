//! API Module
//!
//! HTTP handlers and routing for the prime check REST API.
//!
//! # Endpoints
//! - `GET /check-prime?number=<integer>` - Test an integer for primality
//! - `GET /health` - Health check endpoint
//! - `GET /stats` - Get cache statistics

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
