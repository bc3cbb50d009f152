//! Request and Response models for the prime check API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing query strings and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{CheckPrimeQuery, ValidatedNumber, MAX_SAFE_INTEGER};
pub use responses::{CheckPrimeResponse, HealthResponse, NotFoundResponse, StatsResponse};
