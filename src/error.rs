//! Error types for the prime check server
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::models::MAX_SAFE_INTEGER;

// == Prime Error Enum ==
/// Unified error type for the prime check server.
#[derive(Error, Debug)]
pub enum PrimeError {
    /// The `number` query parameter was not supplied
    #[error("Missing required query parameter 'number'")]
    MissingParameter,

    /// The parameter is not an integer
    #[error("Please provide a valid integer, received '{received}'")]
    NotANumber { received: String },

    /// The magnitude exceeds the safe integer range
    #[error("Number '{received}' exceeds the safe integer range")]
    UnsafeMagnitude { received: String },

    /// The magnitude exceeds the configured maximum
    #[error("Number {received} exceeds the maximum allowed value of {max_value}")]
    TooLarge { received: u64, max_value: u64 },

    /// A parallel chunk task failed
    #[error("Parallel processing error: {0}")]
    Dispatch(String),

    /// The client exhausted its request window
    #[error("Too many requests, please try again later")]
    RateLimited { retry_after: Duration },
}

impl PrimeError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PrimeError::MissingParameter => "MissingParameter",
            PrimeError::NotANumber { .. } => "NotANumber",
            PrimeError::UnsafeMagnitude { .. } => "UnsafeMagnitude",
            PrimeError::TooLarge { .. } => "TooLarge",
            PrimeError::Dispatch(_) => "InternalDispatchFailure",
            PrimeError::RateLimited { .. } => "RateLimited",
        }
    }

    /// HTTP status the error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            PrimeError::MissingParameter
            | PrimeError::NotANumber { .. }
            | PrimeError::UnsafeMagnitude { .. }
            | PrimeError::TooLarge { .. } => StatusCode::BAD_REQUEST,
            PrimeError::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PrimeError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for PrimeError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();

        let body = match &self {
            PrimeError::MissingParameter => json!({
                "error": self.to_string(),
                "kind": kind,
            }),
            PrimeError::NotANumber { received } => json!({
                "error": "Please provide a valid integer",
                "kind": kind,
                "received": received,
            }),
            PrimeError::UnsafeMagnitude { received } => json!({
                "error": "Number exceeds the safe integer range",
                "kind": kind,
                "received": received,
                "maxSafeInteger": MAX_SAFE_INTEGER,
            }),
            PrimeError::TooLarge {
                received,
                max_value,
            } => json!({
                "error": self.to_string(),
                "kind": kind,
                "received": received,
                "maxValue": max_value,
            }),
            PrimeError::Dispatch(detail) => {
                // Detail stays in the logs
                error!("Parallel dispatch failed: {}", detail);
                json!({
                    "error": "Parallel processing error",
                    "kind": kind,
                })
            }
            PrimeError::RateLimited { retry_after } => json!({
                "error": self.to_string(),
                "kind": kind,
                "retryAfter": retry_after_secs(*retry_after),
            }),
        };

        let mut response = (status, Json(body)).into_response();
        if let PrimeError::RateLimited { retry_after } = self {
            response.headers_mut().insert(
                header::RETRY_AFTER,
                HeaderValue::from(retry_after_secs(retry_after)),
            );
        }
        response
    }
}

/// Whole seconds to wait, rounded up so clients never retry too early.
fn retry_after_secs(retry_after: Duration) -> u64 {
    let secs = retry_after.as_secs();
    if retry_after.subsec_nanos() > 0 {
        secs + 1
    } else {
        secs
    }
}

// == Result Type Alias ==
/// Convenience Result type for the prime check server.
pub type Result<T> = std::result::Result<T, PrimeError>;
