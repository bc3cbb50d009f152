//! API Middleware
//!
//! Per-client rate limiting in front of every route.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::error::PrimeError;
use crate::rate_limit::{RateLimitDecision, RateLimiter};

/// Rejects requests from clients that exhausted their window.
///
/// Clients are keyed by peer IP from [`ConnectInfo`]. Without connect info
/// (for example when driving the router directly in tests) every request
/// shares the unspecified address.
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiter>,
    request: Request,
    next: Next,
) -> Result<Response, PrimeError> {
    let ip = client_ip(&request);

    match limiter.check(ip).await {
        RateLimitDecision::Allowed { .. } => Ok(next.run(request).await),
        RateLimitDecision::Limited { retry_after } => {
            warn!("Rate limit exceeded for {}", ip);
            Err(PrimeError::RateLimited { retry_after })
        }
    }
}

fn client_ip(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}
