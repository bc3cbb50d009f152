//! Prime Module
//!
//! Trial-division primality testing, sequential and chunked across tasks.

mod chunk;
mod dispatcher;
mod oracle;


pub use chunk::{partition, Chunk};
pub use dispatcher::{ParallelDispatcher, DEFAULT_WORKERS};
pub use oracle::{
    is_prime, is_prime_cached, isqrt, quick_verdict, PrimeOracle, Verdict, FIRST_WHEEL_DIVISOR,
};
