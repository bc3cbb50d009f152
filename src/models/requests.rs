//! Request DTOs for the prime check API
//!
//! Defines the query parameters accepted by the server and their validation.

use std::num::IntErrorKind;

use serde::Deserialize;

use crate::error::{PrimeError, Result};

/// Largest integer magnitude that round-trips through an IEEE 754 double.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Query string of `GET /check-prime`
///
/// # Fields
/// - `number`: Raw text of the integer to test
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckPrimeQuery {
    /// The integer to test, unparsed
    #[serde(default)]
    pub number: Option<String>,
}

/// A number that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedNumber {
    /// The signed value as received
    pub original: i64,
    /// The magnitude primality is evaluated on
    pub absolute: u64,
}

impl CheckPrimeQuery {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: Some(number.into()),
        }
    }

    /// Validates the `number` parameter against `max_value`.
    ///
    /// Checks run in order: presence, integer syntax, safe-integer magnitude,
    /// configured maximum.
    pub fn validate(&self, max_value: u64) -> Result<ValidatedNumber> {
        let raw = self.number.as_deref().ok_or(PrimeError::MissingParameter)?;
        let text = raw.trim();

        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PrimeError::NotANumber {
                received: raw.to_string(),
            });
        }

        let absolute = match digits.parse::<u64>() {
            Ok(value) if value <= MAX_SAFE_INTEGER => value,
            Ok(_) => {
                return Err(PrimeError::UnsafeMagnitude {
                    received: raw.to_string(),
                })
            }
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                return Err(PrimeError::UnsafeMagnitude {
                    received: raw.to_string(),
                })
            }
            Err(_) => {
                return Err(PrimeError::NotANumber {
                    received: raw.to_string(),
                })
            }
        };

        if absolute > max_value {
            return Err(PrimeError::TooLarge {
                received: absolute,
                max_value,
            });
        }

        // Below 2^53, so it fits an i64 either way
        let magnitude = absolute as i64;
        let original = if negative { -magnitude } else { magnitude };

        Ok(ValidatedNumber { original, absolute })
    }
}
