//! Clamping and parsing of raw user input.
//!
//! The calculator trusts its inputs, so callers run raw values through these
//! helpers first. Clamping is idempotent and leaves in-range values untouched.

use crate::constants::MAX_RATE;
use crate::error::InputError;

/// Clamp a rate into `[0, MAX_RATE]`. NaN becomes 0.
///
/// # Examples
///
/// ```
/// use levy_core::input::clamp_rate;
/// assert_eq!(clamp_rate(85.0), 85.0);
/// assert_eq!(clamp_rate(120.0), 100.0);
/// assert_eq!(clamp_rate(-3.0), 0.0);
/// ```
pub fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() {
        return 0.0;
    }
    rate.clamp(0.0, MAX_RATE)
}

/// Clamp a headcount to be non-negative. Non-finite values become 0.
pub fn clamp_people(people: f64) -> f64 {
    if !people.is_finite() {
        return 0.0;
    }
    people.max(0.0)
}

/// Parse and clamp a rate typed by a user. An empty field reads as 0.
pub fn parse_rate(raw: &str) -> Result<f64, InputError> {
    parse_field("rate", raw).map(clamp_rate)
}

/// Parse and clamp a headcount typed by a user. An empty field reads as 0.
pub fn parse_people(raw: &str) -> Result<f64, InputError> {
    parse_field("people", raw).map(clamp_people)
}

fn parse_field(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        value: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NotFinite {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}
