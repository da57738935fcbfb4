//! Conversion between JavaScript numbers and `MyThing` values.
//!
//! JS numbers are doubles, so only integers within `Number.MAX_SAFE_INTEGER`
//! round-trip exactly. Anything else is rejected instead of being truncated or
//! saturated the way a raw `i64` argument would be.

use mything::ThingError;
use napi::{Error, Result, Status};

/// `Number.MAX_SAFE_INTEGER`, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

const MAX_SAFE_INTEGER_F64: f64 = 9_007_199_254_740_991.0;

/// Converts a JS number argument to an `i64`.
///
/// # Errors
/// `InvalidArg` if `value` is NaN, infinite, fractional, or outside the safe integer range.
pub fn js_number_to_i64(value: f64, name: &str) -> Result<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(Error::new(
            Status::InvalidArg,
            format!("TypeError: '{name}' must be an integer, got {value}"),
        ));
    }
    if value.abs() > MAX_SAFE_INTEGER_F64 {
        return Err(Error::new(
            Status::InvalidArg,
            format!("RangeError: '{name}' must be a safe integer, got {value}"),
        ));
    }
    #[expect(clippy::cast_possible_truncation, reason = "integral and within the safe range")]
    let int = value as i64;
    Ok(int)
}

/// Whether `value` can be handed back to JS without losing precision.
pub fn is_safe_integer(value: i64) -> bool {
    (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value)
}

/// Converts a `ThingError` to a JS error prefixed with the error kind.
pub fn thing_err_to_js(err: &ThingError) -> Error {
    Error::from_reason(format!("{}: {err}", err.kind()))
}
