//! Increment-aware decimal rounding.
//!
//! Plain precision rounds straight to `digits` places. With an increment
//! (CHF cash: 5 at 2 digits) the value is rounded to the nearest multiple of
//! `increment / 10^digits` instead:
//!
//! ```text
//! 123.73 / 0.05 = 2474.6  -> 2475  -> 2475 * 0.05 = 123.75
//! ```
//!
//! Either way the result carries exactly `digits` fraction digits.

use rust_decimal::Decimal;

use super::digits::Precision;
use super::error::RoundingError;
use super::mode::RoundingMode;

/// Largest scale a `Decimal` can carry.
pub const MAX_DIGITS: u32 = 28;

/// Rounds `value` to `precision` under `mode`.
///
/// The result always has scale `precision.digits`, padding with trailing
/// zeros where needed (`123` at 2 digits is `123.00`).
pub fn round_to_precision(
    value: Decimal,
    precision: Precision,
    mode: RoundingMode,
) -> Result<Decimal, RoundingError> {
    let Precision { digits, increment } = precision;

    if digits > MAX_DIGITS {
        return Err(RoundingError::Arithmetic(format!(
            "cannot represent {digits} fraction digits (max {MAX_DIGITS})"
        )));
    }

    let rounded = if increment == 0 {
        value.round_dp_with_strategy(digits, mode.strategy())
    } else {
        round_to_increment(value, digits, increment, mode)?
    };

    with_exact_scale(rounded, digits)
}

fn round_to_increment(
    value: Decimal,
    digits: u32,
    increment: u32,
    mode: RoundingMode,
) -> Result<Decimal, RoundingError> {
    let step = Decimal::try_new(i64::from(increment), digits)
        .map_err(|e| RoundingError::Arithmetic(format!("invalid increment: {e}")))?;

    let units = value.checked_div(step).ok_or_else(|| {
        RoundingError::Arithmetic(format!("{value} / {step} overflows"))
    })?;

    units
        .round_dp_with_strategy(0, mode.strategy())
        .checked_mul(step)
        .ok_or_else(|| RoundingError::Arithmetic(format!("{units} * {step} overflows")))
}

/// Pads or confirms the scale. Rounding never leaves more than `digits`
/// places, so this only ever adds trailing zeros.
fn with_exact_scale(value: Decimal, digits: u32) -> Result<Decimal, RoundingError> {
    let mut scaled = value;
    scaled.rescale(digits);

    if scaled.scale() != digits || scaled != value {
        return Err(RoundingError::Arithmetic(format!(
            "{value} cannot be represented with {digits} fraction digits"
        )));
    }

    if scaled.is_zero() {
        scaled.set_sign_positive(true);
    }

    Ok(scaled)
}
