//! Currency amount rounding.
//!
//! This module implements the rounding engine:
//! - Numeric input validation (`Number`)
//! - Digit-selection policies (`CurrencyDigits`) and their resolution
//! - Rounding modes mapped onto exact decimal strategies
//! - Increment-aware rounding (e.g., CHF cash to 0.05)
//! - The `CurrencyRounder` service and JSON option decoding
//! - Error types for rounding operations

pub mod digits;
pub mod error;
pub mod mode;
pub mod number;
pub mod options;
pub mod rounder;
pub mod service;

#[cfg(test)]
mod props;

pub use digits::{CurrencyDigits, Precision};
pub use error::RoundingError;
pub use mode::RoundingMode;
pub use number::Number;
pub use options::RoundingOptions;
pub use rounder::{MAX_DIGITS, round_to_precision};
pub use service::{CurrencyRounder, round};
