//! Rounding error types.
//!
//! Every failure is terminal for the single call that produced it. Nothing
//! is retried and no partial result is returned.

use thiserror::Error;

/// Errors that can occur while rounding a currency amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundingError {
    /// Input is non-numeric, NaN, infinite, or not representable as a decimal.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Currency code is malformed or has no known fraction data.
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    /// Cash rounding requested for a currency without cash data.
    #[error("Currency {0} has no cash rounding data")]
    NoCashRounding(String),

    /// Digit policy is neither `iso`, `cash`, nor a non-negative integer.
    #[error("Invalid currency digits: {0}")]
    InvalidCurrencyDigits(String),

    /// Rounding mode name is not recognised.
    #[error("Invalid rounding mode: {0}")]
    InvalidRoundingMode(String),

    /// Decimal arithmetic overflowed or the result scale cannot be represented.
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),
}

impl RoundingError {
    /// Returns the error code for host-facing responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidNumber(_) => "INVALID_NUMBER",
            Self::InvalidCurrency(_) => "INVALID_CURRENCY",
            Self::NoCashRounding(_) => "NO_CASH_ROUNDING",
            Self::InvalidCurrencyDigits(_) => "INVALID_CURRENCY_DIGITS",
            Self::InvalidRoundingMode(_) => "INVALID_ROUNDING_MODE",
            Self::Arithmetic(_) => "ARITHMETIC_ERROR",
        }
    }

    /// Returns true if the caller supplied bad input, false for internal failures.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, Self::Arithmetic(_))
    }
}

impl From<centime_shared::CurrencyCodeError> for RoundingError {
    fn from(err: centime_shared::CurrencyCodeError) -> Self {
        Self::InvalidCurrency(err.to_string())
    }
}
