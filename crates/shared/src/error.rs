//! Shared error types.

use thiserror::Error;

/// Errors produced when parsing a [`CurrencyCode`](crate::types::CurrencyCode).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyCodeError {
    /// The code is not exactly three bytes long.
    #[error("Currency code must be exactly 3 letters: {0:?}")]
    Length(String),

    /// The code contains something other than uppercase ASCII letters.
    #[error("Currency code must be uppercase ASCII letters: {0:?}")]
    NotUppercaseAlpha(String),
}

impl CurrencyCodeError {
    /// Returns the error code for host-facing responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Length(_) => "INVALID_CURRENCY_LENGTH",
            Self::NotUppercaseAlpha(_) => "INVALID_CURRENCY_FORMAT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CurrencyCodeError::Length(String::new()).error_code(),
            "INVALID_CURRENCY_LENGTH"
        );
        assert_eq!(
            CurrencyCodeError::NotUppercaseAlpha(String::new()).error_code(),
            "INVALID_CURRENCY_FORMAT"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CurrencyCodeError::Length("US".into()).to_string(),
            "Currency code must be exactly 3 letters: \"US\""
        );
        assert_eq!(
            CurrencyCodeError::NotUppercaseAlpha("usd".into()).to_string(),
            "Currency code must be uppercase ASCII letters: \"usd\""
        );
    }
}
