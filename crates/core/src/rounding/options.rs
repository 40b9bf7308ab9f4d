//! Rounding options and their decoding from host-supplied JSON.

use serde_json::Value;

use super::digits::CurrencyDigits;
use super::error::RoundingError;
use super::mode::RoundingMode;

/// Options for a single rounding call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundingOptions {
    /// ISO 4217 currency code, passed to the provider as-is.
    pub currency: String,
    /// Digit-selection policy.
    pub currency_digits: CurrencyDigits,
    /// Rounding mode.
    pub rounding_mode: RoundingMode,
}

impl RoundingOptions {
    /// Options for `currency` with ISO digits and banker's rounding.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            currency_digits: CurrencyDigits::default(),
            rounding_mode: RoundingMode::default(),
        }
    }

    /// Sets the digit-selection policy.
    #[must_use]
    pub fn with_digits(mut self, currency_digits: CurrencyDigits) -> Self {
        self.currency_digits = currency_digits;
        self
    }

    /// Sets the rounding mode.
    #[must_use]
    pub fn with_mode(mut self, rounding_mode: RoundingMode) -> Self {
        self.rounding_mode = rounding_mode;
        self
    }
}

impl TryFrom<&Value> for RoundingOptions {
    type Error = RoundingError;

    /// Decodes `{"currency": "CHF", "currency_digits": "cash", "rounding_mode": "half_up"}`.
    ///
    /// `currency` is required. The other keys may be absent or `null`.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Object(map) = value else {
            return Err(RoundingError::InvalidCurrency(
                "options must be an object with a currency".to_string(),
            ));
        };

        let currency = match map.get("currency") {
            Some(Value::String(code)) => code.clone(),
            Some(other) => return Err(RoundingError::InvalidCurrency(other.to_string())),
            None => {
                return Err(RoundingError::InvalidCurrency(
                    "missing currency".to_string(),
                ));
            }
        };

        let currency_digits = match map.get("currency_digits") {
            Some(digits) => CurrencyDigits::try_from(digits)?,
            None => CurrencyDigits::default(),
        };

        let rounding_mode = match map.get("rounding_mode") {
            None | Some(Value::Null) => RoundingMode::default(),
            Some(Value::String(name)) => name.parse()?,
            Some(other) => return Err(RoundingError::InvalidRoundingMode(other.to_string())),
        };

        Ok(Self {
            currency,
            currency_digits,
            rounding_mode,
        })
    }
}
