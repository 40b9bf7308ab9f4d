//! Currency rounding service.
//!
//! Ties input validation, fraction lookup, precision resolution, and the
//! increment-aware rounder together. Every call is a pure function of its
//! arguments and the provider's immutable data.

use centime_shared::CurrencyFractions;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, trace, warn};

use super::digits::Precision;
use super::error::RoundingError;
use super::number::Number;
use super::options::RoundingOptions;
use super::rounder::round_to_precision;
use crate::currency::{CldrFractions, FractionProvider, lookup_currency_fractions};

/// Rounds amounts according to currency fraction data from `P`.
#[derive(Debug, Clone, Default)]
pub struct CurrencyRounder<P = CldrFractions> {
    provider: P,
}

impl CurrencyRounder<CldrFractions> {
    /// Creates a rounder backed by the built-in CLDR table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            provider: CldrFractions,
        }
    }
}

impl<P: FractionProvider> CurrencyRounder<P> {
    /// Creates a rounder backed by `provider`.
    pub const fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the fraction provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Rounds `value` for the currency in `options`.
    ///
    /// Checks run in a fixed order: the number first, then the currency,
    /// then the digit policy. The result has exactly the resolved number of
    /// fraction digits.
    ///
    /// # Example
    ///
    /// ```
    /// use centime_core::rounding::{CurrencyDigits, CurrencyRounder, RoundingOptions};
    /// use rust_decimal_macros::dec;
    ///
    /// let rounder = CurrencyRounder::new();
    /// let options = RoundingOptions::new("CHF").with_digits(CurrencyDigits::Cash);
    /// assert_eq!(rounder.round(dec!(123.73), &options).unwrap(), dec!(123.75));
    /// ```
    pub fn round(
        &self,
        value: impl Into<Number>,
        options: &RoundingOptions,
    ) -> Result<Decimal, RoundingError> {
        self.round_number(value.into(), options).inspect_err(|err| {
            if err.is_input_error() {
                debug!(
                    currency = %options.currency,
                    code = err.error_code(),
                    error = %err,
                    "rejected rounding input"
                );
            } else {
                warn!(
                    currency = %options.currency,
                    code = err.error_code(),
                    error = %err,
                    "rounding failed"
                );
            }
        })
    }

    fn round_number(
        &self,
        value: Number,
        options: &RoundingOptions,
    ) -> Result<Decimal, RoundingError> {
        let decimal = value.to_decimal()?;
        let precision = self.precision_for(options)?;

        let rounded = round_to_precision(decimal, precision, options.rounding_mode)?;
        trace!(%decimal, %rounded, "rounded amount");
        Ok(rounded)
    }

    /// Rounds every value in parallel. Results keep the input order.
    pub fn round_many(
        &self,
        values: &[Number],
        options: &RoundingOptions,
    ) -> Vec<Result<Decimal, RoundingError>> {
        debug!(
            count = values.len(),
            currency = %options.currency,
            "rounding batch"
        );
        values
            .par_iter()
            .map(|value| self.round(*value, options))
            .collect()
    }

    /// Resolves the `(digits, increment)` pair `options` selects.
    pub fn precision_for(&self, options: &RoundingOptions) -> Result<Precision, RoundingError> {
        let fractions = self.fractions(&options.currency)?;
        let precision = options
            .currency_digits
            .resolve(&options.currency, &fractions)?;

        debug!(
            currency = %options.currency,
            policy = %options.currency_digits,
            digits = precision.digits,
            increment = precision.increment,
            mode = %options.rounding_mode,
            "resolved currency precision"
        );
        Ok(precision)
    }

    /// Looks up the fraction data for `currency`.
    ///
    /// Built-in entries always carry cash values, copied from the standard
    /// ones where CLDR has no separate cash rule. Only a configured currency
    /// without a cash equivalent comes back with both cash fields `None`.
    pub fn fractions(&self, currency: &str) -> Result<CurrencyFractions, RoundingError> {
        lookup_currency_fractions(&self.provider, currency)
    }

    /// Rounds a JSON number using JSON options.
    ///
    /// The number is validated before the options are decoded, so a bad
    /// number is reported even when the options are also bad.
    pub fn round_json(&self, value: &Value, options: &Value) -> Result<Decimal, RoundingError> {
        let number = Number::try_from(value)?;
        number.to_decimal()?;
        let options = RoundingOptions::try_from(options)?;
        self.round(number, &options)
    }
}

/// Rounds `value` using the built-in CLDR currency table.
pub fn round(value: impl Into<Number>, options: &RoundingOptions) -> Result<Decimal, RoundingError> {
    CurrencyRounder::new().round(value, options)
}
