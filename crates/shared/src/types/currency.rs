//! Currency code and fraction metadata types.
//!
//! Fraction metadata follows the CLDR `currencyData/fractions` shape:
//! standard digits and rounding increment, plus optional cash overrides.

use serde::{Deserialize, Serialize};

use crate::error::CurrencyCodeError;

/// An ISO 4217 alphabetic currency code (e.g., "USD", "CHF").
///
/// Always exactly three ASCII uppercase letters. Parsing performs no
/// normalization: "usd" and " USD" are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Parses a currency code, rejecting anything that is not three uppercase ASCII letters.
    pub fn parse(code: &str) -> Result<Self, CurrencyCodeError> {
        let bytes: [u8; 3] = code
            .as_bytes()
            .try_into()
            .map_err(|_| CurrencyCodeError::Length(code.to_string()))?;

        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(CurrencyCodeError::NotUppercaseAlpha(code.to_string()));
        }

        Ok(Self(bytes))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ASCII letters get past `parse`.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Fraction metadata for one currency.
///
/// `rounding == 0` means plain decimal rounding at `digits` places; a non-zero
/// value is an increment in units of the last digit (CHF cash: digits 2,
/// rounding 5 means steps of 0.05).
///
/// Cash data is present when either cash field is set. A missing half falls
/// back to the standard value. Both `None` means the currency has no cash
/// equivalent at all, which is not the same as a zero cash increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFractions {
    /// Standard number of fraction digits.
    pub digits: u32,
    /// Standard rounding increment (0 = none).
    pub rounding: u32,
    /// Cash fraction digits, if the currency has cash data.
    pub cash_digits: Option<u32>,
    /// Cash rounding increment, if the currency has cash data.
    pub cash_rounding: Option<u32>,
}

impl CurrencyFractions {
    /// Standard fractions whose cash values equal the standard ones.
    #[must_use]
    pub const fn new(digits: u32, rounding: u32) -> Self {
        Self {
            digits,
            rounding,
            cash_digits: Some(digits),
            cash_rounding: Some(rounding),
        }
    }

    /// Replaces the cash values.
    #[must_use]
    pub const fn with_cash(mut self, cash_digits: u32, cash_rounding: u32) -> Self {
        self.cash_digits = Some(cash_digits);
        self.cash_rounding = Some(cash_rounding);
        self
    }

    /// Marks the currency as having no cash equivalent.
    #[must_use]
    pub const fn without_cash(mut self) -> Self {
        self.cash_digits = None;
        self.cash_rounding = None;
        self
    }

    /// Returns true if any cash data is present.
    #[must_use]
    pub const fn has_cash_data(&self) -> bool {
        self.cash_digits.is_some() || self.cash_rounding.is_some()
    }

    /// Returns the effective `(cash_digits, cash_rounding)` pair, or `None`
    /// when the currency has no cash data.
    #[must_use]
    pub fn cash(&self) -> Option<(u32, u32)> {
        if !self.has_cash_data() {
            return None;
        }
        Some((
            self.cash_digits.unwrap_or(self.digits),
            self.cash_rounding.unwrap_or(self.rounding),
        ))
    }
}
