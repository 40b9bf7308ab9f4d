//! Digit-selection policy and precision resolution.

use centime_shared::CurrencyFractions;
use serde_json::Value;

use super::error::RoundingError;

/// Which fraction digits to round a currency amount to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CurrencyDigits {
    /// The currency's standard digits and increment.
    #[default]
    Iso,
    /// The currency's cash digits and increment (e.g., CHF to 0.05).
    Cash,
    /// Exactly this many digits, with no increment.
    Fixed(u32),
}

/// A resolved rounding precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    /// Number of fraction digits in the result.
    pub digits: u32,
    /// Rounding increment in units of the last digit (0 = plain rounding).
    pub increment: u32,
}

impl Precision {
    /// Plain rounding to `digits` places.
    #[must_use]
    pub const fn plain(digits: u32) -> Self {
        Self {
            digits,
            increment: 0,
        }
    }

    /// Rounding to multiples of `increment / 10^digits`.
    #[must_use]
    pub const fn with_increment(digits: u32, increment: u32) -> Self {
        Self { digits, increment }
    }
}

impl CurrencyDigits {
    /// Resolves this policy against a currency's fraction data.
    ///
    /// | Policy     | Result                          |
    /// |------------|---------------------------------|
    /// | `Iso`      | `(digits, rounding)`            |
    /// | `Cash`     | `(cash_digits, cash_rounding)`  |
    /// | `Fixed(n)` | `(n, 0)`                        |
    ///
    /// A zero cash increment still resolves: it means plain rounding at the
    /// cash digit count. Only a currency with no cash data at all fails.
    pub fn resolve(
        self,
        currency: &str,
        fractions: &CurrencyFractions,
    ) -> Result<Precision, RoundingError> {
        match self {
            Self::Iso => Ok(Precision::with_increment(
                fractions.digits,
                fractions.rounding,
            )),
            Self::Cash => fractions
                .cash()
                .map(|(digits, increment)| Precision::with_increment(digits, increment))
                .ok_or_else(|| RoundingError::NoCashRounding(currency.to_string())),
            Self::Fixed(digits) => Ok(Precision::plain(digits)),
        }
    }
}

impl std::fmt::Display for CurrencyDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iso => f.write_str("iso"),
            Self::Cash => f.write_str("cash"),
            Self::Fixed(digits) => write!(f, "{digits}"),
        }
    }
}

impl std::str::FromStr for CurrencyDigits {
    type Err = RoundingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iso" => Ok(Self::Iso),
            "cash" => Ok(Self::Cash),
            _ => s
                .parse::<u32>()
                .map(Self::Fixed)
                .map_err(|_| RoundingError::InvalidCurrencyDigits(s.to_string())),
        }
    }
}

impl TryFrom<&Value> for CurrencyDigits {
    type Error = RoundingError;

    /// Accepts `"iso"`, `"cash"`, or a non-negative integer. `null` means `Iso`.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::Iso),
            Value::String(s) if s == "iso" => Ok(Self::Iso),
            Value::String(s) if s == "cash" => Ok(Self::Cash),
            Value::Number(n) => n
                .as_u64()
                .and_then(|digits| u32::try_from(digits).ok())
                .map(Self::Fixed)
                .ok_or_else(|| RoundingError::InvalidCurrencyDigits(n.to_string())),
            other => Err(RoundingError::InvalidCurrencyDigits(other.to_string())),
        }
    }
}
