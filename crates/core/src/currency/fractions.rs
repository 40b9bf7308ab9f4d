//! Currency fraction providers and lookup.

use std::collections::HashMap;
use std::sync::Arc;

use centime_shared::config::CurrencyConfig;
use centime_shared::{CurrencyCode, CurrencyFractions};
use tracing::info;

use super::data::CLDR_TABLE;
use crate::rounding::RoundingError;

/// Source of currency fraction metadata.
///
/// Lookups are synchronous in-memory reads against immutable data.
pub trait FractionProvider: Send + Sync {
    /// Returns the fractions for `code`, or `None` if the code is unknown.
    fn fractions(&self, code: &CurrencyCode) -> Option<CurrencyFractions>;
}

impl<P: FractionProvider + ?Sized> FractionProvider for &P {
    fn fractions(&self, code: &CurrencyCode) -> Option<CurrencyFractions> {
        (**self).fractions(code)
    }
}

impl<P: FractionProvider + ?Sized> FractionProvider for Arc<P> {
    fn fractions(&self, code: &CurrencyCode) -> Option<CurrencyFractions> {
        (**self).fractions(code)
    }
}

/// The built-in CLDR fraction table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CldrFractions;

impl FractionProvider for CldrFractions {
    fn fractions(&self, code: &CurrencyCode) -> Option<CurrencyFractions> {
        CLDR_TABLE.get(code).copied()
    }
}

/// An owned fraction table: the CLDR data plus configured overrides.
#[derive(Debug, Clone)]
pub struct FractionTable {
    entries: HashMap<CurrencyCode, CurrencyFractions>,
}

impl FractionTable {
    /// Creates a table holding the built-in CLDR data.
    #[must_use]
    pub fn cldr() -> Self {
        Self {
            entries: (*CLDR_TABLE).clone(),
        }
    }

    /// Creates the CLDR table and applies configured overrides.
    ///
    /// Override keys are uppercased first; anything still not a valid code
    /// fails the whole table.
    pub fn from_config(config: &CurrencyConfig) -> Result<Self, RoundingError> {
        let mut table = Self::cldr();

        for (key, fraction_override) in &config.overrides {
            let code = CurrencyCode::parse(&key.to_ascii_uppercase())?;
            table.insert(code, fraction_override.to_fractions());
        }

        info!(
            overrides = config.overrides.len(),
            currencies = table.len(),
            "currency fraction table loaded"
        );
        Ok(table)
    }

    /// Inserts or replaces an entry, returning the previous one.
    pub fn insert(
        &mut self,
        code: CurrencyCode,
        fractions: CurrencyFractions,
    ) -> Option<CurrencyFractions> {
        self.entries.insert(code, fractions)
    }

    /// Number of known currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FractionTable {
    fn default() -> Self {
        Self::cldr()
    }
}

impl FractionProvider for FractionTable {
    fn fractions(&self, code: &CurrencyCode) -> Option<CurrencyFractions> {
        self.entries.get(code).copied()
    }
}

/// Validates `code` and looks up its fractions.
///
/// Malformed and unknown codes both yield `InvalidCurrency`. No case or
/// whitespace normalization is applied.
pub fn lookup_currency_fractions<P: FractionProvider + ?Sized>(
    provider: &P,
    code: &str,
) -> Result<CurrencyFractions, RoundingError> {
    let parsed = CurrencyCode::parse(code)?;
    provider
        .fractions(&parsed)
        .ok_or_else(|| RoundingError::InvalidCurrency(format!("unknown currency {code}")))
}
