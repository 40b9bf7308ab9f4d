//! Currency fraction metadata.

mod data;
pub mod fractions;

pub use fractions::{CldrFractions, FractionProvider, FractionTable, lookup_currency_fractions};
