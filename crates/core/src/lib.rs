//! Core rounding logic for Centime.
//!
//! This crate contains pure currency rounding logic with ZERO I/O.
//! Fraction metadata is read from immutable in-memory tables and every
//! rounding call is a pure function of its arguments.
//!
//! # Modules
//!
//! - `currency` - Currency fraction metadata (built-in CLDR table, overrides)
//! - `rounding` - Input validation, precision resolution, and rounding

pub mod currency;
pub mod rounding;

pub use currency::{CldrFractions, FractionProvider, FractionTable, lookup_currency_fractions};
pub use rounding::{
    CurrencyDigits, CurrencyRounder, Number, Precision, RoundingError, RoundingMode,
    RoundingOptions, round,
};
