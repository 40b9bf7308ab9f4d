//! Shared types, configuration, and logging bootstrap for Centime.
//!
//! This crate provides common pieces used across all other crates:
//! - Currency codes and CLDR-shaped fraction metadata
//! - Error types for currency code parsing
//! - Configuration management
//! - Tracing subscriber initialisation

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::AppConfig;
pub use error::CurrencyCodeError;
pub use types::{CurrencyCode, CurrencyFractions};
