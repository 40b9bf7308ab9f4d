//! Application configuration management.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::CurrencyFractions;

/// Environment variable prefix (`CENTIME__LOGGING__FILTER=...`).
const ENV_PREFIX: &str = "CENTIME";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Currency data configuration.
    #[serde(default)]
    pub currencies: CurrencyConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

fn default_filter() -> String {
    "centime=info".to_string()
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Currency data configuration.
///
/// Overrides replace built-in CLDR entries with the same code and add new
/// codes (e.g., private or test currencies). Keys are uppercased when the
/// table is built, since environment sources deliver them lowercased.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencyConfig {
    /// Fraction overrides keyed by ISO 4217 code.
    #[serde(default)]
    pub overrides: BTreeMap<String, FractionOverride>,
}

/// Fraction data for a single configured currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FractionOverride {
    /// Standard number of fraction digits.
    pub digits: u32,
    /// Standard rounding increment.
    #[serde(default)]
    pub rounding: u32,
    /// Cash fraction digits (defaults to `digits`).
    #[serde(default)]
    pub cash_digits: Option<u32>,
    /// Cash rounding increment (defaults to `rounding`).
    #[serde(default)]
    pub cash_rounding: Option<u32>,
    /// Whether the currency has a cash equivalent at all.
    #[serde(default = "default_cash")]
    pub cash: bool,
}

fn default_cash() -> bool {
    true
}

impl FractionOverride {
    /// Converts the override into fraction metadata.
    #[must_use]
    pub fn to_fractions(&self) -> CurrencyFractions {
        let standard = CurrencyFractions::new(self.digits, self.rounding);
        if !self.cash {
            return standard.without_cash();
        }
        standard.with_cash(
            self.cash_digits.unwrap_or(self.digits),
            self.cash_rounding.unwrap_or(self.rounding),
        )
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Reads `.env` if present, then `config/default`, `config/{RUN_MODE}`
    /// and `CENTIME__*` environment variables, later sources winning.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Loads configuration from an in-memory TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be parsed or deserialized.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
