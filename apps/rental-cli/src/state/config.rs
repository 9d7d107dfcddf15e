//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RENTAL_*`)
//! 2. Config file (JSON, path in `RENTAL_CONFIG`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::Path;

use rental_core::Money;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Env var holding the path of an optional JSON config file.
pub const CONFIG_PATH_VAR: &str = "RENTAL_CONFIG";

/// Application configuration.
///
/// Any subset of keys may appear in the config file; the rest keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the menu banner and the goodbye line
    pub system_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Add the sample fleet and customers at startup
    pub seed_sample_data: bool,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            system_name: "Car Rental System".to_string(),
            currency_symbol: "$".to_string(),
            seed_sample_data: true,
        }
    }
}

impl ConfigState {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `RENTAL_CONFIG`: path of a JSON config file
    /// - `RENTAL_SYSTEM_NAME`: override system name
    /// - `RENTAL_CURRENCY_SYMBOL`: override currency symbol
    /// - `RENTAL_SEED_SAMPLE_DATA`: `true` / `false`
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration with `lookup` standing in for the environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => ConfigState::default(),
        };

        if let Some(name) = lookup("RENTAL_SYSTEM_NAME") {
            config.system_name = name;
        }

        if let Some(symbol) = lookup("RENTAL_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(seed) = lookup("RENTAL_SEED_SAMPLE_DATA") {
            config.seed_sample_data = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RENTAL_SEED_SAMPLE_DATA".to_string()))?;
        }

        Ok(config)
    }

    /// Reads a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use rental_cli::state::ConfigState;
    /// use rental_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(21600)), "$216.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.cents() < 0 { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}
