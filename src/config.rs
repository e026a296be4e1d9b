//! Configuration file handling for the limits CLI.
//!
//! The configuration file is stored at `$LIMITS_HOME/config.json` and holds the daily limits and
//! the exchange rates used when no command line override is given.

use crate::model::{RateError, Rates, EURO_RATE, USD_RATE};
use crate::{utils, Result};
use anyhow::{ensure, Context};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "limits";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$LIMITS_HOME` and from there it loads `$LIMITS_HOME/config.json`, falling back to
/// defaults when that file does not exist.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Creates the home directory, if needed, and writes an initial `config.json` holding the
    /// given limits and the default rates.
    ///
    /// # Errors
    /// - Returns an error if `config.json` already exists or any file operation fails.
    pub async fn create(
        dir: impl Into<PathBuf>,
        cash_limit: Decimal,
        calories_limit: Decimal,
    ) -> Result<Self> {
        let root = dir.into();
        utils::make_dir(&root)
            .await
            .context("Unable to create the limits home directory")?;

        let config_path = root.join(CONFIG_JSON);
        ensure!(
            !config_path.exists(),
            "A config file already exists at '{}'",
            config_path.display()
        );

        let config_file = ConfigFile {
            cash_limit,
            calories_limit,
            ..ConfigFile::default()
        };
        config_file.validate()?;
        config_file.save(&config_path).await?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    /// Loads `config.json` from `limits_home`. A missing file yields the default configuration, a
    /// file that exists but cannot be parsed or validated is an error.
    pub async fn load(limits_home: impl Into<PathBuf>) -> Result<Self> {
        let root = limits_home.into();
        let config_path = root.join(CONFIG_JSON);
        let config_file = if config_path.is_file() {
            ConfigFile::load(&config_path).await?
        } else {
            debug!(
                "No config file at '{}', using defaults",
                config_path.display()
            );
            ConfigFile::default()
        };
        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn cash_limit(&self) -> Decimal {
        self.config_file.cash_limit
    }

    pub fn calories_limit(&self) -> Decimal {
        self.config_file.calories_limit
    }

    /// # Errors
    /// - Returns an error if either rate is not greater than zero.
    pub fn rates(&self) -> Result<Rates> {
        Ok(self.config_file.rates()?)
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "limits",
///   "config_version": 1,
///   "cash_limit": "1000",
///   "calories_limit": "2000",
///   "usd_rate": "60",
///   "euro_rate": "70"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "limits"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Daily spending limit in local currency
    #[serde(default)]
    cash_limit: Decimal,

    /// Daily calorie limit
    #[serde(default)]
    calories_limit: Decimal,

    /// Local currency units per US dollar
    #[serde(default = "default_usd_rate")]
    usd_rate: Decimal,

    /// Local currency units per euro
    #[serde(default = "default_euro_rate")]
    euro_rate: Decimal,
}

fn default_usd_rate() -> Decimal {
    USD_RATE
}

fn default_euro_rate() -> Decimal {
    EURO_RATE
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            cash_limit: Decimal::ZERO,
            calories_limit: Decimal::ZERO,
            usd_rate: USD_RATE,
            euro_rate: EURO_RATE,
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated
    async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ConfigFile = utils::deserialize(path)
            .await
            .with_context(|| format!("Failed to load config file at {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("Unable to write config file")
    }

    fn rates(&self) -> std::result::Result<Rates, RateError> {
        Rates::new(self.usd_rate, self.euro_rate)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            self.app_name
        );
        self.rates().context("Invalid exchange rate in config file")?;
        Ok(())
    }
}
