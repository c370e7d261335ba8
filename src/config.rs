//! Configuration for the demo driver
//!
//! Layered, lowest priority first:
//! 1. Built-in defaults
//! 2. TOML file: explicit path, `COSTACK_CONFIG_PATH`, or `./costack.toml` if present
//! 3. `COSTACK_*` environment variables (after loading `.env`)

use crate::tasks::HoldParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const ENV_PREFIX: &str = "COSTACK";
pub const CONFIG_PATH_ENV: &str = "COSTACK_CONFIG_PATH";
const DEFAULT_FILE: &str = "costack";

/// Serializes tests that read or write process environment variables
#[cfg(test)]
static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
pub(crate) fn lock_env() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of triangle waves
    pub waves: u32,
    /// Signal level at which the triangle calls the hold
    pub size: i32,
    /// Rising edge level that aborts the graph
    pub high_limit: i32,
    pub hold_size: i32,
    pub hold_count: u32,
    pub hold_period: u32,
    /// Tick period of the paced driver, in milliseconds
    pub tick_ms: u64,
    /// Debug level of the root node
    pub debug: u8,
}

impl Default for Config {
    fn default() -> Self {
        let hold = HoldParams::default();
        Config {
            waves: 2,
            size: 5,
            high_limit: hold.high_limit,
            hold_size: hold.size,
            hold_count: hold.count,
            hold_period: hold.period,
            tick_ms: 1000,
            debug: 0,
        }
    }
}

impl Config {
    /// Load using `COSTACK_CONFIG_PATH` when set
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV).ok();
        Self::load_from(path.as_deref())
    }

    /// Load with an explicit config file; the file must exist when given
    pub fn load_from(path: Option<&str>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let file = match path {
            Some(path) => ::config::File::with_name(path).required(true),
            None => ::config::File::with_name(DEFAULT_FILE).required(false),
        };

        let settings = ::config::Config::builder()
            .add_source(::config::Config::try_from(&Config::default())?)
            .add_source(file)
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let loaded: Config = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.waves == 0 {
            return Err(ConfigError::Invalid("waves must be at least 1".into()));
        }
        if self.size <= 0 {
            return Err(ConfigError::Invalid("size must be positive".into()));
        }
        if self.hold_size <= 0 {
            return Err(ConfigError::Invalid("hold_size must be positive".into()));
        }
        if self.size.checked_add(self.hold_size).is_none() {
            return Err(ConfigError::Invalid(
                "size + hold_size must fit in a 32-bit signal".into(),
            ));
        }
        if self.hold_count == 0 || self.hold_period == 0 {
            return Err(ConfigError::Invalid(
                "hold_count and hold_period must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn hold(&self) -> HoldParams {
        HoldParams {
            size: self.hold_size,
            count: self.hold_count,
            period: self.hold_period,
            high_limit: self.high_limit,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
