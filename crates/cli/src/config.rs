//! Environment-driven configuration.

use std::path::PathBuf;

use thiserror::Error;

use stockledger_infra::store::json_file::DEFAULT_DATA_FILE;
use stockledger_inventory::DEFAULT_LOW_STOCK_THRESHOLD;

pub const DATA_FILE_ENV: &str = "STOCKLEDGER_DATA_FILE";
pub const LOG_FILE_ENV: &str = "STOCKLEDGER_LOG_FILE";
pub const LOW_THRESHOLD_ENV: &str = "STOCKLEDGER_LOW_THRESHOLD";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON snapshot location.
    pub data_file: PathBuf,
    /// Operation log file; no log file is written when unset.
    pub log_file: Option<PathBuf>,
    pub low_threshold: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_file: None,
            low_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let low_threshold = match get(LOW_THRESHOLD_ENV) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: LOW_THRESHOLD_ENV,
                    value,
                })?,
            None => defaults.low_threshold,
        };

        Ok(Self {
            data_file: get(DATA_FILE_ENV).map(PathBuf::from).unwrap_or(defaults.data_file),
            log_file: get(LOG_FILE_ENV).map(PathBuf::from),
            low_threshold,
        })
    }
}
