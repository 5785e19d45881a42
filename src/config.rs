//! Runtime configuration: where the record store lives and how long to wait for it.
//!
//! Values come from CLI flags, then the environment, then the defaults below.

use std::time::Duration;

use crate::listing::{DEFAULT_PAGE_SIZE, PAGE_SIZES};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_API_URL: &str = "INVENTORY_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "INVENTORY_TIMEOUT_SECS";
pub const ENV_PAGE_SIZE: &str = "INVENTORY_PAGE_SIZE";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a whole number, got {value:?}")]
    InvalidValue { name: &'static str, value: String },
    #[error("API URL must start with http:// or https://, got {0:?}")]
    InvalidUrl(String),
    #[error("Page size must be one of 5, 10, 25, 50 or 100, got {0}")]
    PageSize(usize),
    #[error("Request timeout must be at least one second")]
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// Reads `INVENTORY_*` variables over the defaults.
    ///
    /// Values are parsed but not validated; callers apply their own overrides
    /// and then call [`Config::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`Config::from_env`], with variables supplied by `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_API_URL) {
            config.api_base_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout = Duration::from_secs(parse_number(ENV_TIMEOUT_SECS, &secs)?);
        }
        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            config.page_size = parse_number(ENV_PAGE_SIZE, &size)?;
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.api_base_url.clone()));
        }
        self.validate_local()
    }

    /// Checks everything except the API URL, for runs that never contact the service.
    pub fn validate_local(&self) -> Result<(), ConfigError> {
        if self.request_timeout < Duration::from_secs(1) {
            return Err(ConfigError::Timeout);
        }
        if !PAGE_SIZES.contains(&self.page_size) {
            return Err(ConfigError::PageSize(self.page_size));
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
