//! Runtime configuration, read from the environment (and `.env` when present).

use crate::cart::CurrencyLabels;
use std::env;
use std::time::Duration;
use thiserror::Error;

pub const API_BASE_URL: &str = "STOREFRONT_API_BASE_URL";
pub const DOMAIN: &str = "STOREFRONT_DOMAIN";
pub const ITEM_CURRENCY: &str = "STOREFRONT_ITEM_CURRENCY";
pub const SUMMARY_CURRENCY: &str = "STOREFRONT_SUMMARY_CURRENCY";
pub const HTTP_TIMEOUT_SECS: &str = "STOREFRONT_HTTP_TIMEOUT_SECS";
pub const SESSION_COOKIE: &str = "STOREFRONT_SESSION_COOKIE";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable '{0}'")]
    Missing(&'static str),

    #[error("Invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub api_base_url: String,
    /// Store domain used when a command does not name one.
    pub domain: Option<String>,
    pub currency: CurrencyLabels,
    pub http_timeout: Duration,
    /// Forwarded verbatim as the `Cookie` header.
    pub session_cookie: Option<String>,
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|_| None)
    }

    /// Like [`from_env`](Self::from_env), but `overrides` wins over the environment.
    pub fn from_env_with(overrides: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|name| overrides(name).or_else(|| env::var(name).ok()))?;
        tracing::info!(api_base_url = %config.api_base_url, "Configuration loaded");
        Ok(config)
    }

    /// Builds the configuration from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_base_url = get(API_BASE_URL).ok_or(ConfigError::Missing(API_BASE_URL))?;
        let http_timeout = match get(HTTP_TIMEOUT_SECS) {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    name: HTTP_TIMEOUT_SECS,
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        name: HTTP_TIMEOUT_SECS,
                        reason: "must be at least 1 second".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(10),
        };

        let defaults = CurrencyLabels::default();
        Ok(Self {
            api_base_url,
            domain: get(DOMAIN),
            currency: CurrencyLabels::new(
                get(ITEM_CURRENCY).unwrap_or(defaults.item),
                get(SUMMARY_CURRENCY).unwrap_or(defaults.summary),
            ),
            http_timeout,
            session_cookie: get(SESSION_COOKIE),
        })
    }
}
