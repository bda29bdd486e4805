// file: src/config.rs
// description: application configuration management with toml and environment support
// reference: https://docs.rs/config

use crate::error::{NavigatorError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_REFRESH_MINUTES: u64 = 60;
pub const DEFAULT_TOP_K: usize = 5;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub provider: ProviderConfig,
    pub index: IndexConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub per_page: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexConfig {
    pub refresh_minutes: u64,
    pub top_k: usize,
}

impl Config {
    /// Layers, lowest precedence first: built-in defaults, the TOML file (if any),
    /// `NAVIGATOR__SECTION__KEY` variables, then `WP_BASE_URL` / `INDEX_REFRESH_MINUTES`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder()
            .set_default("provider.base_url", "")
            .and_then(|b| b.set_default("provider.timeout_secs", DEFAULT_TIMEOUT_SECS))
            .and_then(|b| b.set_default("provider.per_page", DEFAULT_PER_PAGE as u64))
            .and_then(|b| b.set_default("index.refresh_minutes", DEFAULT_REFRESH_MINUTES))
            .and_then(|b| b.set_default("index.top_k", DEFAULT_TOP_K as u64))
            .map_err(|e| NavigatorError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder
            .add_source(
                config::Environment::with_prefix("NAVIGATOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("provider.base_url", std::env::var("WP_BASE_URL").ok())
            .and_then(|b| {
                b.set_override_option(
                    "index.refresh_minutes",
                    std::env::var("INDEX_REFRESH_MINUTES").ok(),
                )
            })
            .map_err(|e| NavigatorError::Config(e.to_string()))?;

        let settings = builder
            .build()
            .map_err(|e| NavigatorError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| NavigatorError::Config(e.to_string()))?;

        config.provider.base_url = config.provider.base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Defaults for everything except the provider URL, which has none.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            provider: ProviderConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                per_page: DEFAULT_PER_PAGE,
            },
            index: IndexConfig {
                refresh_minutes: DEFAULT_REFRESH_MINUTES,
                top_k: DEFAULT_TOP_K,
            },
        }
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.index.refresh_minutes.saturating_mul(60)
    }

    pub fn validate(&self) -> Result<()> {
        if self.provider.base_url.trim().is_empty() {
            return Err(NavigatorError::Config(
                "provider.base_url is required (set WP_BASE_URL)".to_string(),
            ));
        }

        Validator::validate_url(&self.provider.base_url)
            .map_err(|e| NavigatorError::Config(e.to_string()))?;

        if self.provider.timeout_secs == 0 {
            return Err(NavigatorError::Config(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.provider.per_page == 0 {
            return Err(NavigatorError::Config(
                "per_page must be greater than 0".to_string(),
            ));
        }

        Validator::validate_top_k(self.index.top_k)
            .map_err(|e| NavigatorError::Config(e.to_string()))?;

        Ok(())
    }
}
