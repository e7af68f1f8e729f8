//! SDK configuration.
//!
//! Resolution is a pure step: [`SdkConfig::from_env`] reads process environment
//! variables once and falls back to the constants in [`crate::network`]. Nothing
//! here touches the network.

use std::env;

use crate::error::ConfigError;
use crate::network::{
    DEFAULT_API_URL, DEFAULT_CHAIN_ID, DEFAULT_PORTFOLIO_URL, DEFAULT_SEED_TOKENS,
};

/// Backend base URL.
pub const ENV_API_URL: &str = "WALLET_API_URL";
/// Portfolio service base URL.
pub const ENV_PORTFOLIO_URL: &str = "PORTFOLIO_API_URL";
/// Portfolio service bearer key.
pub const ENV_PORTFOLIO_API_KEY: &str = "PORTFOLIO_API_KEY";
/// Chain identifier for portfolio queries.
pub const ENV_CHAIN_ID: &str = "PORTFOLIO_CHAIN_ID";
/// Comma-separated seed token contract addresses.
pub const ENV_SEED_TOKENS: &str = "PORTFOLIO_SEED_TOKENS";

/// Configuration for the whole SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// Backend base URL, without trailing slash.
    pub api_url: String,
    pub portfolio: PortfolioConfig,
}

/// Configuration for the third-party portfolio service.
#[derive(Clone, PartialEq, Eq)]
pub struct PortfolioConfig {
    /// Service base URL, without trailing slash.
    pub base_url: String,
    /// Static bearer key. Never the user's session token.
    pub api_key: Option<String>,
    pub chain_id: u64,
    /// Token contracts queried by `Portfolio::get_token_balances`.
    pub seed_tokens: Vec<String>,
}

impl std::fmt::Debug for PortfolioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("chain_id", &self.chain_id)
            .field("seed_tokens", &self.seed_tokens)
            .finish()
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PORTFOLIO_URL.to_string(),
            api_key: None,
            chain_id: DEFAULT_CHAIN_ID,
            seed_tokens: DEFAULT_SEED_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            portfolio: PortfolioConfig::default(),
        }
    }
}

impl SdkConfig {
    /// Resolve configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key → value source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = SdkConfig::default();

        let api_url = get(ENV_API_URL).unwrap_or(defaults.api_url);
        let base_url = get(ENV_PORTFOLIO_URL).unwrap_or(defaults.portfolio.base_url);
        let api_key = get(ENV_PORTFOLIO_API_KEY);

        let chain_id = match get(ENV_CHAIN_ID) {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidChainId(raw))?,
            None => defaults.portfolio.chain_id,
        };

        let seed_tokens = match get(ENV_SEED_TOKENS) {
            Some(raw) => parse_token_list(&raw),
            None => defaults.portfolio.seed_tokens,
        };

        let config = SdkConfig {
            api_url: normalize_url(&api_url),
            portfolio: PortfolioConfig {
                base_url: normalize_url(&base_url),
                api_key,
                chain_id,
                seed_tokens,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Check URL schemes and the seed token set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_url("api_url", &self.api_url)?;
        check_url("portfolio.base_url", &self.portfolio.base_url)?;
        if self.portfolio.seed_tokens.is_empty() {
            return Err(ConfigError::EmptySeedTokens);
        }
        Ok(())
    }
}

fn parse_token_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn check_url(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let has_scheme = value.starts_with("http://") || value.starts_with("https://");
    let has_host = value
        .split_once("://")
        .map(|(_, rest)| !rest.is_empty())
        .unwrap_or(false);
    if has_scheme && has_host {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl {
            field,
            value: value.to_string(),
        })
    }
}
