//! Portfolio transport: `PortfolioHttp`.
//!
//! Authenticates with the static service key from [`PortfolioConfig`], never
//! with the user's session credential. Failures are logged here and returned
//! unchanged.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{normalize_url, PortfolioConfig};
use crate::error::{ConfigError, SdkError};
use crate::http::{build_client, read_json};

/// Low-level HTTP client for the third-party portfolio service.
#[derive(Debug, Clone)]
pub struct PortfolioHttp {
    config: PortfolioConfig,
    client: Client,
}

impl PortfolioHttp {
    pub fn new(config: PortfolioConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_client(config, build_client(None)?))
    }

    pub fn with_client(mut config: PortfolioConfig, client: Client) -> Self {
        config.base_url = normalize_url(&config.base_url);
        Self { config, client }
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, SdkError> {
        self.request(Method::GET, url, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        self.request(Method::POST, url, Some(body)).await
    }

    async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, SdkError> {
        self.send(&method, url, body).await.inspect_err(|e| {
            tracing::error!(method = %method, url, error = %e, "portfolio request failed");
        })
    }

    async fn send<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, SdkError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ConfigError::MissingField("portfolio.api_key"))?;

        let mut req = self
            .client
            .request(method.clone(), url)
            .header(AUTHORIZATION, format!("Bearer {}", api_key));

        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(method = %method, url, "portfolio request");

        let resp = req.send().await.map_err(crate::error::HttpError::from)?;
        Ok(read_json(method, url, resp).await?)
    }
}
