//! Authenticated transport: `WalletHttp`.
//!
//! Every backend request goes through [`WalletHttp::request`], which reads the
//! session credential fresh from the [`SessionStore`] and attaches it as
//! `Authorization: Wallet <token>`. Without a credential the request goes out
//! unmodified and the backend decides whether that is acceptable.

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::config::normalize_url;
use crate::error::{ConfigError, HttpError};
use crate::http::{build_client, read_json};
use crate::session::SessionStore;

/// Scheme prefix for the session credential.
pub const WALLET_AUTH_SCHEME: &str = "Wallet";

/// Low-level HTTP client for the first-party backend.
#[derive(Clone)]
pub struct WalletHttp {
    base_url: String,
    client: Client,
    session: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for WalletHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletHttp")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl WalletHttp {
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>) -> Result<Self, ConfigError> {
        Ok(Self::with_client(base_url, build_client(None)?, session))
    }

    /// Use a pre-built `reqwest::Client` (shared pools, custom timeouts).
    pub fn with_client(base_url: &str, client: Client, session: Arc<dyn SessionStore>) -> Self {
        Self {
            base_url: normalize_url(base_url),
            client,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request(Method::GET, url, None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.request(Method::POST, url, Some(body)).await
    }

    /// PUT without a request body.
    pub async fn put<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request(Method::PUT, url, None::<&()>).await
    }

    pub async fn request<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        let token = self.session.session_token().await;
        if let Some(token) = token.as_deref() {
            req = req.header(AUTHORIZATION, format!("{} {}", WALLET_AUTH_SCHEME, token));
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        tracing::debug!(
            method = %method,
            url,
            authorized = token.is_some(),
            "backend request"
        );

        let resp = req.send().await?;
        read_json(&method, url, resp).await
    }
}
