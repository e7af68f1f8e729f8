//! High-level client: `WalletClient` with nested sub-client accessors.
//!
//! Each endpoint group has its own sub-client in `<module>/client.rs`.
//! This module keeps the builder and the accessor methods. The client is
//! constructed explicitly and borrowed by sub-clients; there is no global
//! instance.

use crate::auth::client::Auth;
use crate::config::{PortfolioConfig, SdkConfig};
use crate::domain::market::client::Markets;
use crate::domain::portfolio::client::Portfolio;
use crate::domain::strategy::client::Strategies;
use crate::domain::wallet::client::Wallet;
use crate::error::SdkError;
use crate::http::{build_client, PortfolioHttp, WalletHttp};
use crate::session::{NoSession, SessionStore};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::portfolio::client::Portfolio as PortfolioClient;
pub use crate::domain::strategy::client::Strategies as StrategiesClient;
pub use crate::domain::wallet::client::Wallet as WalletSubClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each endpoint group:
/// `client.auth()`, `client.wallet()`, etc. Cloning is cheap and clones share
/// connection pools and the session store.
#[derive(Debug, Clone)]
pub struct WalletClient {
    pub(crate) http: WalletHttp,
    pub(crate) portfolio_http: PortfolioHttp,
}

impl WalletClient {
    pub fn builder() -> WalletClientBuilder {
        WalletClientBuilder::default()
    }

    /// Build from a resolved config with no session store.
    pub fn from_config(config: SdkConfig) -> Result<Self, SdkError> {
        Self::builder().config(config).build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn wallet(&self) -> Wallet<'_> {
        Wallet { client: self }
    }

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn strategies(&self) -> Strategies<'_> {
        Strategies { client: self }
    }

    pub fn portfolio(&self) -> Portfolio<'_> {
        Portfolio { client: self }
    }

    /// Backend base URL in use.
    pub fn api_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn portfolio_config(&self) -> &PortfolioConfig {
        self.portfolio_http.config()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct WalletClientBuilder {
    config: SdkConfig,
    session: Arc<dyn SessionStore>,
    timeout: Option<Duration>,
}

impl Default for WalletClientBuilder {
    fn default() -> Self {
        Self {
            config: SdkConfig::default(),
            session: Arc::new(NoSession),
            timeout: None,
        }
    }
}

impl WalletClientBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn api_url(mut self, url: &str) -> Self {
        self.config.api_url = url.to_string();
        self
    }

    pub fn portfolio_url(mut self, url: &str) -> Self {
        self.config.portfolio.base_url = url.to_string();
        self
    }

    pub fn portfolio_api_key(mut self, key: impl Into<String>) -> Self {
        self.config.portfolio.api_key = Some(key.into());
        self
    }

    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.config.portfolio.chain_id = chain_id;
        self
    }

    pub fn seed_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.portfolio.seed_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Where the session credential is read from before each backend request.
    pub fn session_store<S: SessionStore + 'static>(mut self, store: S) -> Self {
        self.session = Arc::new(store);
        self
    }

    /// Share an existing store, e.g. one the caller also writes to after login.
    pub fn shared_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session = store;
        self
    }

    /// Request timeout. Unset by default: the transport's own behavior applies.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<WalletClient, SdkError> {
        self.config.validate()?;

        let client = build_client(self.timeout)?;
        Ok(WalletClient {
            http: WalletHttp::with_client(&self.config.api_url, client.clone(), self.session),
            portfolio_http: PortfolioHttp::with_client(self.config.portfolio, client),
        })
    }
}
