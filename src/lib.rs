//! # Wallet DCA SDK
//!
//! Typed client for a wallet application's backend and its third-party
//! portfolio service.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: request/response types, the balance normalizer, config (always available)
//! 2. **Auth**: wallet-signature login types and the session credential source
//! 3. **HTTP API**: `WalletHttp` (session credential) and `PortfolioHttp` (service key)
//! 4. **High-Level Client**: `WalletClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wallet_dca_sdk::prelude::*;
//!
//! let session = MemorySessionStore::new();
//! let client = WalletClient::builder()
//!     .api_url("http://localhost:3001")
//!     .portfolio_api_key("...")
//!     .shared_session_store(Arc::new(session.clone()))
//!     .build()?;
//!
//! let nonce = client.auth().get_nonce("0xabc").await?;
//! let login = client.auth().authenticate("0xabc", &sig, &nonce.message, nonce.timestamp).await?;
//! session.set(login.auth_token.clone()).await;
//!
//! let strategies = client.strategies().get_strategies().await?;
//! let balances = client.portfolio().get_non_zero_balances("0xabc", None).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Default URLs, chain and seed tokens.
pub mod network;

/// Environment and builder configuration.
pub mod config;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: nonce/signature login types.
pub mod auth;

/// Session credential source read before every backend request.
pub mod session;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP transports for the backend and the portfolio service.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `WalletClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{format_units, StrategyId};

    // Auth
    pub use crate::auth::{
        AuthResponse, AuthenticateRequest, NonceRequest, NonceResponse, ProfileResponse,
        RefreshNonceResponse, UserProfile,
    };

    // Domain types
    pub use crate::domain::market::{QuoteQuery, TokenInfo};
    pub use crate::domain::market::wire::{GasPriceResponse, QuoteResponse, TokensResponse};
    pub use crate::domain::portfolio::{
        parse_non_zero_balances, NormalizedBalance, RawBalanceEntry, RawBalancesResponse,
        TokenCatalog,
    };
    pub use crate::domain::strategy::{
        CreateDcaStrategyRequest, CreateDcaStrategyResponse, StrategiesResponse, Strategy,
        StrategyAction, StrategyActionResponse, StrategyStatus,
    };
    pub use crate::domain::wallet::{
        DepositAddressResponse, DepositStatus, DepositStatusResponse, SwapResponse,
        WalletBalancesResponse, WithdrawResponse,
    };

    // Config, session, errors
    pub use crate::config::{PortfolioConfig, SdkConfig};
    pub use crate::error::{BalanceParseError, ConfigError, HttpError, SdkError};
    pub use crate::session::{MemorySessionStore, NoSession, SessionStore};

    // Client
    #[cfg(feature = "http")]
    pub use crate::client::{WalletClient, WalletClientBuilder};

    pub use std::sync::Arc;
}
