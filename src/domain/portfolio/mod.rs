//! Portfolio domain: on-chain token balances from the third-party portfolio
//! service, and their normalization into display-ready rows.

#[cfg(feature = "http")]
pub mod client;
pub mod normalize;

pub use normalize::parse_non_zero_balances;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::market::TokenInfo;

// ─── Raw (service) types ─────────────────────────────────────────────────────

/// Body for `POST {base}/balances/{chainId}/{walletAddress}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancesRequest {
    pub tokens: Vec<String>,
}

/// One token's balance as the portfolio service reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBalanceEntry {
    /// Integer amount in base units, as a decimal string.
    #[serde(default, deserialize_with = "crate::shared::serde_util::opt_amount_string::deserialize")]
    pub balance: Option<String>,
    #[serde(default)]
    pub decimals: Option<u32>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub usd_value: Option<f64>,
}

/// Balance response, keyed by token contract address in service order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBalancesResponse {
    #[serde(default)]
    pub balances: Option<IndexMap<String, RawBalanceEntry>>,
}

/// Token metadata catalog from `GET {base}/tokens/{chainId}`, keyed by address.
pub type TokenCatalog = IndexMap<String, TokenInfo>;

// ─── Normalized ──────────────────────────────────────────────────────────────

/// Display-ready, zero-filtered token balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBalance {
    /// Token contract address.
    pub token: String,
    pub symbol: String,
    pub name: String,
    /// Exact integer amount in base units.
    pub balance: String,
    /// `balance / 10^decimals` with exactly six fractional digits.
    pub formatted_balance: String,
    pub decimals: u32,
    pub usd_value: f64,
}
