//! Wallet domain: custodial deposit address, balances, deposits, swaps, withdrawals.
//!
//! Amounts are decimal strings end to end; they are never parsed into floats.

#[cfg(feature = "http")]
pub mod client;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Deposit address / balances ──────────────────────────────────────────────

/// Response from `GET /api/wallet/deposit-address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAddressResponse {
    pub address: String,
    pub minimum_confirmations: u32,
}

/// Response from `GET /api/wallet/balances`: token → decimal-string amount,
/// in the order the backend sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletBalancesResponse {
    #[serde(default)]
    pub balances: IndexMap<String, String>,
}

// ─── Deposits ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitDepositRequest {
    pub tx_hash: String,
}

/// Deposit lifecycle as reported by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepositStatus {
    Pending,
    Confirming,
    Confirmed,
    Credited,
    Failed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl DepositStatus {
    /// Whether the backend will not change this status any more.
    pub fn is_final(&self) -> bool {
        matches!(self, DepositStatus::Credited | DepositStatus::Failed)
    }
}

/// Response from `POST /api/wallet/deposits`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositReceipt {
    #[serde(default)]
    pub deposit_id: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub status: DepositStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response from `GET /api/wallet/deposits/{txHash}/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositStatusResponse {
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub status: DepositStatus,
    #[serde(default)]
    pub confirmations: Option<u32>,
    #[serde(default)]
    pub required_confirmations: Option<u32>,
    #[serde(default)]
    pub token_address: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ─── Swap / withdraw ─────────────────────────────────────────────────────────

/// Body for `POST /api/wallet/swap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub from_token: String,
    pub to_token: String,
    pub amount: String,
    /// Percent, e.g. `1.0` for 1%.
    pub slippage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapResponse {
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub from_amount: Option<String>,
    #[serde(default)]
    pub to_amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /api/wallet/withdraw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRequest {
    pub token_address: String,
    pub amount: String,
    pub to_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawResponse {
    #[serde(default)]
    pub withdrawal_id: Option<String>,
    #[serde(default)]
    pub tx_hash: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
