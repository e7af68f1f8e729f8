//! Strategy domain: recurring-buy (DCA) strategies executed by the backend.
//!
//! The client only creates strategies and flips their lifecycle state; all
//! scheduling and execution happens server-side.

#[cfg(feature = "http")]
pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::StrategyId;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Strategy lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyStatus {
    Active,
    Paused,
    Stopped,
    Completed,
    #[default]
    #[serde(other)]
    Unknown,
}

impl StrategyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Stopped => "stopped",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for StrategyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle transitions exposed by `PUT /api/strategies/{id}/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyAction {
    Pause,
    Resume,
    Stop,
}

impl StrategyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Stop => "stop",
        }
    }
}

// ─── Strategy ────────────────────────────────────────────────────────────────

/// A DCA strategy as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub id: StrategyId,
    pub name: String,
    pub from_token: String,
    pub to_token: String,
    pub amount_per_execution: String,
    pub total_amount: String,
    pub frequency: String,
    #[serde(default)]
    pub slippage: Option<f64>,
    #[serde(default)]
    pub status: StrategyStatus,
    /// Amount spent so far, decimal string.
    #[serde(default)]
    pub executed_amount: Option<String>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::opt_timestamp::deserialize")]
    pub next_execution_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::opt_timestamp::deserialize")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::shared::serde_util::opt_timestamp::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ─── Wire types ──────────────────────────────────────────────────────────────

/// Response from `GET /api/strategies`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategiesResponse {
    #[serde(default)]
    pub strategies: Vec<Strategy>,
}

/// `GET /api/strategies/{id}` answers either `{ "strategy": {..} }` or the
/// bare strategy object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum StrategyEnvelope {
    Wrapped { strategy: Strategy },
    Bare(Strategy),
}

impl StrategyEnvelope {
    pub(crate) fn into_strategy(self) -> Strategy {
        match self {
            StrategyEnvelope::Wrapped { strategy } => strategy,
            StrategyEnvelope::Bare(strategy) => strategy,
        }
    }
}

/// Body for `POST /api/strategies/dca`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDcaStrategyRequest {
    pub name: String,
    pub from_token: String,
    pub to_token: String,
    pub amount_per_execution: String,
    pub total_amount: String,
    /// Backend schedule keyword, e.g. `"daily"`.
    pub frequency: String,
    pub slippage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDcaStrategyResponse {
    pub strategy_id: StrategyId,
}

/// Response from pause / resume / stop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyActionResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<StrategyStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRATEGY_JSON: &str = r#"{
        "id": "s1",
        "name": "Weekly ETH",
        "fromToken": "USDC",
        "toToken": "WETH",
        "amountPerExecution": "100",
        "totalAmount": "1200",
        "frequency": "weekly",
        "slippage": 1,
        "status": "paused",
        "createdAt": "2024-03-01T00:00:00Z",
        "executions": 4
    }"#;

    #[test]
    fn test_strategy_deserialize() {
        let strategy: Strategy = serde_json::from_str(STRATEGY_JSON).unwrap();
        assert_eq!(strategy.id.as_str(), "s1");
        assert_eq!(strategy.status, StrategyStatus::Paused);
        assert_eq!(strategy.slippage, Some(1.0));
        assert!(strategy.next_execution_at.is_none());
        assert_eq!(strategy.extra["executions"], 4);
    }

    #[test]
    fn test_strategy_envelope_both_shapes() {
        let bare: StrategyEnvelope = serde_json::from_str(STRATEGY_JSON).unwrap();
        let wrapped: StrategyEnvelope =
            serde_json::from_str(&format!(r#"{{"strategy": {}}}"#, STRATEGY_JSON)).unwrap();
        assert_eq!(bare.into_strategy(), wrapped.into_strategy());
    }

    #[test]
    fn test_create_request_camel_case() {
        let req = CreateDcaStrategyRequest {
            name: "DCA".to_string(),
            from_token: "USDC".to_string(),
            to_token: "WETH".to_string(),
            amount_per_execution: "50".to_string(),
            total_amount: "500".to_string(),
            frequency: "daily".to_string(),
            slippage: 0.5,
        };
        let json = serde_json::to_value(&req).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "amountPerExecution",
                "frequency",
                "fromToken",
                "name",
                "slippage",
                "toToken",
                "totalAmount"
            ]
        );
    }

    #[test]
    fn test_unknown_status() {
        let status: StrategyStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, StrategyStatus::Unknown);
        assert_eq!(StrategyAction::Resume.as_str(), "resume");
    }

    #[test]
    fn test_strategy_timestamp_variants() {
        let mut value: Value = serde_json::from_str(STRATEGY_JSON).unwrap();
        value["createdAt"] = Value::from("2024-03-01 00:00:00");
        value["nextExecutionAt"] = Value::Null;
        value["updatedAt"] = Value::from(1709251200000i64);
        let strategy: Strategy = serde_json::from_value(value).unwrap();
        assert_eq!(strategy.created_at, strategy.updated_at);
        assert!(strategy.created_at.is_some());
        assert!(strategy.next_execution_at.is_none());
    }
}
