//! Wire types for market responses.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::TokenInfo;

/// Response from `GET /api/market/tokens`, keyed by token address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokensResponse {
    #[serde(default)]
    pub tokens: IndexMap<String, TokenInfo>,
}

/// Response from `GET /api/market/gas-price`.
///
/// The price shape comes from the upstream gas oracle (a plain wei string or
/// a tiered object), so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasPriceResponse {
    pub gas_price: Value,
}

/// Response from `GET /api/market/quote`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Expected destination amount, decimal string in base units.
    #[serde(default)]
    pub dst_amount: Option<String>,
    #[serde(default)]
    pub gas: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_price_accepts_any_shape() {
        let flat: GasPriceResponse = serde_json::from_str(r#"{"gasPrice": "100000000"}"#).unwrap();
        assert_eq!(flat.gas_price, "100000000");

        let tiered: GasPriceResponse =
            serde_json::from_str(r#"{"gasPrice": {"low": {"maxFeePerGas": "1"}}}"#).unwrap();
        assert!(tiered.gas_price.get("low").is_some());
    }

    #[test]
    fn test_quote_response_deserialize() {
        let resp: QuoteResponse =
            serde_json::from_str(r#"{"dstAmount": "420000000000000", "gas": 180000, "protocols": []}"#)
                .unwrap();
        assert_eq!(resp.dst_amount.as_deref(), Some("420000000000000"));
        assert_eq!(resp.gas, Some(180000));
        assert!(resp.extra.contains_key("protocols"));
    }
}
