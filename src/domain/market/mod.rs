//! Market domain: supported tokens, gas price, swap quotes.
//!
//! Read-only: nothing here changes backend state.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── TokenInfo ───────────────────────────────────────────────────────────────

/// A token the backend can trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    #[serde(default)]
    pub address: Option<String>,
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    pub decimals: u8,
    #[serde(default, rename = "logoURI")]
    pub logo_uri: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ─── QuoteQuery ──────────────────────────────────────────────────────────────

/// Query for `GET /api/market/quote`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteQuery {
    /// Source token.
    pub src: String,
    /// Destination token.
    pub dst: String,
    /// Source amount, decimal string in base units.
    pub amount: String,
    /// Percent.
    pub slippage: f64,
}

impl QuoteQuery {
    pub fn new(src: &str, dst: &str, amount: &str, slippage: f64) -> Self {
        Self {
            src: src.to_string(),
            dst: dst.to_string(),
            amount: amount.to_string(),
            slippage,
        }
    }

    /// `src=..&dst=..&amount=..&slippage=..`, each value percent-encoded.
    ///
    /// Whole-number slippage renders without a fraction (`1`, not `1.0`).
    pub fn to_query_string(&self) -> String {
        format!(
            "src={}&dst={}&amount={}&slippage={}",
            urlencoding::encode(&self.src),
            urlencoding::encode(&self.dst),
            urlencoding::encode(&self.amount),
            self.slippage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_pairs(query: &str) -> Vec<(String, String)> {
        query
            .split('&')
            .filter_map(|kv| kv.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_quote_query_contains_all_params() {
        let query = QuoteQuery::new("USDC", "WETH", "1000000", 1.0).to_query_string();
        let pairs = query_pairs(&query);
        for (key, value) in [
            ("src", "USDC"),
            ("dst", "WETH"),
            ("amount", "1000000"),
            ("slippage", "1"),
        ] {
            assert!(
                pairs.contains(&(key.to_string(), value.to_string())),
                "missing {key}={value} in {query}"
            );
        }
    }

    #[test]
    fn test_quote_query_fractional_slippage_and_encoding() {
        let query = QuoteQuery::new("0xA&B", "WETH", "5", 0.5).to_query_string();
        assert!(query.contains("src=0xA%26B"));
        assert!(query.ends_with("slippage=0.5"));
    }

    #[test]
    fn test_token_info_deserialize() {
        let json = r#"{
            "address": "0xaf88d065e77c8cC2239327C5EDb3A432268e5831",
            "symbol": "USDC",
            "name": "USD Coin",
            "decimals": 6,
            "logoURI": "https://tokens.example/usdc.png",
            "tags": ["stable"]
        }"#;
        let token: TokenInfo = serde_json::from_str(json).unwrap();
        assert_eq!(token.decimals, 6);
        assert_eq!(token.logo_uri.as_deref(), Some("https://tokens.example/usdc.png"));
        assert!(token.extra.contains_key("tags"));
    }
}
