//! Balance normalization.
//!
//! Turns a [`RawBalancesResponse`] into an ordered list of
//! [`NormalizedBalance`] rows:
//!
//! 1. A missing response or missing `balances` map yields an empty list.
//! 2. Entries are visited in service order; output keeps that order.
//! 3. Only strictly positive integer balances survive. Missing, empty, zero
//!    and negative balances are skipped.
//! 4. Anything else that is not a base-10 integer (`"abc"`, `"1.5"`, `"0x10"`,
//!    values beyond 256 bits) fails the whole call with [`BalanceParseError`].
//! 5. Missing metadata defaults: 18 decimals, `"Unknown"` symbol,
//!    `"Unknown Token"` name, zero USD value.
//! 6. `decimals` falls back to 18 only when the field is absent. An explicit
//!    `decimals: 0` is a zero-decimal token and is kept as 0, not replaced.
//! 7. `decimals` comes from the service unchecked; any value, up to
//!    `u32::MAX`, formats in time and memory bounded by the amount's width.
//!
//! Pure: no I/O, input is only borrowed.

use alloy_primitives::U256;

use super::{NormalizedBalance, RawBalanceEntry, RawBalancesResponse};
use crate::error::BalanceParseError;
use crate::shared::format_units;

pub const DEFAULT_DECIMALS: u32 = 18;
pub const DISPLAY_PRECISION: usize = 6;
pub const UNKNOWN_SYMBOL: &str = "Unknown";
pub const UNKNOWN_NAME: &str = "Unknown Token";

/// Filter and scale raw portfolio balances for display.
pub fn parse_non_zero_balances(
    data: Option<&RawBalancesResponse>,
) -> Result<Vec<NormalizedBalance>, BalanceParseError> {
    let Some(balances) = data.and_then(|d| d.balances.as_ref()) else {
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(balances.len());
    for (token, entry) in balances {
        if let Some(row) = normalize_entry(token, entry)? {
            out.push(row);
        }
    }
    Ok(out)
}

fn normalize_entry(
    token: &str,
    entry: &RawBalanceEntry,
) -> Result<Option<NormalizedBalance>, BalanceParseError> {
    let Some(raw) = entry.balance.as_deref() else {
        return Ok(None);
    };
    let Some(amount) = parse_positive_amount(token, raw)? else {
        return Ok(None);
    };

    // Absent only; an explicit 0 stays 0.
    let decimals = entry.decimals.unwrap_or(DEFAULT_DECIMALS);

    Ok(Some(NormalizedBalance {
        token: token.to_string(),
        symbol: non_empty(entry.symbol.as_deref()).unwrap_or(UNKNOWN_SYMBOL).to_string(),
        name: non_empty(entry.name.as_deref()).unwrap_or(UNKNOWN_NAME).to_string(),
        balance: amount.to_string(),
        formatted_balance: format_units(&amount, decimals, DISPLAY_PRECISION),
        decimals,
        usd_value: entry.usd_value.unwrap_or(0.0),
    }))
}

/// `Ok(None)` for amounts that are not strictly positive.
fn parse_positive_amount(token: &str, raw: &str) -> Result<Option<U256>, BalanceParseError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }

    let invalid = || BalanceParseError {
        token: token.to_string(),
        value: raw.to_string(),
    };

    if let Some(magnitude) = value.strip_prefix('-') {
        return if is_digits(magnitude) {
            Ok(None)
        } else {
            Err(invalid())
        };
    }

    if !is_digits(value) {
        return Err(invalid());
    }

    let amount = U256::from_str_radix(value, 10).map_err(|_| invalid())?;
    if amount.is_zero() {
        Ok(None)
    } else {
        Ok(Some(amount))
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> RawBalancesResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_absent_input_is_empty() {
        assert!(parse_non_zero_balances(None).unwrap().is_empty());
        assert!(parse_non_zero_balances(Some(&RawBalancesResponse::default()))
            .unwrap()
            .is_empty());
        assert!(parse_non_zero_balances(Some(&response(r#"{"balances": {}}"#)))
            .unwrap()
            .is_empty());
        assert!(parse_non_zero_balances(Some(&response("{}"))).unwrap().is_empty());
    }

    #[test]
    fn test_zero_balance_excluded() {
        let data = response(r#"{"balances": {"0xAAA": {"balance": "0", "decimals": 18, "symbol": "X"}}}"#);
        assert!(parse_non_zero_balances(Some(&data)).unwrap().is_empty());
    }

    #[test]
    fn test_one_ether() {
        let data = response(
            r#"{"balances": {"0xBBB": {"balance": "1000000000000000000", "decimals": 18, "symbol": "ETH", "name": "Ether"}}}"#,
        );
        let rows = parse_non_zero_balances(Some(&data)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].token, "0xBBB");
        assert_eq!(rows[0].symbol, "ETH");
        assert_eq!(rows[0].name, "Ether");
        assert_eq!(rows[0].balance, "1000000000000000000");
        assert_eq!(rows[0].formatted_balance, "1.000000");
        assert_eq!(rows[0].usd_value, 0.0);
    }

    #[test]
    fn test_missing_metadata_defaults() {
        let data = response(r#"{"balances": {"0xCCC": {"balance": "500000"}}}"#);
        let rows = parse_non_zero_balances(Some(&data)).unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.decimals, 18);
        assert_eq!(row.symbol, "Unknown");
        assert_eq!(row.name, "Unknown Token");
        // 500000 / 10^18
        assert_eq!(row.formatted_balance, "0.000000");
        assert_eq!(row.balance, "500000");
    }

    #[test]
    fn test_order_follows_input() {
        let data = response(
            r#"{"balances": {
                "0xZZZ": {"balance": "3", "decimals": 0},
                "0xAAA": {"balance": "0"},
                "0xMMM": {"balance": "2", "decimals": 0},
                "0xBBB": {"balance": "1", "decimals": 0}
            }}"#,
        );
        let tokens: Vec<String> = parse_non_zero_balances(Some(&data))
            .unwrap()
            .into_iter()
            .map(|r| r.token)
            .collect();
        assert_eq!(tokens, vec!["0xZZZ", "0xMMM", "0xBBB"]);
    }

    #[test]
    fn test_non_numeric_balance_raises() {
        let data = response(r#"{"balances": {"0xDDD": {"balance": "abc"}}}"#);
        let err = parse_non_zero_balances(Some(&data)).unwrap_err();
        assert_eq!(err.token, "0xDDD");
        assert_eq!(err.value, "abc");

        for bad in ["1.5", "0x10", "1e18", "--1", "-"] {
            let data = RawBalancesResponse {
                balances: Some(
                    [(
                        "0xEEE".to_string(),
                        RawBalanceEntry {
                            balance: Some(bad.to_string()),
                            ..Default::default()
                        },
                    )]
                    .into_iter()
                    .collect(),
                ),
            };
            assert!(parse_non_zero_balances(Some(&data)).is_err(), "{bad} should fail");
        }
    }

    #[test]
    fn test_overflowing_balance_raises() {
        let huge = "9".repeat(90);
        let data = response(&format!(r#"{{"balances": {{"0xFFF": {{"balance": "{}"}}}}}}"#, huge));
        assert!(parse_non_zero_balances(Some(&data)).is_err());
    }

    #[test]
    fn test_skipped_non_positive_values() {
        let data = response(
            r#"{"balances": {
                "0x1": {"balance": ""},
                "0x2": {"balance": "-25"},
                "0x3": {"balance": "000"},
                "0x4": {"symbol": "NOBAL"},
                "0x5": {"balance": null}
            }}"#,
        );
        assert!(parse_non_zero_balances(Some(&data)).unwrap().is_empty());
    }

    #[test]
    fn test_explicit_zero_decimals_and_empty_metadata() {
        let data = response(
            r#"{"balances": {"0x6": {"balance": "0042", "decimals": 0, "symbol": "", "name": "", "usdValue": 12.5}}}"#,
        );
        let rows = parse_non_zero_balances(Some(&data)).unwrap();
        assert_eq!(rows[0].decimals, 0);
        assert_eq!(rows[0].balance, "42");
        assert_eq!(rows[0].formatted_balance, "42.000000");
        assert_eq!(rows[0].symbol, UNKNOWN_SYMBOL);
        assert_eq!(rows[0].name, UNKNOWN_NAME);
        assert_eq!(rows[0].usd_value, 12.5);
    }

    #[test]
    fn test_numeric_balance_accepted() {
        let data = response(r#"{"balances": {"0x7": {"balance": 2500000, "decimals": 6}}}"#);
        let rows = parse_non_zero_balances(Some(&data)).unwrap();
        assert_eq!(rows[0].formatted_balance, "2.500000");
    }

    #[test]
    fn test_input_not_mutated() {
        let data = response(r#"{"balances": {"0x8": {"balance": "10", "decimals": 1}}}"#);
        let before = data.clone();
        let _ = parse_non_zero_balances(Some(&data)).unwrap();
        assert_eq!(data, before);
    }

    #[test]
    fn test_extreme_decimals_formats_to_zero() {
        let data = response(r#"{"balances": {"0x9": {"balance": "1", "decimals": 4294967295}}}"#);
        let rows = parse_non_zero_balances(Some(&data)).unwrap();
        assert_eq!(rows[0].decimals, u32::MAX);
        assert_eq!(rows[0].balance, "1");
        assert_eq!(rows[0].formatted_balance, "0.000000");
    }
}
