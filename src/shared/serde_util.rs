//! Custom serde helpers for upstream wire formats.

/// Deserializes an optional integer amount that may arrive as a JSON string
/// or a JSON number, keeping it as its decimal string.
///
/// The portfolio service sends decimal strings, but some proxies re-encode
/// small balances as numbers.
pub mod opt_amount_string {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => Err(serde::de::Error::custom(format!(
                "Expected amount string, got {}",
                other
            ))),
        }
    }
}

/// Backend timestamps: RFC 3339, Postgres-style `YYYY-MM-DD HH:MM:SS[.f][+offset]`
/// (no offset means UTC), or integer epoch milliseconds.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        from_value(Value::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }

    pub(crate) fn from_value(value: Value) -> Result<DateTime<Utc>, String> {
        match value {
            Value::String(s) => parse(&s).ok_or_else(|| format!("Invalid timestamp: {}", s)),
            Value::Number(n) => n
                .as_i64()
                .and_then(DateTime::from_timestamp_millis)
                .ok_or_else(|| format!("Invalid epoch millis: {}", n)),
            other => Err(format!("Expected timestamp, got {}", other)),
        }
    }

    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%#z") {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Optional variant of [`timestamp`]; `null` or a missing field is `None`.
pub mod opt_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => super::timestamp::from_value(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
