//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Balance error: {0}")]
    Balance(#[from] BalanceParseError),
}

/// HTTP-layer errors.
///
/// Status codes are not interpreted: every non-2xx response surfaces as
/// [`HttpError::Status`] with the body kept verbatim.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("{method} {url} returned {status}: {body}")]
    Status {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            HttpError::Decode { .. } => None,
        }
    }
}

/// Configuration errors, raised before any request is possible.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    MissingField(&'static str),

    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("Invalid chain id: {0}")]
    InvalidChainId(String),

    #[error("Seed token set is empty")]
    EmptySeedTokens,

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// A raw portfolio balance that is not a base-10 integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid balance for token {token}: {value:?}")]
pub struct BalanceParseError {
    pub token: String,
    pub value: String,
}
