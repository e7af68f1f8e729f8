//! HTTP transports.
//!
//! - [`WalletHttp`] talks to the first-party backend and attaches the session
//!   credential as `Authorization: Wallet <token>`.
//! - [`PortfolioHttp`] talks to the third-party portfolio service with a static
//!   `Authorization: Bearer <api key>`.
//!
//! Neither transport retries, caches, or interprets status codes.

pub mod client;
pub mod portfolio;

pub use client::WalletHttp;
pub use portfolio::PortfolioHttp;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{ConfigError, HttpError};

/// Build a `reqwest::Client` with JSON default headers.
///
/// `timeout` is only applied when given; otherwise reqwest's own behavior holds.
pub fn build_client(timeout: Option<Duration>) -> Result<Client, ConfigError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder().default_headers(headers);
    #[cfg(not(target_arch = "wasm32"))]
    {
        builder = builder.pool_max_idle_per_host(10);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
    }
    #[cfg(target_arch = "wasm32")]
    let _ = timeout;

    builder
        .build()
        .map_err(|e| ConfigError::Client(e.to_string()))
}

/// Turn a response into `T`, or into the matching [`HttpError`].
///
/// An empty 2xx body decodes as JSON `null`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    method: &Method,
    url: &str,
    resp: Response,
) -> Result<T, HttpError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(HttpError::Status {
            method: method.to_string(),
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    let text = if body.trim().is_empty() { "null" } else { body.as_str() };
    serde_json::from_str(text).map_err(|source| HttpError::Decode {
        url: url.to_string(),
        source,
    })
}
