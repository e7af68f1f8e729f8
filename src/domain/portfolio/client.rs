//! Portfolio sub-client: third-party balance and token catalog queries.

use crate::client::WalletClient;
use crate::domain::portfolio::{
    parse_non_zero_balances, BalancesRequest, NormalizedBalance, RawBalancesResponse,
    TokenCatalog,
};
use crate::error::SdkError;
use crate::shared::path_segment;

/// Sub-client for the portfolio service.
///
/// Requests carry the configured service key, never the session credential.
/// `chain_id: None` means the configured chain.
pub struct Portfolio<'a> {
    pub(crate) client: &'a WalletClient,
}

impl<'a> Portfolio<'a> {
    /// Raw balances of the seed token set for `wallet_address`.
    pub async fn get_token_balances(
        &self,
        wallet_address: &str,
        chain_id: Option<u64>,
    ) -> Result<RawBalancesResponse, SdkError> {
        let http = &self.client.portfolio_http;
        let chain_id = chain_id.unwrap_or(http.config().chain_id);
        let url = format!(
            "{}/balances/{}/{}",
            http.base_url(),
            chain_id,
            path_segment(wallet_address)
        );
        let body = BalancesRequest {
            tokens: http.config().seed_tokens.clone(),
        };
        http.post(&url, &body).await
    }

    /// Token metadata catalog for a chain.
    pub async fn get_token_info(&self, chain_id: Option<u64>) -> Result<TokenCatalog, SdkError> {
        let http = &self.client.portfolio_http;
        let chain_id = chain_id.unwrap_or(http.config().chain_id);
        let url = format!("{}/tokens/{}", http.base_url(), chain_id);
        http.get(&url).await
    }

    /// Fetch balances and normalize them into display rows.
    pub async fn get_non_zero_balances(
        &self,
        wallet_address: &str,
        chain_id: Option<u64>,
    ) -> Result<Vec<NormalizedBalance>, SdkError> {
        let raw = self.get_token_balances(wallet_address, chain_id).await?;
        Ok(parse_non_zero_balances(Some(&raw))?)
    }
}
