//! Markets sub-client: tokens, gas price, quotes.

use crate::client::WalletClient;
use crate::domain::market::wire::{GasPriceResponse, QuoteResponse, TokensResponse};
use crate::domain::market::QuoteQuery;
use crate::error::SdkError;

/// Sub-client for market data.
pub struct Markets<'a> {
    pub(crate) client: &'a WalletClient,
}

impl<'a> Markets<'a> {
    pub async fn get_tokens(&self) -> Result<TokensResponse, SdkError> {
        let url = format!("{}/api/market/tokens", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn get_gas_price(&self) -> Result<GasPriceResponse, SdkError> {
        let url = format!("{}/api/market/gas-price", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    /// Swap quote for `amount` of `src` into `dst`.
    pub async fn get_quote(
        &self,
        src: &str,
        dst: &str,
        amount: &str,
        slippage: f64,
    ) -> Result<QuoteResponse, SdkError> {
        self.quote(&QuoteQuery::new(src, dst, amount, slippage))
            .await
    }

    pub async fn quote(&self, query: &QuoteQuery) -> Result<QuoteResponse, SdkError> {
        let url = format!(
            "{}/api/market/quote?{}",
            self.client.http.base_url(),
            query.to_query_string()
        );
        Ok(self.client.http.get(&url).await?)
    }
}
