//! Wallet sub-client: custodial wallet operations.

use crate::client::WalletClient;
use crate::domain::wallet::{
    DepositAddressResponse, DepositReceipt, DepositStatusResponse, SubmitDepositRequest,
    SwapRequest, SwapResponse, WalletBalancesResponse, WithdrawRequest, WithdrawResponse,
};
use crate::error::SdkError;
use crate::shared::path_segment;

pub struct Wallet<'a> {
    pub(crate) client: &'a WalletClient,
}

impl<'a> Wallet<'a> {
    /// Custodial deposit address and how many confirmations a deposit needs.
    pub async fn get_deposit_address(&self) -> Result<DepositAddressResponse, SdkError> {
        let url = format!("{}/api/wallet/deposit-address", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn get_balances(&self) -> Result<WalletBalancesResponse, SdkError> {
        let url = format!("{}/api/wallet/balances", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    /// Register an on-chain deposit transaction with the backend.
    pub async fn submit_deposit(&self, tx_hash: &str) -> Result<DepositReceipt, SdkError> {
        let url = format!("{}/api/wallet/deposits", self.client.http.base_url());
        let body = SubmitDepositRequest {
            tx_hash: tx_hash.to_string(),
        };
        // 201/204 without a body decodes as `null`.
        let resp: Option<DepositReceipt> = self.client.http.post(&url, &body).await?;
        Ok(resp.unwrap_or_default())
    }

    pub async fn get_deposit_status(
        &self,
        tx_hash: &str,
    ) -> Result<DepositStatusResponse, SdkError> {
        let url = format!(
            "{}/api/wallet/deposits/{}/status",
            self.client.http.base_url(),
            path_segment(tx_hash)
        );
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn swap_tokens(
        &self,
        from_token: &str,
        to_token: &str,
        amount: &str,
        slippage: f64,
    ) -> Result<SwapResponse, SdkError> {
        let url = format!("{}/api/wallet/swap", self.client.http.base_url());
        let body = SwapRequest {
            from_token: from_token.to_string(),
            to_token: to_token.to_string(),
            amount: amount.to_string(),
            slippage,
        };
        let resp: Option<SwapResponse> = self.client.http.post(&url, &body).await?;
        Ok(resp.unwrap_or_default())
    }

    pub async fn withdraw_tokens(
        &self,
        token_address: &str,
        amount: &str,
        to_address: &str,
    ) -> Result<WithdrawResponse, SdkError> {
        let url = format!("{}/api/wallet/withdraw", self.client.http.base_url());
        let body = WithdrawRequest {
            token_address: token_address.to_string(),
            amount: amount.to_string(),
            to_address: to_address.to_string(),
        };
        let resp: Option<WithdrawResponse> = self.client.http.post(&url, &body).await?;
        Ok(resp.unwrap_or_default())
    }
}
