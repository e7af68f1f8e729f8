//! Auth sub-client: nonce, authenticate, profile.

use crate::auth::{
    AuthResponse, AuthenticateRequest, NonceRequest, NonceResponse, ProfileResponse,
    RefreshNonceResponse,
};
use crate::client::WalletClient;
use crate::error::SdkError;

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a WalletClient,
}

impl<'a> Auth<'a> {
    /// Request a sign-in challenge for `wallet_address`.
    pub async fn get_nonce(&self, wallet_address: &str) -> Result<NonceResponse, SdkError> {
        let url = format!("{}/api/auth/nonce", self.client.http.base_url());
        let body = NonceRequest {
            wallet_address: wallet_address.to_string(),
        };
        Ok(self.client.http.post(&url, &body).await?)
    }

    /// Exchange a signed challenge for a session token.
    ///
    /// The returned token is not stored; persist it in the session store
    /// yourself if later calls should be authenticated.
    pub async fn authenticate(
        &self,
        wallet_address: &str,
        signature: &str,
        message: &str,
        timestamp: i64,
    ) -> Result<AuthResponse, SdkError> {
        let url = format!("{}/api/auth/authenticate", self.client.http.base_url());
        let body = AuthenticateRequest {
            wallet_address: wallet_address.to_string(),
            signature: signature.to_string(),
            message: message.to_string(),
            timestamp,
        };
        Ok(self.client.http.post(&url, &body).await?)
    }

    /// Profile of the user behind the current session credential.
    pub async fn get_profile(&self) -> Result<ProfileResponse, SdkError> {
        let url = format!("{}/api/auth/profile", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn refresh_nonce(
        &self,
        wallet_address: &str,
    ) -> Result<RefreshNonceResponse, SdkError> {
        let url = format!("{}/api/auth/refresh-nonce", self.client.http.base_url());
        let body = NonceRequest {
            wallet_address: wallet_address.to_string(),
        };
        Ok(self.client.http.post(&url, &body).await?)
    }
}
