//! Strategies sub-client: create, inspect and lifecycle transitions.

use crate::client::WalletClient;
use crate::domain::strategy::{
    CreateDcaStrategyRequest, CreateDcaStrategyResponse, StrategiesResponse, Strategy,
    StrategyAction, StrategyActionResponse, StrategyEnvelope,
};
use crate::error::SdkError;
use crate::shared::{path_segment, StrategyId};

pub struct Strategies<'a> {
    pub(crate) client: &'a WalletClient,
}

impl<'a> Strategies<'a> {
    pub async fn get_strategies(&self) -> Result<StrategiesResponse, SdkError> {
        let url = format!("{}/api/strategies", self.client.http.base_url());
        Ok(self.client.http.get(&url).await?)
    }

    pub async fn get_strategy(&self, strategy_id: &StrategyId) -> Result<Strategy, SdkError> {
        let url = format!(
            "{}/api/strategies/{}",
            self.client.http.base_url(),
            path_segment(strategy_id.as_str())
        );
        let envelope: StrategyEnvelope = self.client.http.get(&url).await?;
        Ok(envelope.into_strategy())
    }

    /// Create a recurring-buy strategy. One request, no client-side state.
    pub async fn create_dca_strategy(
        &self,
        request: &CreateDcaStrategyRequest,
    ) -> Result<CreateDcaStrategyResponse, SdkError> {
        let url = format!("{}/api/strategies/dca", self.client.http.base_url());
        Ok(self.client.http.post(&url, request).await?)
    }

    pub async fn pause_strategy(
        &self,
        strategy_id: &StrategyId,
    ) -> Result<StrategyActionResponse, SdkError> {
        self.apply(strategy_id, StrategyAction::Pause).await
    }

    pub async fn resume_strategy(
        &self,
        strategy_id: &StrategyId,
    ) -> Result<StrategyActionResponse, SdkError> {
        self.apply(strategy_id, StrategyAction::Resume).await
    }

    pub async fn stop_strategy(
        &self,
        strategy_id: &StrategyId,
    ) -> Result<StrategyActionResponse, SdkError> {
        self.apply(strategy_id, StrategyAction::Stop).await
    }

    /// Send a lifecycle transition. Whatever the backend answers, including an
    /// error for a repeated transition, is returned as-is.
    pub async fn apply(
        &self,
        strategy_id: &StrategyId,
        action: StrategyAction,
    ) -> Result<StrategyActionResponse, SdkError> {
        let url = format!(
            "{}/api/strategies/{}/{}",
            self.client.http.base_url(),
            path_segment(strategy_id.as_str()),
            action.as_str()
        );
        // An empty body (204) decodes as `null`.
        let resp: Option<StrategyActionResponse> = self.client.http.put(&url).await?;
        Ok(resp.unwrap_or_default())
    }
}
