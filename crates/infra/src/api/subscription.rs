//! Subscription plan endpoints

use tracing::{info, instrument};
use uplokal_domain::types::{
    BillingCycle, CancelResponse, Plan, PlanTier, SubscribeRequest, SubscribeResponse,
    UserSubscription,
};

use super::client::ApiClient;
use super::errors::ApiError;

/// `/subscription/*`
#[derive(Debug, Clone, Copy)]
pub struct SubscriptionApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SubscriptionApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    /// See [`ApiError`].
    pub async fn plans(&self) -> Result<Vec<Plan>, ApiError> {
        self.client.get("/subscription/plans", &()).await
    }

    /// Current subscription, `None` when the user has none.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn my_subscription(&self) -> Result<Option<UserSubscription>, ApiError> {
        self.client.get("/subscription/my-subscription", &()).await
    }

    /// Start a subscription. Paid tiers return a Snap token to pay with.
    ///
    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self))]
    pub async fn subscribe(
        &self,
        plan_tier: PlanTier,
        billing_cycle: BillingCycle,
    ) -> Result<SubscribeResponse, ApiError> {
        let response: SubscribeResponse = self
            .client
            .post("/subscription/subscribe", &SubscribeRequest { plan_tier, billing_cycle })
            .await?;
        info!(requires_payment = response.requires_payment, "subscription requested");
        Ok(response)
    }

    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self))]
    pub async fn cancel(&self) -> Result<CancelResponse, ApiError> {
        self.client.post_empty("/subscription/cancel").await
    }
}
