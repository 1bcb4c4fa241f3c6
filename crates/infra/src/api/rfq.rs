//! Request-for-quotation and B2B matchmaking endpoints

use tracing::instrument;
use uplokal_domain::types::{MatchResult, RfqCreateRequest, RfqCreated, RfqList, RfqListParams, RfqSuggestions};

use super::client::ApiClient;
use super::errors::ApiError;

/// `/rfq/*`
#[derive(Debug, Clone, Copy)]
pub struct RfqApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RfqApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(&self, request: &RfqCreateRequest) -> Result<RfqCreated, ApiError> {
        self.client.post("/rfq", request).await
    }

    /// Open RFQs from every business.
    ///
    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self))]
    pub async fn list(&self, params: &RfqListParams) -> Result<RfqList, ApiError> {
        self.client.get("/rfq", params).await
    }

    /// # Errors
    /// See [`ApiError`].
    pub async fn my_rfqs(&self) -> Result<RfqList, ApiError> {
        self.client.get("/rfq/my-rfqs", &()).await
    }

    /// # Errors
    /// See [`ApiError`].
    pub async fn matches(&self) -> Result<Vec<MatchResult>, ApiError> {
        self.client.get("/rfq/matches", &()).await
    }

    /// # Errors
    /// See [`ApiError`].
    pub async fn suggestions(&self) -> Result<RfqSuggestions, ApiError> {
        self.client.get("/rfq/suggestions", &()).await
    }
}
