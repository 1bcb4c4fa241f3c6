//! Business profile endpoints

use tracing::instrument;
use uplokal_domain::types::{
    Business, BusinessCreateRequest, BusinessList, BusinessUpdateRequest, DirectoryFilters, HashId,
};
use urlencoding::encode;

use super::client::ApiClient;
use super::errors::ApiError;

/// `/business/*`
#[derive(Debug, Clone, Copy)]
pub struct BusinessApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BusinessApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: &BusinessCreateRequest) -> Result<Business, ApiError> {
        self.client.post("/business", request).await
    }

    /// Business owned by the logged-in user.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn get_my(&self) -> Result<Business, ApiError> {
        self.client.get("/business/me", &()).await
    }

    /// Partial update; only `Some` fields are sent.
    ///
    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self, request))]
    pub async fn update(&self, request: &BusinessUpdateRequest) -> Result<Business, ApiError> {
        self.client.put("/business/me", request).await
    }

    /// Public directory.
    ///
    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self))]
    pub async fn directory(&self, filters: &DirectoryFilters) -> Result<BusinessList, ApiError> {
        self.client.get("/business/directory", filters).await
    }

    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self), fields(business = %id))]
    pub async fn get_by_id(&self, id: &HashId) -> Result<Business, ApiError> {
        self.client.get(&format!("/business/{}", encode(id.as_str())), &()).await
    }
}
