//! Admin console endpoints (admin and super-admin roles)

use tracing::{info, instrument};
use uplokal_domain::constants::DEFAULT_ADMIN_LOG_LIMIT;
use uplokal_domain::types::{
    AdminLogs, AdminStats, AdminUser, AdminUserParams, HashId, LimitParam, MessageResponse,
    VerifyBusinessRequest,
};
use urlencoding::encode;

use super::client::ApiClient;
use super::errors::ApiError;

/// `/admin/*`
#[derive(Debug, Clone, Copy)]
pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    /// See [`ApiError`].
    pub async fn stats(&self) -> Result<AdminStats, ApiError> {
        self.client.get("/admin/stats", &()).await
    }

    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self))]
    pub async fn users(&self, params: &AdminUserParams) -> Result<Vec<AdminUser>, ApiError> {
        self.client.get("/admin/users", params).await
    }

    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self), fields(user = %id))]
    pub async fn deactivate_user(&self, id: &HashId) -> Result<MessageResponse, ApiError> {
        let response =
            self.client.patch_empty(&format!("/admin/users/{}/deactivate", encode(id.as_str()))).await?;
        info!("user deactivated");
        Ok(response)
    }

    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self), fields(business = %id))]
    pub async fn verify_business(&self, id: &HashId, verified: bool) -> Result<MessageResponse, ApiError> {
        self.client
            .patch(
                &format!("/admin/businesses/{}/verify", encode(id.as_str())),
                &VerifyBusinessRequest { verified },
            )
            .await
    }

    /// Super-admin only.
    ///
    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self), fields(user = %id))]
    pub async fn promote_user(&self, id: &HashId) -> Result<MessageResponse, ApiError> {
        let response =
            self.client.post_empty(&format!("/admin/users/{}/promote", encode(id.as_str()))).await?;
        info!("user promoted to admin");
        Ok(response)
    }

    /// Super-admin only. 100 entries unless `limit` is given.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn logs(&self, limit: Option<u32>) -> Result<AdminLogs, ApiError> {
        let params = LimitParam { limit: limit.unwrap_or(DEFAULT_ADMIN_LOG_LIMIT) };
        self.client.get("/admin/logs", &params).await
    }
}
