//! Authentication endpoints
//!
//! Login responses set the HttpOnly session cookie, which the client's
//! cookie jar then replays on every call. Nothing here ever handles the
//! token itself.

use tracing::{debug, info, instrument};
use uplokal_domain::types::{Credentials, CurrentUser, LoginResponse, MessageResponse, RegisterRequest};

use super::client::ApiClient;
use super::errors::{ApiError, ApiErrorCategory};

/// Result of asking the backend who the current session belongs to.
#[derive(Debug)]
pub enum SessionProbe {
    Authenticated(CurrentUser),
    /// The backend answered, but not with a user (401, 403, 500, ...).
    Unauthenticated(ApiError),
    /// The backend could not be reached.
    Unreachable(ApiError),
}

impl SessionProbe {
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// `/auth/*`
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.client.post("/auth/register", request).await
    }

    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse =
            self.client.post("/auth/login", &credentials(email, password)).await?;
        info!("logged in");
        Ok(response)
    }

    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self, password))]
    pub async fn admin_login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse =
            self.client.post("/auth/admin-login", &credentials(email, password)).await?;
        info!("admin logged in");
        Ok(response)
    }

    /// Clears the session cookie server-side.
    ///
    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.client.post_empty("/auth/logout").await
    }

    /// # Errors
    /// See [`ApiError`].
    pub async fn me(&self) -> Result<CurrentUser, ApiError> {
        self.client.get("/auth/me", &()).await
    }

    /// Call `me` and classify the outcome.
    ///
    /// Goes through the caller's client, so an expired session still
    /// triggers its session policy. Use
    /// [`ApiClient::without_session_redirect`] for a silent check.
    #[instrument(skip(self))]
    pub async fn probe(&self) -> SessionProbe {
        match self.me().await {
            Ok(user) => SessionProbe::Authenticated(user),
            Err(err) if err.category() == ApiErrorCategory::Network => {
                debug!(error = %err, "backend unreachable during session probe");
                SessionProbe::Unreachable(err)
            }
            Err(err) => SessionProbe::Unauthenticated(err),
        }
    }

    /// `true` iff `me` resolves.
    pub async fn is_authenticated(&self) -> bool {
        self.probe().await.is_authenticated()
    }
}

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_string(), password: password.to_string() }
}
