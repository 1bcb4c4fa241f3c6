//! Uplokal backend API client
//!
//! [`ApiClient`] is the request core; each backend namespace is a borrowed
//! view over it:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use uplokal_core::session::IgnoreSessionExpiry;
//! use uplokal_domain::config::ApiConfig;
//! use uplokal_domain::types::HashId;
//! use uplokal_infra::api::{ApiClient, ApiError};
//!
//! # async fn example() -> Result<(), ApiError> {
//! let client = ApiClient::new(&ApiConfig::default(), Arc::new(IgnoreSessionExpiry))?;
//! client.auth().login("owner@example.com", "secret").await?;
//! client.messages().send(&HashId::new("abc123"), "Hello", None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - Uses the shared `HttpClient` (no direct reqwest in namespaces)
//! - Session carried by an HttpOnly cookie in the client's cookie jar
//! - Timeout on every call
//! - 401 handling injected as a `SessionExpiryHandler`

pub mod admin;
pub mod auth;
pub mod business;
pub mod client;
pub mod diagnostic;
pub mod documents;
pub mod errors;
pub mod messages;
pub mod payment;
pub mod query;
pub mod rfq;
pub mod subscription;

pub use admin::AdminApi;
pub use auth::{AuthApi, SessionProbe};
pub use business::BusinessApi;
pub use client::{ApiClient, ApiClientBuilder, ApiPayload, MultipartForm};
pub use diagnostic::DiagnosticApi;
pub use documents::DocumentsApi;
pub use errors::{ApiError, ApiErrorCategory};
pub use messages::MessagesApi;
pub use payment::{checkout_channel, snap_script_url, CheckoutCallbacks, CheckoutReceiver, PaymentApi};
pub use query::encode_query;
pub use rfq::RfqApi;
pub use subscription::SubscriptionApi;

impl ApiClient {
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub const fn business(&self) -> BusinessApi<'_> {
        BusinessApi::new(self)
    }

    pub const fn diagnostic(&self) -> DiagnosticApi<'_> {
        DiagnosticApi::new(self)
    }

    pub const fn documents(&self) -> DocumentsApi<'_> {
        DocumentsApi::new(self)
    }

    pub const fn rfq(&self) -> RfqApi<'_> {
        RfqApi::new(self)
    }

    pub const fn messages(&self) -> MessagesApi<'_> {
        MessagesApi::new(self)
    }

    pub const fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    pub const fn subscription(&self) -> SubscriptionApi<'_> {
        SubscriptionApi::new(self)
    }

    pub const fn payment(&self) -> PaymentApi<'_> {
        PaymentApi::new(self)
    }
}
