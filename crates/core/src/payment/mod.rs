//! Checkout gateway port
//!
//! Paid subscriptions finish in a third-party checkout popup (Midtrans
//! Snap) opened with the token returned by the subscribe endpoint. The
//! popup ends in exactly one of four ways: success, pending, error or
//! closed. Success and pending carry the gateway's result payload.

use async_trait::async_trait;
use uplokal_domain::types::{CheckoutError, CheckoutOutcome};

/// Opens a checkout for a payment token and waits for its outcome.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// # Errors
    /// [`CheckoutError::Failed`] when the gateway reports an error,
    /// [`CheckoutError::NotLoaded`] when the checkout widget is unavailable.
    async fn pay(&self, token: &str) -> Result<CheckoutOutcome, CheckoutError>;
}
