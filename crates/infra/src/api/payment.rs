//! Payment endpoints and the Snap checkout bridge
//!
//! Paid subscriptions return a Snap token. The checkout itself runs in the
//! host's Midtrans Snap popup, which reports back through four callbacks.
//! [`checkout_channel`] turns those callbacks into a single awaited
//! outcome: whichever callback fires first wins, later ones are ignored.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::oneshot;
use tracing::{debug, info, instrument, warn};
use uplokal_core::payment::CheckoutGateway;
use uplokal_domain::constants::{SNAP_PRODUCTION_SCRIPT, SNAP_SANDBOX_SCRIPT};
use uplokal_domain::types::{CheckoutError, CheckoutOutcome, PaymentConfig, PaymentRecord};

use super::client::ApiClient;
use super::errors::ApiError;

type CheckoutResult = Result<CheckoutOutcome, CheckoutError>;

/// `/payment/*`
#[derive(Debug, Clone, Copy)]
pub struct PaymentApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PaymentApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Snap client key and environment.
    ///
    /// # Errors
    /// See [`ApiError`]; 503 when the gateway is not configured.
    pub async fn config(&self) -> Result<PaymentConfig, ApiError> {
        self.client.get("/payment/config", &()).await
    }

    /// # Errors
    /// See [`ApiError`].
    pub async fn history(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        self.client.get("/payment/history", &()).await
    }

    /// Run the checkout for `token` through `gateway`.
    ///
    /// # Errors
    /// `ApiError::Checkout` when the gateway reports an error or is not
    /// loaded.
    #[instrument(skip(self, gateway, token))]
    pub async fn open_checkout(
        &self,
        gateway: &dyn CheckoutGateway,
        token: &str,
    ) -> Result<CheckoutOutcome, ApiError> {
        match gateway.pay(token).await {
            Ok(outcome) => {
                info!(status = outcome.status(), "checkout finished");
                Ok(outcome)
            }
            Err(err) => {
                warn!(error = %err, "checkout failed");
                Err(err.into())
            }
        }
    }

    /// Snap script for the given environment.
    pub const fn snap_script_url(is_production: bool) -> &'static str {
        snap_script_url(is_production)
    }
}

/// Snap script for the given environment.
pub const fn snap_script_url(is_production: bool) -> &'static str {
    if is_production {
        SNAP_PRODUCTION_SCRIPT
    } else {
        SNAP_SANDBOX_SCRIPT
    }
}

/// Callback set handed to the checkout popup.
///
/// Clones share the same slot, so each callback may live in a different
/// closure. Only the first call resolves the paired [`CheckoutReceiver`].
#[derive(Debug, Clone)]
pub struct CheckoutCallbacks {
    slot: Arc<Mutex<Option<oneshot::Sender<CheckoutResult>>>>,
}

impl CheckoutCallbacks {
    pub fn on_success(&self, result: Value) {
        self.resolve(Ok(CheckoutOutcome::Success(result)));
    }

    pub fn on_pending(&self, result: Value) {
        self.resolve(Ok(CheckoutOutcome::Pending(result)));
    }

    pub fn on_error(&self, result: Value) {
        self.resolve(Err(CheckoutError::Failed(result)));
    }

    pub fn on_close(&self) {
        self.resolve(Ok(CheckoutOutcome::Closed));
    }

    /// The checkout widget is missing; fail without opening anything.
    pub fn not_loaded(&self) {
        self.resolve(Err(CheckoutError::NotLoaded));
    }

    /// `true` once any callback has fired.
    pub fn is_resolved(&self) -> bool {
        self.slot.lock().is_none()
    }

    fn resolve(&self, result: CheckoutResult) {
        let Some(sender) = self.slot.lock().take() else {
            debug!("checkout already resolved, ignoring callback");
            return;
        };
        // A dropped receiver means nobody is waiting any more.
        let _ = sender.send(result);
    }
}

/// Awaits the outcome reported through [`CheckoutCallbacks`].
#[derive(Debug)]
pub struct CheckoutReceiver {
    rx: oneshot::Receiver<CheckoutResult>,
}

impl CheckoutReceiver {
    /// # Errors
    /// The gateway's error, or [`CheckoutError::Interrupted`] when every
    /// callback was dropped without firing.
    pub async fn outcome(self) -> CheckoutResult {
        self.rx.await.unwrap_or(Err(CheckoutError::Interrupted))
    }
}

/// Fresh callback set and the receiver it resolves.
pub fn checkout_channel() -> (CheckoutCallbacks, CheckoutReceiver) {
    let (tx, rx) = oneshot::channel();
    (CheckoutCallbacks { slot: Arc::new(Mutex::new(Some(tx))) }, CheckoutReceiver { rx })
}
