//! Payment gateway payloads and checkout outcomes

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// `GET /payment/config`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfig {
    pub client_key: String,
    pub is_production: bool,
}

/// One row of `GET /payment/history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub order_id: String,
    pub amount: i64,
    pub status: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub paid_at: Option<String>,
}

/// Non-error results of a Snap checkout popup.
///
/// Together with [`CheckoutError`] these form the four disjoint outcomes
/// success, pending, error and closed.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    Success(Value),
    Pending(Value),
    Closed,
}

impl CheckoutOutcome {
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Pending(_) => "pending",
            Self::Closed => "closed",
        }
    }

    /// Gateway result payload; `None` for a closed popup.
    pub const fn details(&self) -> Option<&Value> {
        match self {
            Self::Success(details) | Self::Pending(details) => Some(details),
            Self::Closed => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckoutError {
    #[error("Payment failed: {0}")]
    Failed(Value),

    #[error("Midtrans Snap not loaded")]
    NotLoaded,

    /// The popup went away without reporting any outcome.
    #[error("Checkout interrupted before an outcome was reported")]
    Interrupted,
}

impl CheckoutError {
    pub const fn status(&self) -> &'static str {
        "error"
    }
}
