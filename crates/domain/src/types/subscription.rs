//! Subscription plans and checkout initiation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::HashId;
use crate::impl_wire_enum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Starter,
    Pro,
    Enterprise,
}

impl_wire_enum!(PlanTier {
    Free => "free",
    Starter => "starter",
    Pro => "pro",
    Enterprise => "enterprise",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl_wire_enum!(BillingCycle {
    Monthly => "monthly",
    Yearly => "yearly",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: HashId,
    pub name: String,
    pub tier: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_monthly: i64,
    pub price_yearly: i64,
    pub currency: String,
    #[serde(default)]
    pub features: Vec<Value>,
    #[serde(default)]
    pub max_documents: i64,
    #[serde(default)]
    pub ai_diagnostic: bool,
    #[serde(default)]
    pub ai_assistant: bool,
    #[serde(default)]
    pub priority_support: bool,
    #[serde(default)]
    pub is_popular: bool,
}

impl Plan {
    /// Price for the given billing cycle, as charged by the backend.
    pub const fn price_for(&self, cycle: BillingCycle) -> i64 {
        match cycle {
            BillingCycle::Monthly => self.price_monthly,
            BillingCycle::Yearly => self.price_yearly,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSubscription {
    pub plan: Plan,
    pub status: String,
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub auto_renew: bool,
}

/// `POST /subscription/subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub plan_tier: PlanTier,
    pub billing_cycle: BillingCycle,
}

/// Free plans activate immediately; paid plans return a Snap token to
/// complete checkout with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub requires_payment: bool,
    #[serde(default)]
    pub snap_token: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub plan_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}
