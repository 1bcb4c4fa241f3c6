//! Wire types for the Uplokal REST backend
//!
//! One module per backend namespace. Every path identifier is an opaque
//! [`HashId`]; timestamps are carried as the ISO-8601 strings the backend
//! emits.

pub mod admin;
pub mod auth;
pub mod business;
pub mod diagnostic;
pub mod documents;
pub mod ids;
pub mod messages;
pub mod payment;
pub mod rfq;
pub mod subscription;

pub use admin::{AdminLogs, AdminStats, AdminUser, AdminUserParams, LogEntry, VerifyBusinessRequest};
pub use auth::{Credentials, CurrentUser, LoginResponse, MessageResponse, RegisterRequest, SessionUser};
pub use business::{
    Business, BusinessCreateRequest, BusinessList, BusinessUpdateRequest, DirectoryFilters,
};
pub use diagnostic::{DiagnosticResult, DiagnosticSubmission};
pub use documents::{Document, DocumentList, DocumentListParams, DocumentUpload, SignedUrl};
pub use ids::HashId;
pub use messages::{Conversation, Message, MessageSent, SendMessageRequest};
pub use payment::{CheckoutError, CheckoutOutcome, PaymentConfig, PaymentRecord};
pub use rfq::{MatchResult, Rfq, RfqCreateRequest, RfqCreated, RfqList, RfqListParams, RfqSuggestions};
pub use subscription::{
    BillingCycle, CancelResponse, Plan, PlanTier, SubscribeRequest, SubscribeResponse,
    UserSubscription,
};

/// Query parameter carrying only a `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct LimitParam {
    pub limit: u32,
}
