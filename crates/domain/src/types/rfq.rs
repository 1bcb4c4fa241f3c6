//! Request-for-quotation and matchmaking payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::HashId;

/// `POST /rfq`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfqCreateRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_max: Option<f64>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl RfqCreateRequest {
    /// New request priced in USD, the backend default.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            category: None,
            quantity: None,
            budget_min: None,
            budget_max: None,
            currency: "USD".to_string(),
            deadline: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfqCreated {
    pub id: HashId,
    pub title: String,
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rfq {
    pub id: HashId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub budget_range: Option<String>,
    pub status: String,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfqList {
    pub rfqs: Vec<Rfq>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RfqListParams {
    pub category: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// One B2B match from `GET /rfq/matches`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub business_id: HashId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    pub compatibility_score: i64,
    #[serde(default)]
    pub match_reasons: Vec<String>,
}

/// Suggestions are generated server-side and carry no fixed schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfqSuggestions {
    #[serde(default)]
    pub suggestions: Vec<Value>,
}
