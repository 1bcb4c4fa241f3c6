//! AI business diagnostic payloads

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `POST /diagnostic/submit` body: `{"answers": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticSubmission {
    pub answers: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    pub health_score: i64,
    #[serde(default)]
    pub scores: BTreeMap<String, i64>,
    pub status: String,
    #[serde(default)]
    pub recommendations: Vec<Value>,
    #[serde(default)]
    pub export_readiness: Value,
}
