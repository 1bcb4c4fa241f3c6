//! AI business diagnostic endpoints

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::instrument;
use uplokal_domain::types::{DiagnosticResult, DiagnosticSubmission};

use super::client::ApiClient;
use super::errors::ApiError;

/// `/diagnostic/*`
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DiagnosticApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Submit questionnaire answers, sent as `{"answers": {...}}`.
    ///
    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self, answers), fields(answers = answers.len()))]
    pub async fn submit(&self, answers: BTreeMap<String, Value>) -> Result<DiagnosticResult, ApiError> {
        self.client.post("/diagnostic/submit", &DiagnosticSubmission { answers }).await
    }

    /// Latest result for the current business.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn result(&self) -> Result<DiagnosticResult, ApiError> {
        self.client.get("/diagnostic/result", &()).await
    }
}
