//! Document vault payloads

use serde::{Deserialize, Serialize};

use super::ids::HashId;
use crate::constants::DEFAULT_DOCUMENT_CATEGORY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: HashId,
    pub filename: String,
    pub category: String,
    pub file_size: u64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentList {
    pub documents: Vec<Document>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentListParams {
    pub category: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Time-limited download link (`GET /documents/{hash}/signed-url`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedUrl {
    pub download_url: String,
    pub expires_in_seconds: u64,
}

/// A file to send as the multipart `file` part, together with the
/// `category` and `description` form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content: Vec<u8>,
    pub mime_type: Option<String>,
    pub category: String,
    pub description: String,
}

impl DocumentUpload {
    /// Upload in the default `other` category with an empty description.
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
            mime_type: None,
            category: DEFAULT_DOCUMENT_CATEGORY.to_string(),
            description: String::new(),
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}
