//! Document vault endpoints

use serde_json::Value;
use tracing::{debug, instrument};
use uplokal_domain::types::{Document, DocumentList, DocumentListParams, DocumentUpload, HashId, SignedUrl};
use urlencoding::encode;

use super::client::{ApiClient, MultipartForm};
use super::errors::ApiError;

/// `/documents/*`
#[derive(Debug, Clone, Copy)]
pub struct DocumentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> DocumentsApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Multipart upload with fields `file`, `category` and `description`.
    ///
    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self, upload), fields(file = %upload.file_name, category = %upload.category))]
    pub async fn upload(&self, upload: DocumentUpload) -> Result<Document, ApiError> {
        let DocumentUpload { file_name, content, mime_type, category, description } = upload;
        debug!(bytes = content.len(), "uploading document");

        let form = MultipartForm::new()
            .file("file", file_name, content, mime_type)
            .text("category", category)
            .text("description", description);

        self.client.upload("/documents/upload", form).await
    }

    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self))]
    pub async fn list(&self, params: &DocumentListParams) -> Result<DocumentList, ApiError> {
        self.client.get("/documents", params).await
    }

    /// Time-limited download link for a document.
    ///
    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self), fields(document = %id))]
    pub async fn signed_url(&self, id: &HashId) -> Result<SignedUrl, ApiError> {
        self.client.get(&format!("/documents/{}/signed-url", encode(id.as_str())), &()).await
    }

    /// Fetch the file behind a signed URL.
    ///
    /// # Errors
    /// `"Download failed"` status error on any non-2xx response.
    pub async fn download(&self, signed: &SignedUrl) -> Result<Vec<u8>, ApiError> {
        self.client.download(&signed.download_url).await
    }

    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self), fields(document = %id))]
    pub async fn delete(&self, id: &HashId) -> Result<Value, ApiError> {
        self.client.delete(&format!("/documents/{}", encode(id.as_str()))).await
    }
}
