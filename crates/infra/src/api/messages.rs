//! Business-to-business messaging endpoints

use tracing::instrument;
use uplokal_domain::constants::DEFAULT_CONVERSATION_LIMIT;
use uplokal_domain::types::{Conversation, HashId, LimitParam, Message, MessageSent, SendMessageRequest};
use urlencoding::encode;

use super::client::ApiClient;
use super::errors::ApiError;

/// `/messages/*`
#[derive(Debug, Clone, Copy)]
pub struct MessagesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MessagesApi<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Message another business. `subject` is sent as `null` when absent.
    ///
    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self, content), fields(recipient = %recipient))]
    pub async fn send(
        &self,
        recipient: &HashId,
        content: &str,
        subject: Option<&str>,
    ) -> Result<MessageSent, ApiError> {
        let request = SendMessageRequest {
            recipient_id: recipient.clone(),
            content: content.to_string(),
            subject: subject.map(str::to_string),
        };
        self.client.post("/messages/send", &request).await
    }

    /// # Errors
    /// See [`ApiError`].
    pub async fn conversations(&self) -> Result<Vec<Conversation>, ApiError> {
        self.client.get("/messages/conversations", &()).await
    }

    /// Latest messages of a conversation, 50 unless `limit` is given.
    ///
    /// # Errors
    /// See [`ApiError`].
    #[instrument(skip(self), fields(conversation = %id))]
    pub async fn conversation(&self, id: &HashId, limit: Option<u32>) -> Result<Vec<Message>, ApiError> {
        let params = LimitParam { limit: limit.unwrap_or(DEFAULT_CONVERSATION_LIMIT) };
        self.client.get(&format!("/messages/{}", encode(id.as_str())), &params).await
    }
}
