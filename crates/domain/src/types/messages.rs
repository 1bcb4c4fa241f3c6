//! Business-to-business messaging payloads

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::HashId;

/// `POST /messages/send`
///
/// `subject` is always present in the body, as `null` when not given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub recipient_id: HashId,
    pub content: String,
    pub subject: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSent {
    pub message: String,
    pub conversation_id: HashId,
    pub message_id: HashId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: HashId,
    #[serde(default)]
    pub other_party: Value,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub last_message_at: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: HashId,
    pub sender_id: HashId,
    pub content: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}
