//! Admin console payloads

use serde::{Deserialize, Serialize};

use super::ids::HashId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminStats {
    pub total_users: u64,
    pub total_businesses: u64,
    pub verified_businesses: u64,
    pub total_documents: u64,
    pub total_rfqs: u64,
    pub open_rfqs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: HashId,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

/// Query for `GET /admin/users`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdminUserParams {
    pub role: Option<String>,
    pub is_active: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyBusinessRequest {
    pub verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub user_id: Option<HashId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLogs {
    pub logs: Vec<LogEntry>,
    pub total: u64,
}
