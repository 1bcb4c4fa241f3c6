//! Authentication payloads
//!
//! The session token itself never appears here: the backend sets it as an
//! HttpOnly cookie and the client only ever sees these bodies.

use serde::{Deserialize, Serialize};

use super::ids::HashId;

/// `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// `POST /auth/login` and `POST /auth/admin-login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// User summary embedded in the login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: HashId,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// `GET /auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: HashId,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Plain acknowledgement returned by register/logout and several admin calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default = "default_true")]
    pub success: bool,
}

const fn default_true() -> bool {
    true
}
