//! Error types used throughout the workspace

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Uplokal
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum UplokalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Uplokal operations
pub type Result<T> = std::result::Result<T, UplokalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let err = UplokalError::Auth("session expired".into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({"type": "Auth", "message": "session expired"}));
    }

    #[test]
    fn display_includes_category() {
        let err = UplokalError::InvalidInput("title is required".into());
        assert_eq!(err.to_string(), "Invalid input: title is required");
    }
}
