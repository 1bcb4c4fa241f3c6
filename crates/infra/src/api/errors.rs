//! API-specific error types
//!
//! `ApiError::Status` mirrors what the dashboard shows for a failed call:
//! the server's `detail` (or a generic message), the HTTP status, and the
//! parsed response body.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use uplokal_domain::types::CheckoutError;
use uplokal_domain::UplokalError;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// 401/403 - session missing or expired
    Authentication,
    /// 429
    RateLimit,
    /// 5xx
    Server,
    /// Other 4xx and responses the client could not use
    Client,
    /// Transport failures and timeouts
    Network,
    /// Client misconfiguration
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        /// Parsed response body, `Null` when it was not JSON.
        data: Value,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Expected a JSON response but received binary content")]
    UnexpectedBinary,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

impl ApiError {
    /// HTTP status of a server-reported failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed body of a server-reported failure.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Status { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Status { status, .. } => match status {
                401 | 403 => ApiErrorCategory::Authentication,
                429 => ApiErrorCategory::RateLimit,
                500..=599 => ApiErrorCategory::Server,
                _ => ApiErrorCategory::Client,
            },
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Decode(_) | Self::UnexpectedBinary | Self::Checkout(_) => {
                ApiErrorCategory::Client
            }
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    pub(crate) fn from_domain(err: UplokalError) -> Self {
        match err {
            UplokalError::Config(message) => Self::Config(message),
            UplokalError::InvalidInput(message) => Self::Config(message),
            UplokalError::Network(message)
            | UplokalError::Auth(message)
            | UplokalError::NotFound(message)
            | UplokalError::Internal(message) => Self::Network(message),
        }
    }
}

impl From<ApiError> for UplokalError {
    fn from(err: ApiError) -> Self {
        let message = err.to_string();
        match err {
            ApiError::Status { status, .. } => match status {
                401 | 403 => UplokalError::Auth(message),
                404 => UplokalError::NotFound(message),
                400..=499 => UplokalError::InvalidInput(message),
                _ => UplokalError::Network(message),
            },
            ApiError::Network(_) | ApiError::Timeout(_) => UplokalError::Network(message),
            ApiError::Config(_) => UplokalError::Config(message),
            ApiError::Decode(_) | ApiError::UnexpectedBinary | ApiError::Checkout(_) => {
                UplokalError::Internal(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn status(code: u16) -> ApiError {
        ApiError::Status { status: code, message: "Request failed".into(), data: Value::Null }
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(status(401).category(), ApiErrorCategory::Authentication);
        assert_eq!(status(403).category(), ApiErrorCategory::Authentication);
        assert_eq!(status(429).category(), ApiErrorCategory::RateLimit);
        assert_eq!(status(503).category(), ApiErrorCategory::Server);
        assert_eq!(status(422).category(), ApiErrorCategory::Client);
        assert_eq!(ApiError::Timeout(Duration::from_secs(1)).category(), ApiErrorCategory::Network);
        assert_eq!(ApiError::UnexpectedBinary.category(), ApiErrorCategory::Client);
    }

    #[test]
    fn status_error_displays_server_message() {
        let err = ApiError::Status {
            status: 400,
            message: "Business profile already exists".into(),
            data: json!({ "detail": "Business profile already exists" }),
        };

        assert_eq!(err.to_string(), "Business profile already exists");
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.data(), Some(&json!({ "detail": "Business profile already exists" })));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn converts_into_domain_error() {
        assert!(matches!(UplokalError::from(status(401)), UplokalError::Auth(_)));
        assert!(matches!(UplokalError::from(status(404)), UplokalError::NotFound(_)));
        assert!(matches!(UplokalError::from(status(422)), UplokalError::InvalidInput(_)));
        assert!(matches!(
            UplokalError::from(ApiError::Network("refused".into())),
            UplokalError::Network(_)
        ));
    }

    #[test]
    fn checkout_failure_keeps_gateway_message() {
        let err = ApiError::from(CheckoutError::NotLoaded);
        assert_eq!(err.to_string(), "Midtrans Snap not loaded");
        assert_eq!(err.status(), None);
    }
}
