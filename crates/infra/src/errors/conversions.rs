//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use uplokal_domain::UplokalError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub UplokalError);

impl From<InfraError> for UplokalError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<UplokalError> for InfraError {
    fn from(value: UplokalError) -> Self {
        InfraError(value)
    }
}

trait IntoUplokalError {
    fn into_uplokal(self) -> UplokalError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → UplokalError */
/* -------------------------------------------------------------------------- */

impl IntoUplokalError for HttpError {
    fn into_uplokal(self) -> UplokalError {
        if self.is_timeout() {
            return UplokalError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return UplokalError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return UplokalError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => UplokalError::Auth(message),
                404 => UplokalError::NotFound(message),
                400..=499 => UplokalError::InvalidInput(message),
                _ => UplokalError::Network(message),
            };
        }

        UplokalError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_uplokal())
    }
}

/* -------------------------------------------------------------------------- */
/* config file formats → UplokalError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(UplokalError::Config(format!("invalid JSON config: {value}")))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        InfraError(UplokalError::Config(format!("invalid TOML config: {}", value.message())))
    }
}
